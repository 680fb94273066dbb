//! [`VoucherGateway`] over the ledger server protocol.

use std::time::Instant;

use async_trait::async_trait;
use ledgerlink_core::VoucherGateway;
use ledgerlink_domain::{ImportOutcome, RemoteId, RemoteVoucher, Result, VoucherDescriptor};
use tracing::debug;

use super::builders;
use super::client::TallyClient;
use super::parsers::parse_voucher_list;

pub struct TallyVoucherGateway {
    client: TallyClient,
}

impl TallyVoucherGateway {
    pub fn new(client: TallyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VoucherGateway for TallyVoucherGateway {
    async fn list_vouchers(&self, company: &str) -> Result<Vec<RemoteVoucher>> {
        let started = Instant::now();
        let body = self.client.export(builders::voucher_list_request(company)?).await?;
        let vouchers = parse_voucher_list(&body)?;
        debug!(
            company,
            count = vouchers.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "listed vouchers"
        );
        Ok(vouchers)
    }

    async fn delete_voucher(
        &self,
        company: &str,
        remote_id: &RemoteId,
        voucher_type: &str,
    ) -> Result<ImportOutcome> {
        let envelope = builders::delete_voucher(company, remote_id, voucher_type)?;
        let outcome = self.client.import(envelope).await?;
        debug!(company, remote_id = %remote_id, deleted = ?outcome.deleted, "delete sent");
        Ok(outcome)
    }

    async fn create_voucher(&self, voucher: &VoucherDescriptor) -> Result<ImportOutcome> {
        let envelope = builders::create_voucher(voucher)?;
        let outcome = self.client.import(envelope).await?;
        debug!(
            company = %voucher.company_name,
            remote_id = %voucher.remote_id_or_derived(),
            created = ?outcome.created,
            "create sent"
        );
        Ok(outcome)
    }
}
