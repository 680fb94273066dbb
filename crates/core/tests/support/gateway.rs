//! In-memory `VoucherGateway` for reconciliation tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ledgerlink_core::VoucherGateway;
use ledgerlink_domain::{
    ImportOutcome, LedgerEntry, RemoteId, RemoteVoucher, Result as DomainResult,
    VoucherDescriptor,
};
use rust_decimal::Decimal;
use tokio::sync::Barrier;

/// One remote request observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    List { company: String },
    Delete { company: String, remote_id: RemoteId, voucher_type: String },
    Create { voucher: VoucherDescriptor },
}

/// Stateful mock: deletes remove from the list, creates append to it.
///
/// Individual create or delete responses can be scripted; once the script
/// runs out the mock falls back to its stateful behaviour.
#[derive(Default)]
pub struct MockVoucherGateway {
    vouchers: Mutex<Vec<RemoteVoucher>>,
    scripted_deletes: Mutex<VecDeque<DomainResult<ImportOutcome>>>,
    scripted_creates: Mutex<VecDeque<DomainResult<ImportOutcome>>>,
    calls: Mutex<Vec<GatewayCall>>,
    list_barrier: Option<Arc<Barrier>>,
}

impl MockVoucherGateway {
    pub fn new(vouchers: Vec<RemoteVoucher>) -> Self {
        Self { vouchers: Mutex::new(vouchers), ..Self::default() }
    }

    /// Hold every `list_vouchers` call until `parties` callers are listing.
    pub fn with_list_barrier(mut self, parties: usize) -> Self {
        self.list_barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn script_delete(self, result: DomainResult<ImportOutcome>) -> Self {
        self.scripted_deletes.lock().unwrap().push_back(result);
        self
    }

    pub fn script_create(self, result: DomainResult<ImportOutcome>) -> Self {
        self.scripted_creates.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<VoucherDescriptor> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Create { voucher } => Some(voucher),
                _ => None,
            })
            .collect()
    }

    pub fn delete_count(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, GatewayCall::Delete { .. })).count()
    }

    pub fn vouchers(&self) -> Vec<RemoteVoucher> {
        self.vouchers.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VoucherGateway for MockVoucherGateway {
    async fn list_vouchers(&self, company: &str) -> DomainResult<Vec<RemoteVoucher>> {
        self.record(GatewayCall::List { company: company.to_string() });
        let snapshot = self.vouchers();
        if let Some(barrier) = &self.list_barrier {
            barrier.wait().await;
        }
        Ok(snapshot)
    }

    async fn delete_voucher(
        &self,
        company: &str,
        remote_id: &RemoteId,
        voucher_type: &str,
    ) -> DomainResult<ImportOutcome> {
        self.record(GatewayCall::Delete {
            company: company.to_string(),
            remote_id: remote_id.clone(),
            voucher_type: voucher_type.to_string(),
        });
        if let Some(result) = self.scripted_deletes.lock().unwrap().pop_front() {
            return result;
        }

        let mut vouchers = self.vouchers.lock().unwrap();
        let before = vouchers.len();
        vouchers.retain(|voucher| voucher.remote_id.as_ref() != Some(remote_id));
        let deleted = u32::try_from(before - vouchers.len()).unwrap();
        Ok(ImportOutcome { deleted: Some(deleted), ..ImportOutcome::default() })
    }

    async fn create_voucher(&self, voucher: &VoucherDescriptor) -> DomainResult<ImportOutcome> {
        self.record(GatewayCall::Create { voucher: voucher.clone() });
        if let Some(result) = self.scripted_creates.lock().unwrap().pop_front() {
            return result;
        }

        let [from, to] = voucher.ledger_entries();
        self.vouchers.lock().unwrap().push(RemoteVoucher {
            remote_id: Some(voucher.remote_id_or_derived()),
            voucher_type: voucher.voucher_type.clone(),
            voucher_number: voucher.voucher_number.clone(),
            date: voucher.date.clone(),
            narration: Some(voucher.narration_or_default()),
            entries: vec![from, to],
        });
        Ok(ImportOutcome { created: Some(1), ..ImportOutcome::default() })
    }
}

/// A simple exported voucher moving `amount` from `from` to `to`.
pub fn remote_voucher(id: &str, from: &str, to: &str, amount: i64, date: &str) -> RemoteVoucher {
    RemoteVoucher {
        remote_id: Some(RemoteId::new(id)),
        voucher_type: "Payment".into(),
        voucher_number: None,
        date: date.into(),
        narration: Some(format!("Transfer from {from} to {to}")),
        entries: vec![
            LedgerEntry::new(from, Decimal::new(-amount, 0)),
            LedgerEntry::new(to, Decimal::new(amount, 0)),
        ],
    }
}
