//! Voucher port interfaces

use async_trait::async_trait;
use ledgerlink_domain::{ImportOutcome, RemoteId, RemoteVoucher, Result, VoucherDescriptor};

/// Remote voucher operations the reconciliation engine relies on.
///
/// Implementations issue exactly one remote request per call. Transport
/// failures and non-success statuses come back as `Err`; a delivered import
/// response comes back as its counters, even when they report no effect.
#[async_trait]
pub trait VoucherGateway: Send + Sync {
    /// Every voucher of `company`, in export order.
    async fn list_vouchers(&self, company: &str) -> Result<Vec<RemoteVoucher>>;

    /// Delete the voucher addressed by `remote_id`.
    async fn delete_voucher(
        &self,
        company: &str,
        remote_id: &RemoteId,
        voucher_type: &str,
    ) -> Result<ImportOutcome>;

    /// Create `voucher` under its carried (or derived) remote id.
    async fn create_voucher(&self, voucher: &VoucherDescriptor) -> Result<ImportOutcome>;
}
