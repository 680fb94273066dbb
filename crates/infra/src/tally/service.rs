//! Masters, plain and inventory voucher creates, and reports.
//!
//! Voucher update and delete are not here; they run through
//! `ledgerlink_core::ReconciliationService` over [`super::TallyVoucherGateway`].

use ledgerlink_domain::{
    BalanceSheetRow, GroupInput, ImportOutcome, LedgerInput, LedgerLinkError, LedgerTransaction,
    PurchaseVoucherInput, Result, SalesVoucherInput, StockItemBalance, StockItemInput,
    StockJournalInput, StockWriteResult, TrialBalanceRow, VoucherDraft, WriteAction,
};
use serde::Serialize;
use tracing::{info, warn};

use super::builders;
use super::client::TallyClient;
use super::parsers::{
    parse_balance_sheet, parse_ledger_vouchers, parse_stock_items, parse_trial_balance,
};

/// A confirmed write and the remote id it was sent under, when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    pub outcome: ImportOutcome,
}

#[derive(Clone)]
pub struct TallyService {
    client: TallyClient,
}

impl TallyService {
    pub fn new(client: TallyClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TallyClient {
        &self.client
    }

    pub async fn save_ledger(
        &self,
        input: &LedgerInput,
        action: WriteAction,
    ) -> Result<WriteReceipt> {
        let envelope = builders::ledger(input, action)?;
        let outcome = self.write(envelope, action, "Ledger").await?;
        info!(
            company = %input.company_name,
            ledger = %input.ledger_name,
            %action,
            "Ledger written"
        );
        Ok(WriteReceipt { remote_id: None, outcome })
    }

    pub async fn create_voucher(&self, draft: &VoucherDraft) -> Result<WriteReceipt> {
        let voucher = draft.to_descriptor()?;
        let remote_id = voucher.remote_id_or_derived();
        let outcome =
            self.write(builders::create_voucher(&voucher)?, WriteAction::Create, "Voucher").await?;
        info!(company = %voucher.company_name, remote_id = %remote_id, "Voucher created");
        Ok(WriteReceipt { remote_id: Some(remote_id.to_string()), outcome })
    }

    pub async fn create_purchase_voucher(
        &self,
        input: &PurchaseVoucherInput,
    ) -> Result<WriteReceipt> {
        let voucher = input.to_voucher()?;
        let outcome = self
            .write(builders::inventory_voucher(&voucher)?, WriteAction::Create, "Purchase voucher")
            .await?;
        info!(
            company = %voucher.company_name,
            remote_id = %voucher.remote_id,
            "Purchase voucher created"
        );
        Ok(WriteReceipt { remote_id: Some(voucher.remote_id.to_string()), outcome })
    }

    pub async fn create_sales_voucher(&self, input: &SalesVoucherInput) -> Result<WriteReceipt> {
        let voucher = input.to_voucher()?;
        let outcome = self
            .write(builders::inventory_voucher(&voucher)?, WriteAction::Create, "Sales voucher")
            .await?;
        info!(
            company = %voucher.company_name,
            remote_id = %voucher.remote_id,
            "Sales voucher created"
        );
        Ok(WriteReceipt { remote_id: Some(voucher.remote_id.to_string()), outcome })
    }

    pub async fn create_group(&self, input: &GroupInput) -> Result<WriteReceipt> {
        let envelope = builders::create_group(input)?;
        let outcome = self.write(envelope, WriteAction::Create, "Group").await?;
        info!(company = %input.company_name, group = %input.group_name, "Group created");
        Ok(WriteReceipt { remote_id: None, outcome })
    }

    pub async fn delete_group(&self, input: &GroupInput) -> Result<WriteReceipt> {
        let envelope = builders::delete_group(input)?;
        let outcome = self.write(envelope, WriteAction::Delete, "Group").await?;
        info!(company = %input.company_name, group = %input.group_name, "Group deleted");
        Ok(WriteReceipt { remote_id: None, outcome })
    }

    /// Create a stock item, then read back its closing balance.
    pub async fn create_stock_item(&self, input: &StockItemInput) -> Result<StockWriteResult> {
        let outcome =
            self.write(builders::stock_item(input)?, WriteAction::Create, "Stock item").await?;
        let closing_balance = self.closing_balance(&input.company_name, &input.item_name).await;
        Ok(StockWriteResult { outcome, closing_balance })
    }

    /// Post a stock journal, then read back the item's closing balance.
    pub async fn create_stock_journal(
        &self,
        input: &StockJournalInput,
    ) -> Result<StockWriteResult> {
        let journal = input.to_journal()?;
        let outcome = self
            .write(builders::stock_journal(&journal)?, WriteAction::Create, "Stock journal")
            .await?;
        let closing_balance = self.closing_balance(&journal.company_name, &journal.item_name).await;
        Ok(StockWriteResult { outcome, closing_balance })
    }

    pub async fn stock_items(&self, company: &str) -> Result<Vec<StockItemBalance>> {
        let body = self.client.export(builders::stock_items_request(company)?).await?;
        Ok(parse_stock_items(&body))
    }

    pub async fn trial_balance(&self, company: &str) -> Result<Vec<TrialBalanceRow>> {
        let body = self.client.export(builders::trial_balance_request(company)?).await?;
        Ok(parse_trial_balance(&body))
    }

    pub async fn balance_sheet(&self, company: &str) -> Result<Vec<BalanceSheetRow>> {
        let body = self.client.export(builders::balance_sheet_request(company)?).await?;
        Ok(parse_balance_sheet(&body))
    }

    pub async fn ledger_transactions(
        &self,
        company: &str,
        ledger: &str,
    ) -> Result<Vec<LedgerTransaction>> {
        let body = self.client.export(builders::ledger_vouchers_request(company, ledger)?).await?;
        Ok(parse_ledger_vouchers(&body))
    }

    /// Send `envelope` and require its counters to confirm `action`.
    async fn write(
        &self,
        envelope: String,
        action: WriteAction,
        entity: &str,
    ) -> Result<ImportOutcome> {
        let outcome = self.client.import(envelope).await?;
        if outcome.confirms(action) {
            Ok(outcome)
        } else {
            Err(LedgerLinkError::Rejected(format!(
                "{entity} {} was not applied ({})",
                action.as_str().to_lowercase(),
                outcome.describe()
            )))
        }
    }

    /// The write already succeeded, so a failed lookup is logged and
    /// reported as an unknown balance.
    async fn closing_balance(&self, company: &str, item_name: &str) -> Option<String> {
        let item_name = item_name.trim();
        match self.stock_items(company).await {
            Ok(items) => items
                .into_iter()
                .find(|item| item.name.as_deref() == Some(item_name))
                .and_then(|item| item.closing_balance),
            Err(err) => {
                warn!(company, item = item_name, error = %err, "closing balance lookup failed");
                None
            }
        }
    }
}
