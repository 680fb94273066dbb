//! Report records read back from the ledger server.
//!
//! Balance-sheet and ledger-voucher amounts stay as the server printed
//! them; only the trial balance is numeric.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub ledger_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub debit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    pub account: String,
    pub closing_balance: String,
}

/// One line of the ledger-vouchers report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    pub date: Option<String>,
    pub ledger: Option<String>,
    pub voucher_type: Option<String>,
    pub debit: String,
    pub credit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItemBalance {
    pub name: Option<String>,
    pub parent: Option<String>,
    pub unit: Option<String>,
    pub closing_balance: Option<String>,
}
