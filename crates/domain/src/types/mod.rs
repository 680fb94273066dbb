//! Domain types and models

pub mod inventory;
pub mod masters;
pub mod numeric;
pub mod reports;
pub mod voucher;
pub mod write;

pub use inventory::{
    InventoryLine, InventoryVoucher, PricedLine, PurchaseVoucherInput, SalesVoucherInput,
    StockDirection, StockItemInput, StockJournal, StockJournalInput,
};
pub use masters::{GroupInput, LedgerInput};
pub use numeric::{format_amount, NumericText};
pub use reports::{BalanceSheetRow, LedgerTransaction, StockItemBalance, TrialBalanceRow};
pub use voucher::{
    LedgerEntry, RemoteId, RemoteVoucher, VoucherCriteria, VoucherDescriptor, VoucherDraft,
};
pub use write::{ImportOutcome, StockWriteResult, WriteAction};
