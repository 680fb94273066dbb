//! Write and read envelope builders.
//!
//! Every write builder validates its input before emitting anything, so an
//! invalid payload never reaches the ledger server.

pub mod group;
pub mod inventory;
pub mod ledger;
pub mod reports;
pub mod stock;
pub mod voucher;

pub use group::{create_group, delete_group};
pub use inventory::inventory_voucher;
pub use ledger::ledger;
pub use reports::{
    balance_sheet_request, ledger_vouchers_request, stock_items_request, trial_balance_request,
    voucher_list_request,
};
pub use stock::{stock_item, stock_journal};
pub use voucher::{create_voucher, delete_voucher};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
