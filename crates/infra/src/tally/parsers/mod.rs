//! Record parsers for ledger server responses.
//!
//! The report parsers treat an unreadable document as an empty report and
//! log it. The voucher list and import response parsers return the error,
//! since callers act on their content.

pub mod import_response;
pub mod reports;
pub mod stock_items;
pub mod voucher_list;

pub use import_response::parse_import_response;
pub use reports::{parse_balance_sheet, parse_ledger_vouchers, parse_trial_balance};
pub use stock_items::parse_stock_items;
pub use voucher_list::parse_voucher_list;

use tracing::error;

use crate::xml::XmlNode;

/// Parse `xml` for a report, logging and yielding `None` when unreadable.
fn report_document(report: &str, xml: &str) -> Option<XmlNode> {
    match XmlNode::parse(xml) {
        Ok(root) => Some(root),
        Err(err) => {
            error!(report, error = %err, "discarding unreadable report response");
            None
        }
    }
}
