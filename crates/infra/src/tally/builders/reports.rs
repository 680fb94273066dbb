//! Read requests: report exports and collection exports.

use ledgerlink_domain::validation::require;
use ledgerlink_domain::Result;

use crate::tally::envelope;

pub const STOCK_ITEM_FETCH: &str = "Name,Parent,ClosingBalance,BaseUnits";
pub const VOUCHER_FETCH: &str = "RemoteID,Date,VoucherTypeName,VoucherNumber,Narration,\
                                 AllLedgerEntries.LedgerName,AllLedgerEntries.Amount";

pub fn trial_balance_request(company: &str) -> Result<String> {
    let company = require("company_name", company)?;
    envelope::export("Trial Balance", company, &[("EXPLODEFLAG", "Yes")])
}

pub fn balance_sheet_request(company: &str) -> Result<String> {
    let company = require("company_name", company)?;
    envelope::export("Balance Sheet", company, &[("EXPLODEALLLEVELS", "Yes")])
}

pub fn ledger_vouchers_request(company: &str, ledger: &str) -> Result<String> {
    let company = require("company_name", company)?;
    let ledger = require("ledger_name", ledger)?;
    envelope::export("Ledger Vouchers", company, &[("LEDGERNAME", ledger)])
}

pub fn stock_items_request(company: &str) -> Result<String> {
    let company = require("company_name", company)?;
    envelope::collection("StockItems", company, "Stock Item", STOCK_ITEM_FETCH)
}

/// Bulk export of every voucher of `company`, ledger entries included.
pub fn voucher_list_request(company: &str) -> Result<String> {
    let company = require("company_name", company)?;
    envelope::collection("Vouchers", company, "Voucher", VOUCHER_FETCH)
}

#[cfg(test)]
mod tests {
    use ledgerlink_domain::LedgerLinkError;

    use super::*;
    use crate::xml::XmlNode;

    #[test]
    fn report_requests_name_their_report() {
        let cases = [
            (trial_balance_request("RYUKS").unwrap(), "Trial Balance", "EXPLODEFLAG"),
            (balance_sheet_request("RYUKS").unwrap(), "Balance Sheet", "EXPLODEALLLEVELS"),
            (ledger_vouchers_request("RYUKS", "Cash").unwrap(), "Ledger Vouchers", "LEDGERNAME"),
        ];

        for (xml, report, variable) in cases {
            let root = XmlNode::parse(&xml).unwrap();
            assert_eq!(root.find_text("TALLYREQUEST"), Some("Export Data"));
            assert_eq!(root.find_text("REPORTNAME"), Some(report));
            assert!(root.find(variable).is_some(), "{report} lacks {variable}");
        }
    }

    #[test]
    fn voucher_list_fetches_ledger_entries() {
        let root = XmlNode::parse(&voucher_list_request("RYUKS").unwrap()).unwrap();

        assert_eq!(root.find_text("TYPE"), Some("Collection"));
        let collection = root.find("COLLECTION").unwrap();
        assert_eq!(collection.child_text("TYPE"), Some("Voucher"));
        assert!(collection.child_text("FETCH").unwrap().contains("AllLedgerEntries.Amount"));
    }

    #[test]
    fn reads_require_company() {
        assert_eq!(
            stock_items_request("").unwrap_err(),
            LedgerLinkError::missing_field("company_name")
        );
    }
}
