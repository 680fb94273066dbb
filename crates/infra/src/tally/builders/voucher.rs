//! Plain two-entry voucher writes.

use ledgerlink_domain::constants::ACCOUNTING_VOUCHER_VIEW;
use ledgerlink_domain::validation::require;
use ledgerlink_domain::{
    format_amount, LedgerEntry, RemoteId, Result, VoucherDescriptor, WriteAction,
};

use super::yes_no;
use crate::tally::envelope::{self, ImportReport};
use crate::xml::XmlWriter;

/// Create envelope for `voucher`, addressed by its carried remote id or the
/// one derived from its key fields.
pub fn create_voucher(voucher: &VoucherDescriptor) -> Result<String> {
    voucher.validate()?;
    let remote_id = voucher.remote_id_or_derived();
    let narration = voucher.narration_or_default();
    let [source, destination] = voucher.ledger_entries();

    let attributes = [
        ("REMOTEID", remote_id.as_str()),
        ("VCHTYPE", voucher.voucher_type.as_str()),
        ("ACTION", WriteAction::Create.as_str()),
        ("OBJVIEW", ACCOUNTING_VOUCHER_VIEW),
    ];

    envelope::import(ImportReport::Vouchers, &voucher.company_name, |w| {
        w.element("VOUCHER", &attributes, |w| {
            w.leaf("DATE", &voucher.date)?;
            w.leaf("EFFECTIVEDATE", &voucher.date)?;
            w.leaf("VOUCHERTYPENAME", &voucher.voucher_type)?;
            w.leaf("PERSISTEDVIEW", ACCOUNTING_VOUCHER_VIEW)?;
            w.leaf("NARRATION", &narration)?;
            w.leaf("PARTYLEDGERNAME", &voucher.from_ledger)?;
            ledger_entry(w, &source, true)?;
            ledger_entry(w, &destination, false)
        })?;
        Ok(())
    })
}

fn ledger_entry(w: &mut XmlWriter, entry: &LedgerEntry, deemed_positive: bool) -> Result<()> {
    w.element("ALLLEDGERENTRIES.LIST", &[], |w| {
        w.leaf("LEDGERNAME", &entry.ledger_name)?;
        w.leaf("ISDEEMEDPOSITIVE", yes_no(deemed_positive))?;
        w.leaf("AMOUNT", &format_amount(entry.amount))?;
        Ok(())
    })?;
    Ok(())
}

/// Delete envelope addressing one voucher by remote id. The entity carries
/// no body.
pub fn delete_voucher(company: &str, remote_id: &RemoteId, voucher_type: &str) -> Result<String> {
    let company = require("company_name", company)?;
    let remote_id = require("remote_id", remote_id.as_str())?;
    let voucher_type = require("voucher_type", voucher_type)?;

    let attributes = [
        ("REMOTEID", remote_id),
        ("VCHTYPE", voucher_type),
        ("ACTION", WriteAction::Delete.as_str()),
        ("OBJVIEW", ACCOUNTING_VOUCHER_VIEW),
    ];

    envelope::import(ImportReport::Vouchers, company, |w| {
        w.element("VOUCHER", &attributes, |_| Ok(()))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use ledgerlink_domain::LedgerLinkError;
    use rust_decimal::Decimal;

    use super::*;
    use crate::xml::XmlNode;

    fn rent() -> VoucherDescriptor {
        VoucherDescriptor {
            remote_id: None,
            company_name: "RYUKS".into(),
            voucher_type: "Payment".into(),
            voucher_number: None,
            date: "20250401".into(),
            from_ledger: "Cash".into(),
            to_ledger: "Rent".into(),
            amount: Decimal::new(70000, 0),
            narration: None,
        }
    }

    #[test]
    fn create_emits_balanced_entries_under_derived_id() {
        let xml = create_voucher(&rent()).unwrap();
        let root = XmlNode::parse(&xml).unwrap();

        assert_eq!(root.descendants("TALLYMESSAGE").len(), 1);
        let voucher = root.find("VOUCHER").unwrap();
        assert_eq!(voucher.attr("ACTION"), Some("Create"));
        assert_eq!(voucher.attr("REMOTEID"), Some("Cash_Rent_70000.00_Payment_20250401"));
        assert_eq!(voucher.child_text("NARRATION"), Some("Transfer from Cash to Rent"));

        let entries = voucher.descendants("ALLLEDGERENTRIES.LIST");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].child_text("LEDGERNAME"), Some("Cash"));
        assert_eq!(entries[0].child_text("ISDEEMEDPOSITIVE"), Some("Yes"));
        assert_eq!(entries[0].child_text("AMOUNT"), Some("-70000.00"));
        assert_eq!(entries[1].child_text("ISDEEMEDPOSITIVE"), Some("No"));
        assert_eq!(entries[1].child_text("AMOUNT"), Some("70000.00"));
    }

    #[test]
    fn create_keeps_a_carried_remote_id() {
        let mut voucher = rent();
        voucher.remote_id = Some(RemoteId::new("rent-april"));

        let xml = create_voucher(&voucher).unwrap();
        let root = XmlNode::parse(&xml).unwrap();
        assert_eq!(root.find("VOUCHER").and_then(|v| v.attr("REMOTEID")), Some("rent-april"));
    }

    #[test]
    fn delete_has_no_body() {
        let xml = delete_voucher("RYUKS", &RemoteId::new("rent-april"), "Payment").unwrap();
        let root = XmlNode::parse(&xml).unwrap();

        let voucher = root.find("VOUCHER").unwrap();
        assert_eq!(voucher.attr("ACTION"), Some("Delete"));
        assert_eq!(voucher.attr("VCHTYPE"), Some("Payment"));
        assert!(voucher.children.is_empty());
        assert_eq!(root.descendants("TALLYMESSAGE").len(), 1);
    }

    #[test]
    fn delete_requires_remote_id() {
        assert_eq!(
            delete_voucher("RYUKS", &RemoteId::new(" "), "Payment").unwrap_err(),
            LedgerLinkError::missing_field("remote_id")
        );
    }
}
