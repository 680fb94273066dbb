//! Bulk voucher export.
//!
//! Each `VOUCHER` element is one record and its ledger-entry lists are its
//! own children, so entries can never be attributed to a neighbouring
//! voucher. Unreadable input is an error: resolution must not mistake a
//! garbled export for an empty one.

use ledgerlink_domain::{LedgerEntry, LedgerLinkError, NumericText, RemoteId, RemoteVoucher, Result};

use crate::xml::XmlNode;

const ENTRY_LISTS: [&str; 2] = ["ALLLEDGERENTRIES.LIST", "LEDGERENTRIES.LIST"];

pub fn parse_voucher_list(xml: &str) -> Result<Vec<RemoteVoucher>> {
    let root = XmlNode::parse(xml)?;
    root.descendants("VOUCHER")
        .into_iter()
        .enumerate()
        .map(|(index, node)| voucher(index, node))
        .collect()
}

fn voucher(index: usize, node: &XmlNode) -> Result<RemoteVoucher> {
    let remote_id = non_blank(node.attr("REMOTEID"))
        .or_else(|| node.child_text("REMOTEID"))
        .map(RemoteId::new);
    let label = remote_id.as_ref().map_or_else(|| format!("#{}", index + 1), ToString::to_string);

    let voucher_type = non_blank(node.attr("VCHTYPE"))
        .or_else(|| node.child_text("VOUCHERTYPENAME"))
        .ok_or_else(|| LedgerLinkError::Parse(format!("voucher {label} has no voucher type")))?;
    let date = node
        .child_text("DATE")
        .ok_or_else(|| LedgerLinkError::Parse(format!("voucher {label} has no DATE")))?;

    let entries = node
        .children
        .iter()
        .filter(|child| ENTRY_LISTS.contains(&child.name.as_str()))
        .map(|entry| ledger_entry(&label, entry))
        .collect::<Result<Vec<_>>>()?;

    Ok(RemoteVoucher {
        remote_id,
        voucher_type: voucher_type.to_string(),
        voucher_number: node.child_text("VOUCHERNUMBER").map(str::to_string),
        date: date.to_string(),
        narration: node.child_text("NARRATION").map(str::to_string),
        entries,
    })
}

fn ledger_entry(label: &str, entry: &XmlNode) -> Result<LedgerEntry> {
    let ledger = entry.child_text("LEDGERNAME").ok_or_else(|| {
        LedgerLinkError::Parse(format!("voucher {label} has an entry without LEDGERNAME"))
    })?;
    let amount = entry.child_text("AMOUNT").ok_or_else(|| {
        LedgerLinkError::Parse(format!("voucher {label} entry {ledger} has no AMOUNT"))
    })?;
    let amount = NumericText::from(amount).parse("AMOUNT").map_err(|_| {
        LedgerLinkError::Parse(format!("voucher {label} entry {ledger} has a non-numeric AMOUNT"))
    })?;
    Ok(LedgerEntry::new(ledger, amount))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    const EXPORT: &str = r#"
        <ENVELOPE>
            <BODY><DATA><COLLECTION>
                <VOUCHER REMOTEID="rent-april" VCHTYPE="Payment" OBJVIEW="Accounting Voucher View">
                    <DATE>20250401</DATE>
                    <VOUCHERTYPENAME>Payment</VOUCHERTYPENAME>
                    <VOUCHERNUMBER>7</VOUCHERNUMBER>
                    <NARRATION>April rent</NARRATION>
                    <ALLLEDGERENTRIES.LIST>
                        <LEDGERNAME>Cash</LEDGERNAME>
                        <AMOUNT>-70000.00</AMOUNT>
                    </ALLLEDGERENTRIES.LIST>
                    <ALLLEDGERENTRIES.LIST>
                        <LEDGERNAME>Rent</LEDGERNAME>
                        <AMOUNT>70000.00</AMOUNT>
                    </ALLLEDGERENTRIES.LIST>
                </VOUCHER>
                <VOUCHER>
                    <DATE>20250402</DATE>
                    <VOUCHERTYPENAME>Journal</VOUCHERTYPENAME>
                    <LEDGERENTRIES.LIST>
                        <LEDGERNAME>Bank</LEDGERNAME>
                        <AMOUNT>-10</AMOUNT>
                    </LEDGERENTRIES.LIST>
                </VOUCHER>
            </COLLECTION></DATA></BODY>
        </ENVELOPE>
    "#;

    #[test]
    fn groups_entries_per_voucher() {
        let vouchers = parse_voucher_list(EXPORT).unwrap();

        assert_eq!(vouchers.len(), 2);
        let rent = &vouchers[0];
        assert_eq!(rent.remote_id, Some(RemoteId::new("rent-april")));
        assert_eq!(rent.voucher_number.as_deref(), Some("7"));
        assert_eq!(rent.narration.as_deref(), Some("April rent"));
        assert_eq!(
            rent.entries,
            vec![
                LedgerEntry::new("Cash", Decimal::new(-7_000_000, 2)),
                LedgerEntry::new("Rent", Decimal::new(7_000_000, 2)),
            ]
        );

        let journal = &vouchers[1];
        assert_eq!(journal.remote_id, None);
        assert_eq!(journal.voucher_type, "Journal");
        assert_eq!(journal.entries.len(), 1);
    }

    #[test]
    fn empty_export_has_no_vouchers() {
        assert!(parse_voucher_list("<ENVELOPE></ENVELOPE>").unwrap().is_empty());
    }

    #[test]
    fn unreadable_export_is_an_error() {
        let truncated = parse_voucher_list("<ENVELOPE><VOUCHER>");
        assert!(matches!(truncated, Err(LedgerLinkError::Parse(_))));

        let bad_amount = r#"
            <ENVELOPE><VOUCHER VCHTYPE="Payment"><DATE>20250401</DATE>
                <ALLLEDGERENTRIES.LIST>
                    <LEDGERNAME>Cash</LEDGERNAME><AMOUNT>lots</AMOUNT>
                </ALLLEDGERENTRIES.LIST>
            </VOUCHER></ENVELOPE>
        "#;
        let err = parse_voucher_list(bad_amount).unwrap_err();
        assert!(err.to_string().contains("non-numeric AMOUNT"));
    }
}
