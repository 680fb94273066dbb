//! Item-line vouchers (purchase and sales).
//!
//! Each stock line carries its own pair of accounting allocations: the
//! counter ledger (purchase or sales) and the party ledger, signed by the
//! direction the goods move.

use ledgerlink_domain::constants::INVENTORY_VOUCHER_VIEW;
use ledgerlink_domain::{
    format_amount, InventoryVoucher, PricedLine, Result, StockDirection, WriteAction,
};
use rust_decimal::Decimal;

use super::yes_no;
use crate::tally::envelope::{self, ImportReport};
use crate::xml::XmlWriter;

pub fn inventory_voucher(voucher: &InventoryVoucher) -> Result<String> {
    let attributes = [
        ("REMOTEID", voucher.remote_id.as_str()),
        ("VCHTYPE", voucher.voucher_type.as_str()),
        ("ACTION", WriteAction::Create.as_str()),
        ("OBJVIEW", INVENTORY_VOUCHER_VIEW),
    ];

    envelope::import(ImportReport::Vouchers, &voucher.company_name, |w| {
        w.element("VOUCHER", &attributes, |w| {
            w.leaf("DATE", &voucher.date)?;
            w.leaf("EFFECTIVEDATE", &voucher.date)?;
            w.leaf("VOUCHERTYPENAME", &voucher.voucher_type)?;
            w.leaf("PARTYLEDGERNAME", &voucher.party_ledger)?;
            w.leaf("NARRATION", &voucher.narration)?;
            for line in &voucher.lines {
                stock_line(w, voucher, line)?;
            }
            Ok(())
        })?;
        Ok(())
    })
}

fn stock_line(w: &mut XmlWriter, voucher: &InventoryVoucher, line: &PricedLine) -> Result<()> {
    let inward = voucher.direction == StockDirection::Inward;
    let quantity = format!("{} {}", line.qty, line.unit);

    w.element("ALLINVENTORYENTRIES.LIST", &[], |w| {
        w.leaf("STOCKITEMNAME", &line.name)?;
        w.leaf("ISDEEMEDPOSITIVE", yes_no(inward))?;
        w.leaf("RATE", &format!("{} / {}", line.rate, line.unit))?;
        w.leaf("ACTUALQTY", &quantity)?;
        w.leaf("BILLEDQTY", &quantity)?;
        w.leaf("AMOUNT", &format_amount(line.amount))?;

        if inward {
            allocation(w, &voucher.counter_ledger, false, -line.amount)?;
            allocation(w, &voucher.party_ledger, true, line.amount)
        } else {
            allocation(w, &voucher.counter_ledger, true, line.amount)?;
            allocation(w, &voucher.party_ledger, false, -line.amount)
        }
    })?;
    Ok(())
}

fn allocation(
    w: &mut XmlWriter,
    ledger: &str,
    deemed_positive: bool,
    amount: Decimal,
) -> Result<()> {
    w.element("ACCOUNTINGALLOCATIONS.LIST", &[], |w| {
        w.leaf("LEDGERNAME", ledger)?;
        w.leaf("ISDEEMEDPOSITIVE", yes_no(deemed_positive))?;
        w.leaf("AMOUNT", &format_amount(amount))?;
        Ok(())
    })?;
    Ok(())
}
