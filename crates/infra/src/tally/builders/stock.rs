//! Stock item masters and stock journals.

use ledgerlink_domain::constants::STOCK_JOURNAL_VOUCHER_TYPE;
use ledgerlink_domain::{Result, StockItemInput, StockJournal, WriteAction};

use super::yes_no;
use crate::tally::envelope::{self, ImportReport};

pub fn stock_item(input: &StockItemInput) -> Result<String> {
    let opening_balance = input.validate()?;
    let name = input.item_name.trim();

    envelope::import(ImportReport::AllMasters, input.company_name.trim(), |w| {
        w.element("STOCKITEM", &[("NAME", name), ("ACTION", WriteAction::Create.as_str())], |w| {
            w.element("NAME.LIST", &[], |w| {
                w.leaf("NAME", name)?;
                Ok(())
            })?;
            w.leaf("PARENT", input.parent_group.trim())?;
            w.leaf("BASEUNITS", input.unit.trim())?;
            w.leaf("OPENINGBALANCE", &opening_balance.to_string())?;
            Ok(())
        })?;
        Ok(())
    })
}

/// Stock journal moving `qty` of one item into and out of the same godown.
pub fn stock_journal(journal: &StockJournal) -> Result<String> {
    let quantity = format!("{} {}", journal.qty, journal.unit);
    let attributes = [
        ("REMOTEID", journal.remote_id.as_str()),
        ("VCHTYPE", STOCK_JOURNAL_VOUCHER_TYPE),
        ("ACTION", WriteAction::Create.as_str()),
    ];

    envelope::import(ImportReport::Vouchers, &journal.company_name, |w| {
        w.element("VOUCHER", &attributes, |w| {
            w.leaf("DATE", &journal.date)?;
            w.leaf("VOUCHERTYPENAME", STOCK_JOURNAL_VOUCHER_TYPE)?;
            w.leaf("NARRATION", &journal.narration)?;
            w.element("INVENTORYENTRIESIN.LIST", &[], |w| {
                w.leaf("STOCKITEMNAME", &journal.item_name)?;
                w.leaf("ISDEEMEDPOSITIVE", yes_no(false))?;
                w.leaf("DESTINATIONGODOWN", &journal.godown)?;
                w.leaf("ACTUALQTY", &quantity)?;
                w.leaf("BILLEDQTY", &quantity)?;
                Ok(())
            })?;
            w.element("ALLINVENTORYENTRIES.LIST", &[], |w| {
                w.leaf("STOCKITEMNAME", &journal.item_name)?;
                w.leaf("ISDEEMEDPOSITIVE", yes_no(true))?;
                w.leaf("SOURCEDGODOWN", &journal.godown)?;
                w.leaf("ACTUALQTY", &quantity)?;
                w.leaf("BILLEDQTY", &quantity)?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })
}
