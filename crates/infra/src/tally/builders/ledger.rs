use ledgerlink_domain::{LedgerInput, Result, WriteAction};

use super::{present, yes_no};
use crate::tally::envelope::{self, ImportReport};

/// Ledger master write. Optional mailing details are emitted only when
/// present.
pub fn ledger(input: &LedgerInput, action: WriteAction) -> Result<String> {
    let opening_balance = input.validate()?;
    let name = input.ledger_name.trim();
    let addresses: Vec<&str> =
        input.address_list.iter().map(|line| line.trim()).filter(|line| !line.is_empty()).collect();

    envelope::import(ImportReport::AllMasters, input.company_name.trim(), |w| {
        w.element("LEDGER", &[("NAME", name), ("ACTION", action.as_str())], |w| {
            w.leaf("NAME", name)?;
            w.leaf("PARENT", input.group_name.trim())?;
            w.leaf("ISBILLWISEON", yes_no(false))?;
            w.leaf("AFFECTSSTOCK", yes_no(false))?;
            w.leaf("ISDEEMEDPOSITIVE", yes_no(false))?;

            if let Some(mailing_name) = present(input.mailing_name.as_deref()) {
                w.element("MAILINGNAME.LIST", &[], |w| {
                    w.leaf("MAILINGNAME", mailing_name)?;
                    Ok(())
                })?;
            }
            if !addresses.is_empty() {
                w.element("ADDRESS.LIST", &[("TYPE", "String")], |w| {
                    for line in &addresses {
                        w.leaf("ADDRESS", line)?;
                    }
                    Ok(())
                })?;
            }
            w.leaf_opt("PINCODE", input.pincode.as_deref())?;
            w.leaf_opt("STATENAME", input.state.as_deref())?;
            w.leaf_opt("COUNTRYNAME", input.country.as_deref())?;
            w.leaf_opt("EMAIL", input.email.as_deref())?;
            w.leaf_opt("PHONENUMBER", input.phone.as_deref())?;
            if let Some(balance) = opening_balance {
                w.leaf("OPENINGBALANCE", &balance.to_string())?;
            }
            Ok(())
        })?;
        Ok(())
    })
}
