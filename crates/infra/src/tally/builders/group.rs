use ledgerlink_domain::{GroupInput, Result, WriteAction};

use crate::tally::envelope::{self, ImportReport};

pub fn create_group(input: &GroupInput) -> Result<String> {
    input.validate_create()?;
    let name = input.group_name.trim();
    let parent = input.parent_group.as_deref().map(str::trim).unwrap_or_default();

    envelope::import(ImportReport::AllMasters, input.company_name.trim(), |w| {
        w.element("GROUP", &[("NAME", name), ("ACTION", WriteAction::Create.as_str())], |w| {
            w.leaf("NAME", name)?;
            w.leaf("PARENT", parent)?;
            w.leaf("NATUREOFGROUP", input.nature_or_default())?;
            Ok(())
        })?;
        Ok(())
    })
}

pub fn delete_group(input: &GroupInput) -> Result<String> {
    input.validate_delete()?;
    let name = input.group_name.trim();

    envelope::import(ImportReport::AllMasters, input.company_name.trim(), |w| {
        w.element("GROUP", &[("NAME", name), ("ACTION", WriteAction::Delete.as_str())], |w| {
            w.leaf("NAME", name)?;
            Ok(())
        })?;
        Ok(())
    })
}
