use ledgerlink_domain::{ImportOutcome, LedgerLinkError, Result};

use crate::xml::XmlNode;

/// Read the counters of an Import Data response from wherever the server
/// placed them. Counters it did not report stay `None`.
pub fn parse_import_response(xml: &str) -> Result<ImportOutcome> {
    let root = XmlNode::parse(xml)?;

    Ok(ImportOutcome {
        created: counter(&root, "CREATED")?,
        altered: counter(&root, "ALTERED")?,
        deleted: counter(&root, "DELETED")?,
        errors: counter(&root, "ERRORS")?,
        exceptions: counter(&root, "EXCEPTIONS")?,
        last_voucher_id: root.find_text("LASTVCHID").map(str::to_string),
        line_errors: root
            .descendants("LINEERROR")
            .into_iter()
            .map(XmlNode::text)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn counter(root: &XmlNode, name: &str) -> Result<Option<u32>> {
    root.find_text(name)
        .map(|text| {
            text.parse::<u32>().map_err(|_| {
                LedgerLinkError::Parse(format!("import counter {name} is not a count: {text}"))
            })
        })
        .transpose()
}
