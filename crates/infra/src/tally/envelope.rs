//! Request envelopes shared by every read and write.
//!
//! Writes go out as `Import Data` with exactly one `TALLYMESSAGE`; reports
//! as `Export Data`; object lists as an inline TDL collection export.

use ledgerlink_domain::Result;

use crate::xml::XmlWriter;

pub const UDF_NAMESPACE: &str = "TallyUDF";
pub const SYSNAME_XML: &str = "$$SysName:XML";

/// `REPORTNAME` of an Import Data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportReport {
    AllMasters,
    Vouchers,
}

impl ImportReport {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllMasters => "All Masters",
            Self::Vouchers => "Vouchers",
        }
    }
}

/// Build an Import Data envelope for `company`; `message` writes the single
/// entity inside `TALLYMESSAGE`.
pub fn import<F>(report: ImportReport, company: &str, message: F) -> Result<String>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let mut w = XmlWriter::new();
    w.element("ENVELOPE", &[], |w| {
        w.element("HEADER", &[], |w| {
            w.leaf("TALLYREQUEST", "Import Data")?;
            Ok(())
        })?;
        w.element("BODY", &[], |w| {
            w.element("IMPORTDATA", &[], |w| {
                w.element("REQUESTDESC", &[], |w| {
                    w.leaf("REPORTNAME", report.as_str())?;
                    w.element("STATICVARIABLES", &[], |w| {
                        w.leaf("SVCURRENTCOMPANY", company)?;
                        Ok(())
                    })?;
                    Ok(())
                })?;
                w.element("REQUESTDATA", &[], |w| {
                    w.element("TALLYMESSAGE", &[("xmlns:UDF", UDF_NAMESPACE)], message)?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    w.finish()
}

/// Build an Export Data envelope for the named report. `variables` are
/// appended to `STATICVARIABLES` after the company and export format.
pub fn export(report: &str, company: &str, variables: &[(&str, &str)]) -> Result<String> {
    let mut w = XmlWriter::new();
    w.element("ENVELOPE", &[], |w| {
        w.element("HEADER", &[], |w| {
            w.leaf("TALLYREQUEST", "Export Data")?;
            Ok(())
        })?;
        w.element("BODY", &[], |w| {
            w.element("EXPORTDATA", &[], |w| {
                w.element("REQUESTDESC", &[], |w| {
                    w.leaf("REPORTNAME", report)?;
                    w.element("STATICVARIABLES", &[], |w| {
                        w.leaf("SVCURRENTCOMPANY", company)?;
                        w.leaf("SVEXPORTFORMAT", SYSNAME_XML)?;
                        for &(name, value) in variables {
                            w.leaf(name, value)?;
                        }
                        Ok(())
                    })?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    w.finish()
}

/// Build a collection export declaring the collection inline as TDL.
pub fn collection(id: &str, company: &str, object_type: &str, fetch: &str) -> Result<String> {
    let collection_attrs = [
        ("NAME", id),
        ("ISMODIFY", "No"),
        ("ISFIXED", "No"),
        ("ISINITIALIZE", "No"),
        ("ISOPTION", "No"),
        ("ISINTERNAL", "No"),
    ];

    let mut w = XmlWriter::new();
    w.element("ENVELOPE", &[], |w| {
        w.element("HEADER", &[], |w| {
            w.leaf("VERSION", "1")?;
            w.leaf("TALLYREQUEST", "Export")?;
            w.leaf("TYPE", "Collection")?;
            w.leaf("ID", id)?;
            Ok(())
        })?;
        w.element("BODY", &[], |w| {
            w.element("DESC", &[], |w| {
                w.element("STATICVARIABLES", &[], |w| {
                    w.leaf("SVCURRENTCOMPANY", company)?;
                    w.leaf("SVEXPORTFORMAT", "XML")?;
                    Ok(())
                })?;
                w.element("TDL", &[], |w| {
                    w.element("TDLMESSAGE", &[], |w| {
                        w.element("COLLECTION", &collection_attrs, |w| {
                            w.leaf("TYPE", object_type)?;
                            w.leaf("FETCH", fetch)?;
                            Ok(())
                        })?;
                        Ok(())
                    })?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    w.finish()
}
