//! Conversions from external infrastructure errors into domain errors.

use ledgerlink_domain::LedgerLinkError;
use quick_xml::events::attributes::AttrError;
use quick_xml::Error as XmlError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LedgerLinkError);

impl From<InfraError> for LedgerLinkError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LedgerLinkError> for InfraError {
    fn from(value: LedgerLinkError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLedgerLinkError {
    fn into_ledgerlink(self) -> LedgerLinkError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LedgerLinkError */
/* -------------------------------------------------------------------------- */

impl IntoLedgerLinkError for HttpError {
    fn into_ledgerlink(self) -> LedgerLinkError {
        if self.is_timeout() {
            return LedgerLinkError::Connection("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LedgerLinkError::Connection("HTTP connection failure".into());
        }

        if self.is_builder() {
            return LedgerLinkError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return LedgerLinkError::Remote(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        LedgerLinkError::Connection(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_ledgerlink())
    }
}

/* -------------------------------------------------------------------------- */
/* quick_xml errors → LedgerLinkError */
/* -------------------------------------------------------------------------- */

impl IntoLedgerLinkError for XmlError {
    fn into_ledgerlink(self) -> LedgerLinkError {
        match self {
            XmlError::Io(err) => LedgerLinkError::Internal(format!("XML I/O failure: {err}")),
            other => LedgerLinkError::Parse(format!("malformed XML: {other}")),
        }
    }
}

impl From<XmlError> for InfraError {
    fn from(value: XmlError) -> Self {
        InfraError(value.into_ledgerlink())
    }
}

impl From<AttrError> for InfraError {
    fn from(value: AttrError) -> Self {
        InfraError(LedgerLinkError::Parse(format!("malformed XML attribute: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
