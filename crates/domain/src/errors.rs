//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LedgerLink
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LedgerLinkError {
    /// Caller input failed validation before any remote call was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The ledger server could not be reached (includes timeouts).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The ledger server answered with a non-success HTTP status.
    #[error("Ledger server error: {0}")]
    Remote(String),

    /// The envelope was accepted but the embedded counters report no effect.
    #[error("Rejected by ledger server: {0}")]
    Rejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous match: {0}")]
    AmbiguousMatch(String),

    /// A voucher export did not have the two-entry shape of a simple voucher.
    #[error("Malformed voucher: {0}")]
    MalformedVoucher(String),

    /// An update failed after the old voucher was deleted; the old voucher
    /// was recreated.
    #[error("Update rolled back: {0}")]
    RolledBack(String),

    /// An update failed after the old voucher was deleted and the restore
    /// could not be confirmed. The voucher may be lost.
    #[error("Unrecoverable: {0}")]
    Unrecoverable(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerLinkError {
    /// Build the validation error for a missing required field.
    pub fn missing_field(field: &str) -> Self {
        Self::InvalidInput(format!("Missing required field: {field}"))
    }

    /// True when the error was raised after a destructive remote step.
    pub fn is_post_mutation(&self) -> bool {
        matches!(self, Self::RolledBack(_) | Self::Unrecoverable(_))
    }
}

/// Result type alias for LedgerLink operations
pub type Result<T> = std::result::Result<T, LedgerLinkError>;
