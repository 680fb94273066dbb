//! Write verbs and the counters the ledger server reports back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Action verb carried on every written entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteAction {
    Create,
    Alter,
    Delete,
}

impl WriteAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Alter => "Alter",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters embedded in an Import Data response.
///
/// HTTP 200 only means the envelope was processed; these counters carry the
/// business outcome. A counter the server did not report stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub created: Option<u32>,
    pub altered: Option<u32>,
    pub deleted: Option<u32>,
    pub errors: Option<u32>,
    pub exceptions: Option<u32>,
    pub last_voucher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_errors: Vec<String>,
}

impl ImportOutcome {
    /// At least one entity was created. An absent counter is not a success.
    pub fn confirms_create(&self) -> bool {
        self.created.unwrap_or(0) >= 1
    }

    /// At least one entity was deleted. An absent counter is not a success.
    pub fn confirms_delete(&self) -> bool {
        self.deleted.unwrap_or(0) >= 1
    }

    /// True when the counters report some effect for `action`.
    pub fn confirms(&self, action: WriteAction) -> bool {
        match action {
            WriteAction::Create => self.confirms_create(),
            WriteAction::Alter => self.altered.unwrap_or(0) >= 1,
            WriteAction::Delete => self.confirms_delete(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.unwrap_or(0) > 0 || !self.line_errors.is_empty()
    }

    /// Short summary for error messages.
    pub fn describe(&self) -> String {
        let counter = |value: Option<u32>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
        let mut summary = format!(
            "created={} altered={} deleted={} errors={}",
            counter(self.created),
            counter(self.altered),
            counter(self.deleted),
            counter(self.errors),
        );
        if !self.line_errors.is_empty() {
            summary.push_str(": ");
            summary.push_str(&self.line_errors.join("; "));
        }
        summary
    }
}

/// Result of an inventory write followed by a closing-balance lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockWriteResult {
    pub outcome: ImportOutcome,
    pub closing_balance: Option<String>,
}
