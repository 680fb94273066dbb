//! Lenient numeric input.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{LedgerLinkError, Result};

/// Numeric value as supplied by a caller, kept verbatim until validated.
///
/// Accepts JSON numbers (`70000`, `12.5`) and strings (`"70000.00"`), so a
/// malformed amount turns into a field-specific validation error from
/// [`NumericText::parse`] instead of a body rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NumericRepr", into = "String")]
pub struct NumericText(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericRepr {
    Number(serde_json::Number),
    Text(String),
}

impl From<NumericRepr> for NumericText {
    fn from(value: NumericRepr) -> Self {
        match value {
            NumericRepr::Number(number) => Self(number.to_string()),
            NumericRepr::Text(text) => Self(text),
        }
    }
}

impl From<NumericText> for String {
    fn from(value: NumericText) -> Self {
        value.0
    }
}

impl From<&str> for NumericText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Decimal> for NumericText {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl NumericText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse into a decimal, naming `field` in the error.
    pub fn parse(&self, field: &str) -> Result<Decimal> {
        let raw = self.0.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| LedgerLinkError::InvalidInput(format!("Field '{field}' must be numeric")))
    }
}

impl fmt::Display for NumericText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render an amount the way the ledger server expects it: two decimals.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}
