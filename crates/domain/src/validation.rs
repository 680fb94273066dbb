//! Field validation shared by every input type.
//!
//! Each helper returns `LedgerLinkError::InvalidInput` with a message naming
//! the offending field, so the request surface can hand it back verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::constants::{MIN_PHONE_DIGITS, PINCODE_LENGTH};
use crate::types::NumericText;
use crate::{LedgerLinkError, Result};

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{8}$").expect("DATE_PATTERN should compile - this is a bug"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_PATTERN should compile - this is a bug")
});

/// Require a non-blank string field.
pub fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerLinkError::missing_field(field));
    }
    Ok(trimmed)
}

/// Require an optional field to be present and non-blank.
pub fn require_some<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    require(field, value.unwrap_or_default())
}

/// Voucher dates travel as 8-digit `YYYYMMDD` strings.
pub fn validate_date(date: &str) -> Result<()> {
    if DATE_PATTERN.is_match(date) {
        Ok(())
    } else {
        Err(LedgerLinkError::InvalidInput(format!("Date {date} must be in YYYYMMDD format")))
    }
}

/// Parse a required numeric field.
pub fn require_numeric(field: &str, value: Option<&NumericText>) -> Result<Decimal> {
    match value {
        Some(text) if !text.is_blank() => text.parse(field),
        _ => Err(LedgerLinkError::missing_field(field)),
    }
}

/// Parse a numeric field that must not be negative.
pub fn require_non_negative(field: &str, value: Option<&NumericText>) -> Result<Decimal> {
    let amount = require_numeric(field, value)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerLinkError::InvalidInput(format!("Field '{field}' must not be negative")));
    }
    Ok(amount)
}

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(LedgerLinkError::InvalidInput("Invalid email format".into()))
    }
}

pub fn validate_pincode(pincode: &str) -> Result<()> {
    if pincode.len() == PINCODE_LENGTH && pincode.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LedgerLinkError::InvalidInput(format!(
            "Pincode must be a {PINCODE_LENGTH}-digit number"
        )))
    }
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if phone.len() >= MIN_PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LedgerLinkError::InvalidInput(format!(
            "Phone number must be numeric and at least {MIN_PHONE_DIGITS} digits long"
        )))
    }
}

/// Normalise a name for use inside a derived remote identifier.
///
/// Whitespace and hyphen runs become `_` and a `_` is inserted at each
/// lower-to-upper camel-case boundary (`"Main Store-A"` → `"Main_Store_A"`).
pub fn snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_separator = false;
    let mut previous: Option<char> = None;

    for ch in value.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
            previous = None;
            continue;
        }
        in_separator = false;
        if let Some(prev) = previous {
            if (prev.is_lowercase() || prev.is_ascii_digit()) && ch.is_uppercase() {
                out.push('_');
            }
        }
        out.push(ch);
        previous = Some(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_values() {
        assert_eq!(require("ledger_name", "  Cash "), Ok("Cash"));
        let err = require("ledger_name", "   ").unwrap_err();
        assert!(err.to_string().contains("ledger_name"));
    }

    #[test]
    fn date_must_be_eight_digits() {
        assert!(validate_date("20250401").is_ok());
        assert!(validate_date("2025-04-01").is_err());
        assert!(validate_date("2025041").is_err());
        assert!(validate_date("202504011").is_err());
    }

    #[test]
    fn numeric_fields_report_their_name() {
        let bad = NumericText::from("seventy");
        let err = require_numeric("amount", Some(&bad)).unwrap_err();
        assert!(err.to_string().contains("amount"));

        let err = require_numeric("amount", None).unwrap_err();
        assert_eq!(err, LedgerLinkError::missing_field("amount"));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let negative = NumericText::from("-10");
        assert!(require_non_negative("amount", Some(&negative)).is_err());
        let zero = NumericText::from("0");
        assert!(require_non_negative("amount", Some(&zero)).is_ok());
    }

    #[test]
    fn contact_fields_follow_their_patterns() {
        assert!(validate_email("books@example.com").is_ok());
        assert!(validate_email("books@example").is_err());
        assert!(validate_pincode("560001").is_ok());
        assert!(validate_pincode("56001").is_err());
        assert!(validate_pincode("56000A").is_err());
        assert!(validate_phone("9876543").is_ok());
        assert!(validate_phone("98765").is_err());
        assert!(validate_phone("98765-43210").is_err());
    }

    #[test]
    fn snake_case_normalises_separators_and_camel_case() {
        assert_eq!(snake_case("Main Store-A"), "Main_Store_A");
        assert_eq!(snake_case("ItemOne  Blue"), "Item_One_Blue");
        assert_eq!(snake_case("AKASH LTD"), "AKASH_LTD");
    }
}
