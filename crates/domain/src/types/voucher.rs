//! Voucher identity, shapes and lookup criteria.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::numeric::{format_amount, NumericText};
use crate::validation::{require, require_non_negative, require_some, validate_date};
use crate::{LedgerLinkError, Result};

/// Opaque key addressing one voucher on the ledger server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteId(String);

impl RemoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key derived from the five fields that identify a simple voucher.
    ///
    /// The amount is rendered unsigned with two decimals, so `70000` and
    /// `-70000.00` derive the same key. Two vouchers sharing all five fields
    /// collide.
    pub fn derive(
        from_ledger: &str,
        to_ledger: &str,
        amount: Decimal,
        voucher_type: &str,
        date: &str,
    ) -> Self {
        Self(format!(
            "{from_ledger}_{to_ledger}_{}_{voucher_type}_{date}",
            format_amount(amount.abs())
        ))
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ledger line of a voucher. Negative amounts are the source side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub ledger_name: String,
    pub amount: Decimal,
}

impl LedgerEntry {
    pub fn new(ledger_name: impl Into<String>, amount: Decimal) -> Self {
        Self { ledger_name: ledger_name.into(), amount }
    }
}

/// A voucher as exported by the ledger server, entries in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVoucher {
    pub remote_id: Option<RemoteId>,
    pub voucher_type: String,
    pub voucher_number: Option<String>,
    pub date: String,
    pub narration: Option<String>,
    pub entries: Vec<LedgerEntry>,
}

impl RemoteVoucher {
    /// Human-readable handle for log lines and error messages.
    pub fn label(&self) -> String {
        match (&self.remote_id, &self.voucher_number) {
            (Some(id), _) => id.to_string(),
            (None, Some(number)) => format!("{} #{number} on {}", self.voucher_type, self.date),
            (None, None) => format!("{} on {}", self.voucher_type, self.date),
        }
    }
}

/// A fully resolved simple voucher: one source ledger, one destination
/// ledger and an unsigned amount moving between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDescriptor {
    pub remote_id: Option<RemoteId>,
    pub company_name: String,
    pub voucher_type: String,
    pub voucher_number: Option<String>,
    pub date: String,
    pub from_ledger: String,
    pub to_ledger: String,
    pub amount: Decimal,
    pub narration: Option<String>,
}

impl VoucherDescriptor {
    pub fn derived_remote_id(&self) -> RemoteId {
        RemoteId::derive(
            &self.from_ledger,
            &self.to_ledger,
            self.amount,
            &self.voucher_type,
            &self.date,
        )
    }

    /// The carried remote id, falling back to the derived one.
    pub fn remote_id_or_derived(&self) -> RemoteId {
        self.remote_id.clone().unwrap_or_else(|| self.derived_remote_id())
    }

    /// The two balancing entries: source `-amount`, destination `+amount`.
    pub fn ledger_entries(&self) -> [LedgerEntry; 2] {
        let amount = self.amount.abs();
        [
            LedgerEntry::new(self.from_ledger.clone(), -amount),
            LedgerEntry::new(self.to_ledger.clone(), amount),
        ]
    }

    pub fn narration_or_default(&self) -> String {
        match self.narration.as_deref() {
            Some(narration) if !narration.trim().is_empty() => narration.to_string(),
            _ => self.default_narration(),
        }
    }

    /// The narration, unless it is blank or the generated default.
    fn custom_narration(&self) -> Option<String> {
        let narration = self.narration.as_deref().map(str::trim).filter(|n| !n.is_empty())?;
        (narration != self.default_narration()).then(|| narration.to_string())
    }

    fn default_narration(&self) -> String {
        format!("Transfer from {} to {}", self.from_ledger, self.to_ledger)
    }

    pub fn validate(&self) -> Result<()> {
        require("company_name", &self.company_name)?;
        require("from_ledger", &self.from_ledger)?;
        require("to_ledger", &self.to_ledger)?;
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(LedgerLinkError::InvalidInput("Field 'amount' must not be negative".into()));
        }
        require("voucher_type", &self.voucher_type)?;
        require("date", &self.date)?;
        validate_date(&self.date)
    }

    /// True when both descriptors agree on the five identifying fields.
    pub fn same_key(&self, other: &Self) -> bool {
        self.from_ledger == other.from_ledger
            && self.to_ledger == other.to_ledger
            && self.voucher_type == other.voucher_type
            && self.date == other.date
            && self.amount.abs().round_dp(2) == other.amount.abs().round_dp(2)
    }
}

/// Partial voucher description.
///
/// Used twice by reconciliation: as lookup criteria, where every present
/// field constrains the match and absent fields are wildcards, and as the
/// patch overlaid on the resolved record to produce its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherCriteria {
    pub company_name: Option<String>,
    pub voucher_type: Option<String>,
    pub voucher_number: Option<String>,
    pub date: Option<String>,
    pub from_ledger: Option<String>,
    pub to_ledger: Option<String>,
    pub amount: Option<NumericText>,
    pub narration: Option<String>,
}

impl VoucherCriteria {
    /// Company the lookup is scoped to. Required for any resolution.
    pub fn company(&self) -> Result<&str> {
        require_some("company_name", self.company_name.as_deref())
    }

    pub fn amount(&self) -> Result<Option<Decimal>> {
        self.amount.as_ref().map(|text| text.parse("amount")).transpose()
    }

    /// Check the present fields without touching the ledger server.
    pub fn validate_lookup(&self) -> Result<()> {
        self.company()?;
        self.amount()?;
        if let Some(date) = self.date.as_deref() {
            validate_date(date)?;
        }
        Ok(())
    }

    /// Overlay this patch on `base`, yielding the replacement voucher.
    ///
    /// Present fields win. When the patch has no narration, a narration
    /// written for `base` is carried over, but the generated
    /// "Transfer from .. to .." text is dropped so it is rebuilt from the
    /// replacement's ledgers. The result has no remote id of its own and is
    /// validated before it is returned.
    pub fn apply_to(&self, base: &VoucherDescriptor) -> Result<VoucherDescriptor> {
        fn pick(patch: Option<&String>, current: &str) -> String {
            patch.cloned().unwrap_or_else(|| current.to_string())
        }

        let descriptor = VoucherDescriptor {
            remote_id: None,
            company_name: pick(self.company_name.as_ref(), &base.company_name),
            voucher_type: pick(self.voucher_type.as_ref(), &base.voucher_type),
            voucher_number: self.voucher_number.clone().or_else(|| base.voucher_number.clone()),
            date: pick(self.date.as_ref(), &base.date),
            from_ledger: pick(self.from_ledger.as_ref(), &base.from_ledger),
            to_ledger: pick(self.to_ledger.as_ref(), &base.to_ledger),
            amount: self.amount()?.unwrap_or(base.amount),
            narration: self.narration.clone().or_else(|| base.custom_narration()),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

/// Caller input for a plain voucher create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherDraft {
    pub company_name: String,
    pub from_ledger: String,
    pub to_ledger: String,
    pub amount: Option<NumericText>,
    pub voucher_type: String,
    pub date: String,
    pub narration: Option<String>,
    /// Caller-supplied remote id; derived from the key fields when absent.
    pub voucher_guid: Option<String>,
}

impl VoucherDraft {
    /// Validate the draft and turn it into a descriptor.
    pub fn to_descriptor(&self) -> Result<VoucherDescriptor> {
        let company_name = require("company_name", &self.company_name)?;
        let from_ledger = require("from_ledger", &self.from_ledger)?;
        let to_ledger = require("to_ledger", &self.to_ledger)?;
        let amount = require_non_negative("amount", self.amount.as_ref())?;
        let voucher_type = require("voucher_type", &self.voucher_type)?;
        let date = require("date", &self.date)?;
        validate_date(date)?;

        let remote_id = self
            .voucher_guid
            .as_deref()
            .map(str::trim)
            .filter(|guid| !guid.is_empty())
            .map(RemoteId::new);

        Ok(VoucherDescriptor {
            remote_id,
            company_name: company_name.to_string(),
            voucher_type: voucher_type.to_string(),
            voucher_number: None,
            date: date.to_string(),
            from_ledger: from_ledger.to_string(),
            to_ledger: to_ledger.to_string(),
            amount,
            narration: self.narration.clone().filter(|narration| !narration.trim().is_empty()),
        })
    }
}
