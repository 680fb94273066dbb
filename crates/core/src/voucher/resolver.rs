//! Resolve partial criteria to exactly one remote voucher.

use std::sync::Arc;

use ledgerlink_domain::{
    LedgerLinkError, RemoteVoucher, Result, VoucherCriteria, VoucherDescriptor,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::ports::VoucherGateway;

/// Survivors of the criteria filters. Only a single survivor resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub survivors: Vec<VoucherDescriptor>,
}

impl MatchResult {
    pub fn into_unique(mut self) -> Result<VoucherDescriptor> {
        match self.survivors.len() {
            0 => Err(LedgerLinkError::NotFound("No voucher matches the given criteria".into())),
            1 => Ok(self.survivors.remove(0)),
            count => Err(LedgerLinkError::AmbiguousMatch(format!(
                "{count} vouchers match the given criteria; narrow the search"
            ))),
        }
    }
}

/// Looks up vouchers through a [`VoucherGateway`] without ever mutating.
pub struct VoucherResolver {
    gateway: Arc<dyn VoucherGateway>,
}

impl VoucherResolver {
    pub fn new(gateway: Arc<dyn VoucherGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the voucher list of `company` and return the single voucher
    /// matching `criteria`.
    pub async fn resolve(
        &self,
        company: &str,
        criteria: &VoucherCriteria,
    ) -> Result<VoucherDescriptor> {
        let amount = criteria.amount()?;
        let vouchers = self.gateway.list_vouchers(company).await?;
        debug!(company, listed = vouchers.len(), "Fetched voucher list for resolution");

        let matches = select(company, criteria, amount, &vouchers)?;
        if matches.survivors.len() > 1 {
            warn!(company, count = matches.survivors.len(), "Voucher criteria are ambiguous");
        }
        matches.into_unique()
    }
}

/// Apply `criteria` to an exported voucher list.
///
/// Header filters (type, number, date) run first. Every header survivor must
/// have the simple two-entry shape, otherwise the whole lookup fails with
/// `MalformedVoucher`. Ledger and amount filters run on the derived shape;
/// amounts compare unsigned at two decimals.
pub fn select(
    company: &str,
    criteria: &VoucherCriteria,
    amount: Option<Decimal>,
    vouchers: &[RemoteVoucher],
) -> Result<MatchResult> {
    let wanted_amount = amount.map(|value| value.abs().round_dp(2));
    let mut survivors = Vec::new();

    for voucher in vouchers.iter().filter(|voucher| header_matches(criteria, voucher)) {
        let descriptor = simple_shape(company, voucher)?;

        if criteria.from_ledger.as_ref().is_some_and(|from| *from != descriptor.from_ledger) {
            continue;
        }
        if criteria.to_ledger.as_ref().is_some_and(|to| *to != descriptor.to_ledger) {
            continue;
        }
        if wanted_amount.is_some_and(|wanted| wanted != descriptor.amount.round_dp(2)) {
            continue;
        }
        survivors.push(descriptor);
    }

    Ok(MatchResult { survivors })
}

fn header_matches(criteria: &VoucherCriteria, voucher: &RemoteVoucher) -> bool {
    let type_ok = criteria.voucher_type.as_ref().is_none_or(|t| *t == voucher.voucher_type);
    let number_ok = criteria
        .voucher_number
        .as_deref()
        .is_none_or(|number| voucher.voucher_number.as_deref() == Some(number));
    let date_ok = criteria.date.as_ref().is_none_or(|date| *date == voucher.date);
    type_ok && number_ok && date_ok
}

/// Read a two-entry voucher as source, destination and unsigned amount.
fn simple_shape(company: &str, voucher: &RemoteVoucher) -> Result<VoucherDescriptor> {
    let malformed = || {
        LedgerLinkError::MalformedVoucher(format!(
            "Voucher {} has {} ledger entries; expected one debit and one credit",
            voucher.label(),
            voucher.entries.len()
        ))
    };

    let [first, second] = voucher.entries.as_slice() else {
        return Err(malformed());
    };
    let signs = (first.amount.is_sign_negative(), second.amount.is_sign_negative());
    let (source, destination) = match signs {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => return Err(malformed()),
    };

    Ok(VoucherDescriptor {
        remote_id: voucher.remote_id.clone(),
        company_name: company.to_string(),
        voucher_type: voucher.voucher_type.clone(),
        voucher_number: voucher.voucher_number.clone(),
        date: voucher.date.clone(),
        from_ledger: source.ledger_name.clone(),
        to_ledger: destination.ledger_name.clone(),
        amount: source.amount.abs(),
        narration: voucher.narration.clone(),
    })
}
