use std::time::Duration;

use ledgerlink_domain::LedgerLinkError;
use tracing::{error, info, warn};

use crate::error::ApiError;

/// Log the outcome of one handled request with structured fields.
///
/// Client errors log at `warn`, server-side failures at `error`. A saga that
/// could not restore the original voucher is logged with the voucher it
/// lost so it can be recreated by hand.
pub fn log_request_outcome<T>(route: &str, elapsed: Duration, result: &Result<T, ApiError>) {
    let duration_ms = elapsed.as_millis() as u64;

    let err = match result {
        Ok(_) => {
            info!(route, duration_ms, "request_success");
            return;
        }
        Err(err) => err,
    };

    let error_type = error_label(err.error());
    let status = err.status().as_u16();
    let stage = err.stage().map(|stage| stage.as_str());

    if let Some(lost) = err.lost_voucher() {
        error!(
            route,
            duration_ms,
            status,
            error_type,
            severity = "critical",
            company = %lost.company_name,
            remote_id = %lost.remote_id_or_derived(),
            voucher = ?lost,
            error = %err,
            "request_failure"
        );
    } else if err.status().is_server_error() {
        error!(route, duration_ms, status, error_type, stage, error = %err, "request_failure");
    } else {
        warn!(route, duration_ms, status, error_type, stage, error = %err, "request_failure");
    }
}

/// Convert a `LedgerLinkError` into a stable label suitable for logging and
/// response bodies.
#[inline]
pub fn error_label(error: &LedgerLinkError) -> &'static str {
    match error {
        LedgerLinkError::InvalidInput(_) => "invalid_input",
        LedgerLinkError::Connection(_) => "connection",
        LedgerLinkError::Remote(_) => "remote",
        LedgerLinkError::Rejected(_) => "rejected",
        LedgerLinkError::NotFound(_) => "not_found",
        LedgerLinkError::AmbiguousMatch(_) => "ambiguous_match",
        LedgerLinkError::MalformedVoucher(_) => "malformed_voucher",
        LedgerLinkError::RolledBack(_) => "rolled_back",
        LedgerLinkError::Unrecoverable(_) => "unrecoverable",
        LedgerLinkError::Parse(_) => "parse",
        LedgerLinkError::Config(_) => "config",
        LedgerLinkError::Internal(_) => "internal",
    }
}
