//! HTTP mapping of domain and reconciliation errors.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ledgerlink_core::{ReconcileFailure, ReconcileStage, TerminalState};
use ledgerlink_domain::{LedgerLinkError, VoucherDescriptor};
use serde::Serialize;

use crate::utils::logging::error_label;

/// Error returned by every handler.
///
/// Reconciliation failures also carry the saga stage reached and, when the
/// restore was not confirmed, the voucher that has to be recreated by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    error: LedgerLinkError,
    stage: Option<ReconcileStage>,
    state: Option<TerminalState>,
    lost_voucher: Option<VoucherDescriptor>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<ReconcileStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TerminalState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_voucher: Option<&'a VoucherDescriptor>,
}

impl ApiError {
    pub fn error(&self) -> &LedgerLinkError {
        &self.error
    }

    pub fn stage(&self) -> Option<ReconcileStage> {
        self.stage
    }

    pub fn lost_voucher(&self) -> Option<&VoucherDescriptor> {
        self.lost_voucher.as_ref()
    }

    pub fn is_critical(&self) -> bool {
        matches!(self.error, LedgerLinkError::Unrecoverable(_))
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            LedgerLinkError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LedgerLinkError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerLinkError::AmbiguousMatch(_) => StatusCode::CONFLICT,
            LedgerLinkError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LedgerLinkError::Connection(_)
            | LedgerLinkError::Remote(_)
            | LedgerLinkError::MalformedVoucher(_)
            | LedgerLinkError::Parse(_) => StatusCode::BAD_GATEWAY,
            LedgerLinkError::RolledBack(_)
            | LedgerLinkError::Unrecoverable(_)
            | LedgerLinkError::Config(_)
            | LedgerLinkError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse<'_> {
        ErrorResponse {
            error: error_label(&self.error),
            message: self.error.to_string(),
            stage: self.stage,
            state: self.state,
            severity: self.is_critical().then_some("critical"),
            lost_voucher: self.lost_voucher.as_ref(),
        }
    }
}

impl From<LedgerLinkError> for ApiError {
    fn from(error: LedgerLinkError) -> Self {
        Self { error, stage: None, state: None, lost_voucher: None }
    }
}

impl From<ReconcileFailure> for ApiError {
    fn from(failure: ReconcileFailure) -> Self {
        let stage = Some(failure.stage());
        let state = Some(failure.terminal_state());
        let lost_voucher = failure.lost_voucher().cloned();
        Self { error: failure.into(), stage, state, lost_voucher }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
