//! Liveness routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    /// Configured ledger server; requests may still override it.
    pub ledger_server: String,
    pub url_override_allowed: bool,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "LedgerLink API is running" }))
}

/// Liveness only; the ledger server is not contacted.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ledger_server: ctx.ledger_server_url().to_string(),
        url_override_allowed: ctx.config.ledger_server.allow_url_override,
    })
}
