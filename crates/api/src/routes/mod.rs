//! JSON routes.
//!
//! Every POST body may carry `tally_url` next to its own fields to address a
//! ledger server other than the configured one.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

pub mod health;
pub mod inventory;
pub mod ledger;
pub mod masters;
pub mod reports;
pub mod voucher;

/// A request body plus the optional ledger server override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerRequest<T> {
    #[serde(default)]
    pub tally_url: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> ServerRequest<T> {
    pub fn tally_url(&self) -> Option<&str> {
        self.tally_url.as_deref()
    }
}

/// `{ "message", "data" }` body returned by creates and reports.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> MessageResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// `{ "status": "success", "details" }` body returned by voucher update,
/// voucher delete and ledger transactions.
#[derive(Debug, Serialize)]
pub struct StatusResponse<T> {
    pub status: &'static str,
    pub details: T,
}

impl<T> StatusResponse<T> {
    pub fn success(details: T) -> Self {
        Self { status: "success", details }
    }
}

/// Body naming only a company.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyQuery {
    pub company_name: String,
}

pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/ledger/create", post(ledger::create_ledger))
        .route("/api/voucher/create", post(voucher::create_voucher))
        .route("/api/voucher/update", post(voucher::update_voucher))
        .route("/api/voucher/delete", post(voucher::delete_voucher))
        .route("/api/voucher/transactions", post(voucher::voucher_transactions))
        .route("/api/voucher/sales/create", post(voucher::create_sales_voucher))
        .route("/api/voucher/purchase/create", post(voucher::create_purchase_voucher))
        .route("/api/create-group", post(masters::create_group))
        .route("/api/delete-group", post(masters::delete_group))
        .route("/api/inventory/item/create", post(inventory::create_stock_item))
        .route("/api/inventory/journal/create", post(inventory::create_stock_journal))
        .route("/api/inventory/items", post(inventory::stock_items))
        .route("/api/trial-balance", post(reports::trial_balance))
        .route("/api/balance-sheet", post(reports::balance_sheet))
        .with_state(context)
}
