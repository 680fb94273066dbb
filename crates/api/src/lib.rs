//! # LedgerLink API
//!
//! HTTP request surface - JSON routes and the `ledgerlink` binary.
//!
//! This crate contains:
//! - axum routes (JSON in, JSON out)
//! - Application context (ledger server client wiring)
//! - Mapping of domain errors to HTTP responses
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the reconciliation engine to the ledger server gateway
//! - Holds no state between requests

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
