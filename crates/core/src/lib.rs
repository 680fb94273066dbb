//! # LedgerLink Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Voucher resolution against partial criteria
//! - The update/delete reconciliation saga
//! - Port interfaces (traits) implemented by the infrastructure layer
//!
//! ## Architecture Principles
//! - Only depends on `ledgerlink-domain`
//! - No HTTP or XML code
//! - All remote access via traits
//! - Pure, testable business logic

pub mod voucher;

pub use voucher::{
    MatchResult, ReconcileFailure, ReconcileOutcome, ReconcileResult, ReconcileStage,
    ReconciliationService, TerminalState, VoucherGateway, VoucherResolver,
};
