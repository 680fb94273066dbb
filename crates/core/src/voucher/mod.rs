//! Voucher resolution and reconciliation

pub mod ports;
pub mod reconcile;
pub mod resolver;

pub use ports::VoucherGateway;
pub use reconcile::{
    ReconcileFailure, ReconcileOutcome, ReconcileResult, ReconcileStage, ReconciliationService,
    TerminalState,
};
pub use resolver::{MatchResult, VoucherResolver};
