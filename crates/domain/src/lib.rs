//! # LedgerLink Domain
//!
//! Business domain types and models for LedgerLink.
//!
//! This crate contains:
//! - Voucher, master, inventory and report types
//! - Domain error types and Result definitions
//! - Field validation rules
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other LedgerLink crates
//! - No I/O
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
