//! # LedgerLink Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP transport and the ledger server protocol client
//! - XML envelope writing and response parsing
//! - The `VoucherGateway` adapter and the master/report service
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `ledgerlink-core`
//! - Depends on `ledgerlink-domain` and `ledgerlink-core`
//! - Contains all "impure" code (network I/O, files)

pub mod config;
pub mod errors;
pub mod http;
pub mod tally;
pub mod xml;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use tally::{
    ClientConfig, RawResponse, TallyClient, TallyService, TallyVoucherGateway, WriteReceipt,
};
