//! Ledger server protocol: client, envelopes, builders, parsers and the
//! adapters built on them.

pub mod builders;
pub mod client;
pub mod envelope;
pub mod gateway;
pub mod parsers;
pub mod service;

pub use client::{ClientConfig, RawResponse, TallyClient};
pub use gateway::TallyVoucherGateway;
pub use service::{TallyService, WriteReceipt};
