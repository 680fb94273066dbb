//! Shared test helpers for `ledgerlink-core` integration tests.
//!
//! The mock gateway keeps an in-memory voucher list and records every call so
//! that saga tests can assert on the exact remote traffic.

pub mod gateway;
