//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration defaults
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_LEDGER_SERVER_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Wire protocol
pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const ACCOUNTING_VOUCHER_VIEW: &str = "Accounting Voucher View";
pub const INVENTORY_VOUCHER_VIEW: &str = "Inventory Voucher View";

// Defaults applied by the write builders
pub const DEFAULT_GROUP_NATURE: &str = "Assets";
pub const DEFAULT_GODOWN: &str = "Main Location";
pub const SALES_VOUCHER_TYPE: &str = "Sales";
pub const STOCK_JOURNAL_VOUCHER_TYPE: &str = "Stock Journal";

// Validation
pub const DATE_FORMAT: &str = "%Y%m%d";
pub const PINCODE_LENGTH: usize = 6;
pub const MIN_PHONE_DIGITS: usize = 7;
