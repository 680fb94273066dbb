//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LEDGER_SERVER_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TIMEOUT_SECS,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub ledger_server: LedgerServerConfig,
}

/// HTTP listener configuration for the request surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote ledger server endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerServerConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether requests may name their own ledger server via `tally_url`.
    #[serde(default = "default_allow_url_override")]
    pub allow_url_override: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_allow_url_override() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_SERVER_HOST.to_string(), port: DEFAULT_SERVER_PORT }
    }
}

impl Default for LedgerServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LEDGER_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            allow_url_override: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { server: ServerConfig::default(), ledger_server: LedgerServerConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_server_section_fills_optional_fields() {
        let config: Config =
            serde_json::from_str(r#"{ "ledger_server": { "url": "http://tally:9000" } }"#).unwrap();

        assert_eq!(config.ledger_server.url, "http://tally:9000");
        assert_eq!(config.ledger_server.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.ledger_server.allow_url_override);
        assert_eq!(config.server, ServerConfig::default());
    }
}
