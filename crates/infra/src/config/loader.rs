//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `LEDGERLINK_TALLY_URL` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LEDGERLINK_TALLY_URL`: Ledger server endpoint (required)
//! - `LEDGERLINK_TALLY_TIMEOUT_SECS`: Per-call timeout in seconds
//! - `LEDGERLINK_ALLOW_URL_OVERRIDE`: Whether requests may carry `tally_url`
//! - `LEDGERLINK_HOST`: Listener host
//! - `LEDGERLINK_PORT`: Listener port
//!
//! ## File Locations
//! The loader probes `ledgerlink.{json,toml}` and `config.{json,toml}` in
//! the current working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};

use ledgerlink_domain::constants::DEFAULT_TIMEOUT_SECS;
use ledgerlink_domain::{Config, LedgerLinkError, LedgerServerConfig, Result, ServerConfig};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["ledgerlink.json", "ledgerlink.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LedgerLinkError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - An environment value cannot be parsed
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `LEDGERLINK_TALLY_URL` is required; every other value falls back to
/// its default.
///
/// # Errors
/// Returns `LedgerLinkError::Config` if the URL is missing or a numeric
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let url = env_var("LEDGERLINK_TALLY_URL")?;
    let timeout_secs = env_parsed("LEDGERLINK_TALLY_TIMEOUT_SECS", "timeout")?
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let allow_url_override = env_bool("LEDGERLINK_ALLOW_URL_OVERRIDE", true);

    let defaults = ServerConfig::default();
    let host = std::env::var("LEDGERLINK_HOST").unwrap_or(defaults.host);
    let port = env_parsed("LEDGERLINK_PORT", "port")?.unwrap_or(defaults.port);

    Ok(Config {
        server: ServerConfig { host, port },
        ledger_server: LedgerServerConfig { url, timeout_secs, allow_url_override },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes [`probe_config_paths`]. The format is
/// detected by file extension.
///
/// # Errors
/// Returns `LedgerLinkError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LedgerLinkError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LedgerLinkError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LedgerLinkError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by extension of `path`.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LedgerLinkError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LedgerLinkError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LedgerLinkError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LedgerLinkError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric environment variable.
fn env_parsed<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| LedgerLinkError::Config(format!("Invalid {}: {}", label, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
