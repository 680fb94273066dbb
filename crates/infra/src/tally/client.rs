//! Remote protocol client for the ledger server.
//!
//! One POST per call, never retried. `send` hands back whatever the server
//! delivered; `export` and `import` require HTTP 200 and interpret the body.

use std::time::Duration;

use ledgerlink_domain::constants::XML_CONTENT_TYPE;
use ledgerlink_domain::{ImportOutcome, LedgerLinkError, LedgerServerConfig, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, warn};

use super::parsers::parse_import_response;
use crate::errors::InfraError;
use crate::http::HttpClient;

static CHAR_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#(x[0-9A-Fa-f]+|[0-9]+);").expect("CHAR_REFERENCE should compile - this is a bug")
});

/// Endpoint and timeout of one ledger server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self { url: url.into(), timeout }
    }

    /// Same timeout, different server.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self { url: url.into(), timeout: self.timeout }
    }
}

impl From<&LedgerServerConfig> for ClientConfig {
    fn from(config: &LedgerServerConfig) -> Self {
        Self::new(config.url.clone(), Duration::from_secs(config.timeout_secs))
    }
}

/// A delivered response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Clone)]
pub struct TallyClient {
    http: HttpClient,
    config: ClientConfig,
}

impl TallyClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE));

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ledgerlink/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// POST `body` once and return the delivered response.
    pub async fn send(&self, body: String) -> Result<RawResponse> {
        let request = self.http.request(Method::POST, self.config.url.as_str()).body(body);
        let response = self.http.send(request).await?;
        let status = response.status().as_u16();
        let body =
            response.text().await.map_err(|err| LedgerLinkError::from(InfraError::from(err)))?;

        debug!(url = %self.config.url, status, bytes = body.len(), "ledger server responded");
        Ok(RawResponse { status, body })
    }

    /// Send a read request; returns the body with invalid character
    /// references removed.
    pub async fn export(&self, body: String) -> Result<String> {
        let response = self.send(body).await?;
        ensure_ok(&response)?;
        Ok(strip_invalid_char_refs(&response.body))
    }

    /// Send a write request; returns the counters it reported.
    pub async fn import(&self, body: String) -> Result<ImportOutcome> {
        let response = self.send(body).await?;
        ensure_ok(&response)?;
        let outcome = parse_import_response(&strip_invalid_char_refs(&response.body))?;
        if outcome.has_errors() {
            warn!(
                url = %self.config.url,
                summary = %outcome.describe(),
                "ledger server reported import errors"
            );
        }
        Ok(outcome)
    }
}

fn ensure_ok(response: &RawResponse) -> Result<()> {
    if response.is_ok() {
        Ok(())
    } else {
        Err(LedgerLinkError::Remote(format!("ledger server answered HTTP {}", response.status)))
    }
}

/// Drop character references to code points XML 1.0 forbids, which the
/// ledger server emits in some exports.
pub fn strip_invalid_char_refs(xml: &str) -> String {
    CHAR_REFERENCE
        .replace_all(xml, |caps: &Captures<'_>| {
            let reference = &caps[1];
            let code_point = match reference.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => reference.parse::<u32>().ok(),
            };
            match code_point {
                Some(cp) if cp < 0x20 && !matches!(cp, 0x09 | 0x0A | 0x0D) => String::new(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
