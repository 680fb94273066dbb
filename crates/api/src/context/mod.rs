//! Application context - ledger server wiring shared by every request

use std::sync::Arc;

use ledgerlink_core::ReconciliationService;
use ledgerlink_domain::{Config, LedgerLinkError, Result};
use ledgerlink_infra::{ClientConfig, TallyClient, TallyService, TallyVoucherGateway};
use tracing::debug;

/// Immutable after startup; handlers share it through an `Arc`.
pub struct AppContext {
    pub config: Config,
    client: TallyClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = TallyClient::new(ClientConfig::from(&config.ledger_server))?;
        Ok(Self { config, client })
    }

    pub fn shared(config: Config) -> Result<Arc<Self>> {
        Self::new(config).map(Arc::new)
    }

    /// URL of the configured ledger server.
    pub fn ledger_server_url(&self) -> &str {
        self.client.url()
    }

    /// Client for one request.
    ///
    /// A non-blank `tally_url` selects another ledger server with the
    /// configured timeout, unless overrides are disabled.
    pub fn client(&self, tally_url: Option<&str>) -> Result<TallyClient> {
        let Some(url) = tally_url.map(str::trim).filter(|url| !url.is_empty()) else {
            return Ok(self.client.clone());
        };
        if url == self.client.url() {
            return Ok(self.client.clone());
        }
        if !self.config.ledger_server.allow_url_override {
            return Err(LedgerLinkError::InvalidInput(
                "tally_url overrides are disabled on this server".into(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(LedgerLinkError::InvalidInput(format!(
                "tally_url must be an http(s) URL, got '{url}'"
            )));
        }

        debug!(url, "using per-request ledger server");
        TallyClient::new(self.client.config().with_url(url))
    }

    pub fn service(&self, tally_url: Option<&str>) -> Result<TallyService> {
        self.client(tally_url).map(TallyService::new)
    }

    pub fn reconciler(&self, tally_url: Option<&str>) -> Result<ReconciliationService> {
        let gateway = TallyVoucherGateway::new(self.client(tally_url)?);
        Ok(ReconciliationService::new(Arc::new(gateway)))
    }
}
