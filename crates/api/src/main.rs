//! LedgerLink - REST bridge to an XML-over-HTTP ledger server
//!
//! Main entry point for the HTTP service.

use anyhow::Context;
use ledgerlink_api::{router, AppContext};
use ledgerlink_domain::Config;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LEDGERLINK_LOG_JSON").is_ok_and(|value| value == "1");

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG and LEDGERLINK_* from it are visible
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let config = match ledgerlink_infra::config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "no configuration found; using defaults");
            Config::default()
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let context = AppContext::shared(config).context("failed to build application context")?;
    info!(ledger_server = %context.ledger_server_url(), "LedgerLink starting...");

    let listener =
        TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("LedgerLink stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
