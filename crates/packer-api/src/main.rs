//! # packer-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Listens on `CUSTOM_PORT` (default 8282).

use anyhow::Context;
use packer_api::state::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("PACKER_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    packer_api::serve(config).await.map_err(|e| {
        tracing::error!("server failed: {e:#}");
        e
    })
}
