//! # Serve Subcommand
//!
//! Runs the HTTP API. Flags override the environment configuration.

use anyhow::{Context, Result};
use clap::Args;
use packer_api::state::AppConfig;
use packer_optimizer::Strategy;

/// Arguments for the `packer serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listening port.
    #[arg(long, env = "CUSTOM_PORT")]
    pub port: Option<u16>,

    /// Packing strategy.
    #[arg(long, env = "PACKER_STRATEGY")]
    pub strategy: Option<Strategy>,
}

impl ServeArgs {
    /// Layer the flags over an environment-derived configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        config
    }
}

/// Execute the serve subcommand. Blocks until the server shuts down.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = args.apply(AppConfig::from_env().context("invalid configuration")?);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(packer_api::serve(config))?;
    Ok(0)
}
