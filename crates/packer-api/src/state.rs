//! # Application State & Configuration
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. The pack size registry is the only data
//! that lives across requests; everything else is computed per request.
//!
//! ## Environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CUSTOM_PORT` | `8282` | Listening port |
//! | `PACKER_STRATEGY` | `best-fit` | `best-fit` or `first-fit` |
//! | `PACKER_DEFAULT_SIZES` | unset | Comma-separated sizes seeded at startup |
//! | `PACKER_METRICS_ENABLED` | `true` | Anything but `false` enables `/metrics` |

use std::sync::Arc;

use packer_optimizer::{Strategy, UnknownStrategy};
use packer_registry::{PackRegistry, PackStore, RegistryError};
use thiserror::Error;

use crate::service::OrderService;

/// Port used when `CUSTOM_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8282;

/// Startup configuration failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `CUSTOM_PORT` is not a valid port number.
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    /// `PACKER_STRATEGY` names no known strategy.
    #[error(transparent)]
    InvalidStrategy(#[from] UnknownStrategy),

    /// `PACKER_DEFAULT_SIZES` contains a non-integer entry.
    #[error("invalid default pack size {0:?}")]
    InvalidSizeList(String),

    /// The seed sizes were rejected by the registry.
    #[error("default pack sizes rejected: {0}")]
    Seed(#[from] RegistryError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub strategy: Strategy,
    pub default_sizes: Vec<i64>,
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            strategy: Strategy::default(),
            default_sizes: Vec::new(),
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CUSTOM_PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        if let Some(raw) = lookup("PACKER_STRATEGY") {
            config.strategy = raw.parse()?;
        }

        if let Some(raw) = lookup("PACKER_DEFAULT_SIZES") {
            config.default_sizes = parse_size_list(&raw)?;
        }

        if let Some(raw) = lookup("PACKER_METRICS_ENABLED") {
            config.metrics_enabled = raw.trim().to_lowercase() != "false";
        }

        Ok(config)
    }
}

/// Parse `"250, 500,1000"` into integers. Blank entries are skipped.
pub fn parse_size_list(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| ConfigError::InvalidSizeList(s.to_string()))
        })
        .collect()
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn PackStore>,
    pub orders: OrderService,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Default configuration over an empty in-memory registry.
    pub fn new() -> Self {
        Self::with_store(AppConfig::default(), Arc::new(PackRegistry::new()))
    }

    /// Wire state around an existing store.
    pub fn with_store(config: AppConfig, store: Arc<dyn PackStore>) -> Self {
        let orders = OrderService::new(Arc::clone(&store), config.strategy);
        Self {
            config,
            store,
            orders,
        }
    }

    /// Build state from configuration, seeding the registry with the
    /// configured default sizes.
    pub fn bootstrap(config: AppConfig) -> Result<Self, ConfigError> {
        let registry = PackRegistry::with_sizes(&config.default_sizes)?;
        if !registry.is_empty() {
            tracing::info!(sizes = ?config.default_sizes, "seeded pack sizes");
        }
        Ok(Self::with_store(config, Arc::new(registry)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8282);
        assert_eq!(config.strategy, Strategy::BestFit);
        assert!(config.metrics_enabled);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CUSTOM_PORT", "9000"),
            ("PACKER_STRATEGY", "first-fit"),
            ("PACKER_DEFAULT_SIZES", "250, 500,,1000"),
            ("PACKER_METRICS_ENABLED", "FALSE"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.strategy, Strategy::FirstFit);
        assert_eq!(config.default_sizes, vec![250, 500, 1000]);
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("CUSTOM_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
        assert!(AppConfig::from_lookup(lookup(&[("CUSTOM_PORT", "70000")])).is_err());
    }

    #[test]
    fn rejects_bad_strategy() {
        let err = AppConfig::from_lookup(lookup(&[("PACKER_STRATEGY", "random")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStrategy(_)));
    }

    #[test]
    fn rejects_bad_size_list() {
        let err =
            AppConfig::from_lookup(lookup(&[("PACKER_DEFAULT_SIZES", "250,abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSizeList(s) if s == "abc"));
    }

    #[test]
    fn bootstrap_seeds_registry() {
        let config = AppConfig {
            default_sizes: vec![250, 500, 250],
            ..AppConfig::default()
        };
        let state = AppState::bootstrap(config).unwrap();
        assert_eq!(state.store.list_sizes().len(), 2);
    }

    #[test]
    fn bootstrap_rejects_non_positive_seed() {
        let config = AppConfig {
            default_sizes: vec![250, 0],
            ..AppConfig::default()
        };
        assert!(matches!(
            AppState::bootstrap(config),
            Err(ConfigError::Seed(_))
        ));
    }

    #[test]
    fn orders_share_the_store() {
        let state = AppState::new();
        state.store.add_sizes(&[250]).unwrap();
        assert!(state.orders.compute_order(1).is_ok());
    }
}
