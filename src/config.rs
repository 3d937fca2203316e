//! Configuration for the order desk.
//!
//! [`DeskConfig`] sizes the two arenas up front and carries the default log
//! filter for the binary. Values come from code (builder methods) or from
//! the environment via [`DeskConfig::from_env`].
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `ORDER_DESK_CATALOG_CAPACITY` | product slots to pre-allocate | 1024 |
//! | `ORDER_DESK_LEDGER_CAPACITY` | order slots to pre-allocate | 1024 |
//! | `RUST_LOG` | tracing filter | `info` |

use thiserror::Error;

/// Environment variable for the catalog capacity
pub const CATALOG_CAPACITY_VAR: &str = "ORDER_DESK_CATALOG_CAPACITY";

/// Environment variable for the ledger capacity
pub const LEDGER_CAPACITY_VAR: &str = "ORDER_DESK_LEDGER_CAPACITY";

/// Environment variable for the log filter
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_CAPACITY: usize = 1024;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors while reading configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A capacity variable was set but is not a non-negative integer
    #[error("invalid value for {var}: {value:?}")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Order desk configuration
///
/// # Example
///
/// ```
/// use order_desk::config::DeskConfig;
///
/// let config = DeskConfig::new()
///     .with_catalog_capacity(10_000)
///     .with_ledger_capacity(50_000)
///     .with_log_filter("order_desk=debug");
///
/// assert_eq!(config.catalog_capacity(), 10_000);
/// assert_eq!(config.ledger_capacity(), 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Product nodes to pre-allocate
    catalog_capacity: usize,

    /// Order nodes to pre-allocate
    ledger_capacity: usize,

    /// Fallback tracing filter when `RUST_LOG` is unset
    log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DeskConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            catalog_capacity: DEFAULT_CAPACITY,
            ledger_capacity: DEFAULT_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = lookup(CATALOG_CAPACITY_VAR) {
            config.catalog_capacity = parse_capacity(CATALOG_CAPACITY_VAR, value)?;
        }
        if let Some(value) = lookup(LEDGER_CAPACITY_VAR) {
            config.ledger_capacity = parse_capacity(LEDGER_CAPACITY_VAR, value)?;
        }
        if let Some(value) = lookup(LOG_FILTER_VAR) {
            if !value.trim().is_empty() {
                config.log_filter = value;
            }
        }

        Ok(config)
    }

    /// Set the catalog capacity
    #[must_use]
    pub fn with_catalog_capacity(mut self, capacity: usize) -> Self {
        self.catalog_capacity = capacity;
        self
    }

    /// Set the ledger capacity
    #[must_use]
    pub fn with_ledger_capacity(mut self, capacity: usize) -> Self {
        self.ledger_capacity = capacity;
        self
    }

    /// Set the fallback log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Get the catalog capacity
    pub fn catalog_capacity(&self) -> usize {
        self.catalog_capacity
    }

    /// Get the ledger capacity
    pub fn ledger_capacity(&self) -> usize {
        self.ledger_capacity
    }

    /// Get the log filter
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_capacity(var: &'static str, value: String) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidCapacity { var, value })
}
