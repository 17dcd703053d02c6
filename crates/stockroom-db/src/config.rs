//! Store configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                      | Default          |
//! |-------------------------------|------------------|
//! | `STOCKROOM_STORE`             | `memory`         |
//! | `STOCKROOM_DATABASE_PATH`     | `./stockroom.db` |
//! | `STOCKROOM_MAX_CONNECTIONS`   | `5`              |

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pool::DbConfig;

pub const STORE_VAR: &str = "STOCKROOM_STORE";
pub const DATABASE_PATH_VAR: &str = "STOCKROOM_DATABASE_PATH";
pub const MAX_CONNECTIONS_VAR: &str = "STOCKROOM_MAX_CONNECTIONS";

const DEFAULT_DATABASE_PATH: &str = "./stockroom.db";

/// Which store variant backs the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            _ => Err(ConfigError::InvalidValue(STORE_VAR.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
            StoreKind::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Store selection plus database settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub kind: StoreKind,

    /// Only used when `kind` is [`StoreKind::Sqlite`].
    pub database: DbConfig,
}

impl StoreConfig {
    /// In-memory store.
    pub fn memory() -> Self {
        StoreConfig {
            kind: StoreKind::Memory,
            database: DbConfig::new(DEFAULT_DATABASE_PATH),
        }
    }

    /// SQLite store with the given pool settings.
    pub fn sqlite(database: DbConfig) -> Self {
        StoreConfig {
            kind: StoreKind::Sqlite,
            database,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup(STORE_VAR) {
            Some(value) => value.parse()?,
            None => StoreKind::default(),
        };

        let path = lookup(DATABASE_PATH_VAR).unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        if path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(DATABASE_PATH_VAR.to_string()));
        }

        let max_connections: u32 = lookup(MAX_CONNECTIONS_VAR)
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue(MAX_CONNECTIONS_VAR.to_string()))?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue(MAX_CONNECTIONS_VAR.to_string()));
        }

        let database = DbConfig::new(path).max_connections(max_connections);

        Ok(StoreConfig { kind, database })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::memory()
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
