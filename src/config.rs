//! TOML configuration for the shopping list server.
//!
//! Every section has defaults, so an empty file (or no file at all) gives a
//! runnable setup: SQLite at `sqlite://shopping.db`, listening on
//! `127.0.0.1:5080`, with the development CORS policy on.
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:5080"
//!
//! [store]
//! backend = "sqlite"
//! database_url = "sqlite:///var/lib/shopping/shopping.db"
//! seed_demo_items = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::store::SqliteStoreConfig;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub store: StoreSection,
    pub log: LogSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the HTTP service binds to. Port `0` picks a free port.
    pub listen_addr: String,
    /// Attach the permissive development CORS policy.
    pub allow_any_origin: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5080".to_string(),
            allow_any_origin: true,
        }
    }
}

/// Which [`ItemStore`](crate::store::ItemStore) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

/// `[store]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackend,
    /// Connection string for the SQLite backend.
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Insert Milk, Eggs and Stick of Butter when the store starts empty.
    pub seed_demo_items: bool,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Sqlite,
            database_url: "sqlite://shopping.db".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
            seed_demo_items: false,
        }
    }
}

impl StoreSection {
    pub fn sqlite_config(&self) -> SqliteStoreConfig {
        SqliteStoreConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Fallback filter when `RUST_LOG` is not set (e.g. `"info"`, `"debug"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Values given on the command line. Each `Some` replaces the file value.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub listen_addr: Option<String>,
    pub database_url: Option<String>,
    pub memory: bool,
    pub seed: bool,
}

impl AppConfig {
    /// Load config from a TOML file, or use defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(addr) = overrides.listen_addr {
            self.server.listen_addr = addr;
        }
        if let Some(url) = overrides.database_url {
            self.store.database_url = url;
        }
        if overrides.memory {
            self.store.backend = StoreBackend::Memory;
        }
        if overrides.seed {
            self.store.seed_demo_items = true;
        }
    }
}
