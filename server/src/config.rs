//! Server configuration parsed from environment variables.
//!
//! Storage selection mirrors deployment options: a Postgres URL wins, then a
//! data file, then process memory.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Where roadmaps are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    File(PathBuf),
    Postgres { url: String, max_connections: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8081
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `DATABASE_URL`: selects the Postgres store
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ROADMAP_DATA_FILE`: selects the file store when no `DATABASE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BIND_ADDR` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw))?;

        let storage = if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            let max_connections = lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
            StorageConfig::Postgres { url, max_connections }
        } else if let Some(path) = lookup("ROADMAP_DATA_FILE").filter(|v| !v.is_empty()) {
            StorageConfig::File(PathBuf::from(path))
        } else {
            StorageConfig::Memory
        };

        Ok(Self { bind_addr, port, storage })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
