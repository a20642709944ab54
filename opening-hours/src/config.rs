//! Server configuration.
//!
//! Read from the environment at start-up:
//! - `HOURS_HOST`: bind address (default: 127.0.0.1)
//! - `HOURS_PORT`: port (default: 3000)
//! - `HOURS_CACHE_TTL_SECS`: parse cache TTL in seconds (default: 600)
//! - `HOURS_CACHE_CAPACITY`: parse cache size (default: 10000)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::cache::CacheConfig;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {name}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Parse cache settings.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Build a configuration from `HOURS_*` environment variables, falling
    /// back to the defaults for any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_var(&lookup, "HOURS_HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "HOURS_PORT")?.unwrap_or(defaults.port);
        let ttl = parse_var(&lookup, "HOURS_CACHE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache.ttl);
        let max_capacity =
            parse_var(&lookup, "HOURS_CACHE_CAPACITY")?.unwrap_or(defaults.cache.max_capacity);

        Ok(Self {
            host,
            port,
            cache: CacheConfig { ttl, max_capacity },
        })
    }

    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            cache: CacheConfig::default(),
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { name, value }),
    }
}
