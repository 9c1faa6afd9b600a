//! Server configuration from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Reads `CANDY_HOST`, `PORT` and `CANDY_BODY_LIMIT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CANDY_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(host.clone()))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let body_limit = parse_or("CANDY_BODY_LIMIT", lookup("CANDY_BODY_LIMIT"), DEFAULT_BODY_LIMIT)?;
        Ok(Self {
            addr: SocketAddr::new(ip, port),
            body_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}
