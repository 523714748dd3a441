//! Process configuration, read from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const PRODUCTS_FILENAME_ENV: &str = "PRODUCTS_FILENAME";
pub const HTTP_SERVER_PORT_ENV: &str = "HTTP_SERVER_PORT";
pub const HTTP_SERVER_HOST_ENV: &str = "HTTP_SERVER_HOST";
pub const TOKEN_ENV: &str = "TOKEN";

const DEFAULT_PRODUCTS_FILENAME: &str = "./products.json";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEV_TOKEN: &str = "dev-token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub products_file: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    /// Shared secret expected in the `token` header of mutating requests.
    pub token: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let products_file = match lookup(PRODUCTS_FILENAME_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    var: PRODUCTS_FILENAME_ENV,
                });
            }
            Some(v) => PathBuf::from(v.trim()),
            None => PathBuf::from(DEFAULT_PRODUCTS_FILENAME),
        };

        let port = match lookup(HTTP_SERVER_PORT_ENV) {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: HTTP_SERVER_PORT_ENV,
                value: v.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let host_raw = lookup(HTTP_SERVER_HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost {
                var: HTTP_SERVER_HOST_ENV,
                value: host_raw.clone(),
            })?;

        let token = match lookup(TOKEN_ENV) {
            Some(v) if !v.is_empty() => v,
            _ => {
                tracing::warn!("TOKEN not set; using insecure dev default");
                DEV_TOKEN.to_string()
            }
        };

        Ok(Self {
            products_file,
            host,
            port,
            token,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
