//! Server configuration read from the environment.
//!
//! One optional secret (`OPENAI_API_KEY`) decides whether live answers or
//! demo-mode answers are produced; `ANSWER_BACKEND_URL` switches the server
//! to the alternate retrieval backend instead.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Listen address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the warp server binds to.
    pub bind_addr: SocketAddr,
    /// Upstream OpenAI credential; absent means demo mode.
    pub openai_api_key: Option<String>,
    /// Full URL of the alternate backend's ask endpoint. Takes precedence
    /// over the OpenAI path when set.
    pub backend_url: Option<String>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Empty-string values are treated as unset, so a `.env` file with
    /// blank placeholders still selects demo mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("OPENAI_API_KEY").ok(),
            env::var("ANSWER_BACKEND_URL").ok(),
            env::var("BIND_ADDR").ok(),
        )
    }

    fn from_values(
        openai_api_key: Option<String>,
        backend_url: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = bind_addr
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { addr, source })?;

        Ok(Self {
            bind_addr,
            openai_api_key: openai_api_key.filter(|value| !value.is_empty()),
            backend_url: backend_url.filter(|value| !value.is_empty()),
        })
    }
}
