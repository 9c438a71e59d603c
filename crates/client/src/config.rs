//! # Client Configuration
//!
//! Settings for talking to the Hospico backend, read from environment
//! variables:
//!
//! - `HOSPICO_API_BASE_URL`: backend origin, e.g. "https://api.hospico.in" (required)
//! - `HOSPICO_API_TOKEN`: JWT sent as a bearer token (optional)
//! - `HOSPICO_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{eyre, Result};
use std::{env, time::Duration};
use tracing::Level;

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin without a trailing path
    pub api_base_url: String,
    /// Bearer token for authenticated endpoints
    pub api_token: Option<String>,
    /// Timeout applied to every request, in seconds
    pub request_timeout_secs: u64,
    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("HOSPICO_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("HOSPICO_API_BASE_URL environment variable not set"))?;

        let api_token = lookup("HOSPICO_API_TOKEN").filter(|token| !token.is_empty());

        let request_timeout_secs = lookup("HOSPICO_REQUEST_TIMEOUT_SECONDS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_base_url,
            api_token,
            request_timeout_secs,
            log_level,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL for a backend path such as "/api/appointments"
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
