//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_COST_API_TIMEOUT_SECS, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Base URL of the cost service. When set, user totals are resolved
    /// remotely; when unset, they are summed from the local costs table.
    pub cost_api_url: Option<String>,
    pub cost_api_timeout_secs: u64,
    /// Base URL of the logs service. When set, audit records are also
    /// shipped remotely.
    pub log_api_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cost_api_url", &self.cost_api_url)
            .field("cost_api_timeout_secs", &self.cost_api_timeout_secs)
            .field("log_api_url", &self.log_api_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cost_api_url: env::var("COST_API_URL").ok().filter(|v| !v.is_empty()),
            cost_api_timeout_secs: env::var("COST_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COST_API_TIMEOUT_SECS),
            log_api_url: env::var("LOG_API_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
