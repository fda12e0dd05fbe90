//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Logging profile selecting the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable log lines.
    Development,
    /// JSON structured log lines.
    Production,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Development
    }
}

/// Application configuration loaded from `SCHEMA_SERVICE_`-prefixed
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Name of the application, reported in index metadata.
    #[serde(default = "default_name")]
    pub name: String,

    /// URL prefix under which all routes are mounted (empty for root).
    #[serde(default)]
    pub path_prefix: String,

    /// Logging profile.
    #[serde(default)]
    pub profile: Profile,

    /// Log level filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the remote schema repository.
    #[serde(default = "default_schema_base_url")]
    pub schema_base_url: String,

    /// Outbound HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Maximum idle connections per host in the outbound pool.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,
}

fn default_name() -> String {
    "schema-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_schema_base_url() -> String {
    "https://raw.githubusercontent.com/lsst/sdm_schemas/main/yml".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("SCHEMA_SERVICE_").from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.path_prefix.is_empty() && !self.path_prefix.starts_with('/') {
            return Err("SCHEMA_SERVICE_PATH_PREFIX must start with '/'".to_string());
        }

        if self.path_prefix.ends_with('/') {
            return Err("SCHEMA_SERVICE_PATH_PREFIX must not end with '/'".to_string());
        }

        if self.schema_base_url.is_empty() {
            return Err("SCHEMA_SERVICE_SCHEMA_BASE_URL must not be empty".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("SCHEMA_SERVICE_HTTP_TIMEOUT_MS must be positive".to_string());
        }

        Ok(())
    }
}
