//! Client for the remote schema repository.

use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::SchemaError;

use super::model::Schema;

/// Client for fetching schema documents by name.
///
/// Wraps the single process-wide pooled HTTP client; cheap to clone and safe
/// for concurrent use across requests.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    /// HTTP client for repository requests.
    http: reqwest::Client,
    /// Base URL of the schema repository.
    base_url: String,
}

impl SchemaClient {
    /// Create a new schema client from config with pooled HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.schema_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the document for a schema name.
    pub fn schema_url(&self, name: &str) -> String {
        format!("{}/{}.yaml", self.base_url, name)
    }

    /// Fetch a schema document by name.
    ///
    /// Performs a live GET on every call; no caching, no retries. The remote
    /// HTTP status is not inspected: whatever body comes back is parsed, so
    /// a repository error page surfaces as a parse or validation failure.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn fetch(&self, name: &str) -> Result<Schema, SchemaError> {
        validate_name(name)?;
        let url = self.schema_url(name);
        debug!(url = %url, "fetching schema document");

        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|source| SchemaError::Unreachable {
                    url: url.clone(),
                    source,
                })?;

        let body = response
            .text()
            .await
            .map_err(|source| SchemaError::BodyRead {
                url: url.clone(),
                source,
            })?;

        let value: serde_yaml::Value =
            serde_yaml::from_str(&body).map_err(|source| SchemaError::MalformedYaml {
                url: url.clone(),
                source,
            })?;

        serde_yaml::from_value(value).map_err(|source| SchemaError::Invalid {
            url,
            detail: source.to_string(),
        })
    }
}

/// Reject names that could alter the URL path or query.
fn validate_name(name: &str) -> Result<(), SchemaError> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if ok {
        Ok(())
    } else {
        Err(SchemaError::InvalidName {
            name: name.to_string(),
        })
    }
}
