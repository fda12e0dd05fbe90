//! Unified error types for the schema service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Startup and process-level errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (socket bind, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request errors from the schema fetch pipeline.
///
/// Each variant maps to one HTTP status, applied uniformly: transport
/// failures are always 502, malformed payloads 500, shape mismatches and
/// bad names 422.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema name contains characters outside the allowed set.
    #[error("invalid schema name {name:?}: only ASCII letters, digits, '_' and '-' are allowed")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// The remote host could not be reached at the transport level.
    #[error("schema repository unreachable: {url}")]
    Unreachable {
        /// The URL that was attempted.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {url}")]
    BodyRead {
        /// The URL that was fetched.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The fetched document is not valid YAML.
    #[error("document at {url} is not valid YAML: {source}")]
    MalformedYaml {
        /// The URL that was fetched.
        url: String,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but does not satisfy the schema shape.
    #[error("document at {url} is not a valid schema: {detail}")]
    Invalid {
        /// The URL that was fetched.
        url: String,
        /// Which fields are missing or malformed.
        detail: String,
    },
}

impl SchemaError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            SchemaError::InvalidName { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            SchemaError::Unreachable { .. } => StatusCode::BAD_GATEWAY,
            SchemaError::BodyRead { .. } => StatusCode::BAD_GATEWAY,
            SchemaError::MalformedYaml { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            SchemaError::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// The attempted URL, when one was constructed.
    fn url(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidName { .. } => None,
            SchemaError::Unreachable { url, .. }
            | SchemaError::BodyRead { url, .. }
            | SchemaError::MalformedYaml { url, .. }
            | SchemaError::Invalid { url, .. } => Some(url),
        }
    }
}

/// JSON error body returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// The upstream URL that was attempted, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IntoResponse for SchemaError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            url: self.url().map(String::from),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
