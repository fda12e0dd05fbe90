//! HTTP service for fetching and validating SDM schema documents.
//!
//! The service exposes three endpoints: an index route returning application
//! metadata, a static greeting route, and a schema route that fetches a
//! named YAML document from the remote schema repository, validates it
//! against the SDM schema shape, and returns it as JSON.
//!
//! Every request is independent and stateless. The only shared resource is
//! the pooled outbound HTTP client, constructed once at startup and handed
//! to handlers through [`api::AppState`].
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metadata`]: Application metadata from build info
//! - [`schema`]: Schema document model and remote fetch client
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metadata;
pub mod schema;
pub mod utils;

pub use config::Config;
pub use error::{Result, SchemaError, ServiceError};
