//! HTTP API handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::metadata::Metadata;
use crate::schema::{Schema, SchemaClient};
use crate::SchemaError;

/// Greeting returned by the `/hello` endpoint.
pub const GREETING: &str = "Hello, SQuaRE Services Bootcamp!";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide configuration.
    pub config: Arc<Config>,
    /// Application metadata, built once at startup.
    pub metadata: Metadata,
    /// Shared schema repository client.
    pub schemas: SchemaClient,
}

impl AppState {
    /// Create app state from configuration.
    pub fn new(config: Config) -> Self {
        let metadata = Metadata::new(&config.name);
        let schemas = SchemaClient::new(&config);
        Self {
            config: Arc::new(config),
            metadata,
            schemas,
        }
    }
}

/// Index response.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    /// Application metadata.
    pub metadata: Metadata,
}

/// Query parameters for the schema endpoint.
#[derive(Debug, Deserialize)]
pub struct SchemaQuery {
    /// Name of the schema to fetch.
    pub name: String,
}

/// Index handler - returns application metadata.
pub async fn get_index(State(state): State<AppState>) -> Json<IndexResponse> {
    info!("request for application metadata");
    Json(IndexResponse {
        metadata: state.metadata.clone(),
    })
}

/// Greeting handler - returns a constant string.
pub async fn get_greeting() -> &'static str {
    GREETING
}

/// Schema handler - fetches a named schema document and returns it as JSON.
pub async fn get_schema(
    State(state): State<AppState>,
    Query(query): Query<SchemaQuery>,
) -> Result<Json<Schema>, SchemaError> {
    info!(name = %query.name, url = %state.schemas.schema_url(&query.name), "request for schema");
    let schema = state.schemas.fetch(&query.name).await?;
    Ok(Json(schema))
}
