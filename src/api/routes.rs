//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{get_greeting, get_index, get_schema, AppState};

/// Create the API router, mounted under the configured path prefix.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(get_index))
        .route("/hello", get(get_greeting))
        .route("/schema", get(get_schema))
        .with_state(state.clone());

    let router = if state.config.path_prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&state.config.path_prefix, routes)
    };

    router.layer(TraceLayer::new_for_http())
}
