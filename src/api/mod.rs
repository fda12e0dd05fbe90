//! HTTP API module for the index, greeting, and schema endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
