//! Schema service entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use schema_service::api::{create_router, AppState};
use schema_service::config::{Config, Profile};
use schema_service::utils::shutdown_signal;
use schema_service::ServiceError;

/// HTTP service serving SDM schema documents.
#[derive(Parser, Debug)]
#[command(name = "schema-service")]
#[command(about = "HTTP service that fetches and validates SDM schema documents")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP server port (overrides SCHEMA_SERVICE_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load().map_err(ServiceError::Config)?;
    config.validate().map_err(ServiceError::InvalidConfig)?;

    let filter = if args.verbose {
        EnvFilter::new("schema_service=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()))
    };

    match config.profile {
        Profile::Production => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        Profile::Development => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }

    let port = args.port.unwrap_or(config.port);
    info!("Configuration loaded successfully");
    info!("Application name: {}", config.name);
    info!("Schema repository: {}", config.schema_base_url);
    if !config.path_prefix.is_empty() {
        info!("Path prefix: {}", config.path_prefix);
    }

    let state = AppState::new(config);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.map_err(ServiceError::Io)?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
