//! Service binary for the Syracuse number-facts system.
//!
//! Wires the two stores, the coordinator, and the HTTP server
//! together.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Connect to the blob store
//! 5. Build the coordinator and serve HTTP until terminated

use std::sync::Arc;

use syracuse_api::config::ServiceConfig;
use syracuse_api::server::{ServerConfig, start_server};
use syracuse_api::state::{AppState, LiveState};
use syracuse_db::{BlobSequenceStore, FactCoordinator, PostgresConfig, PostgresPool, RelationalFactStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store connections, or the HTTP
/// server fail.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("syracuse-api starting");

    // 2. Load configuration.
    let config = ServiceConfig::from_env()?;
    info!(
        host = config.host.as_str(),
        port = config.port,
        max_connections = config.max_connections,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and bring the schema up to date.
    let pg_config =
        PostgresConfig::new(&config.database_url).with_max_connections(config.max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Connect to the blob store. Container provisioning is lazy and
    //    happens on first use.
    let sequences = BlobSequenceStore::connect(&config.blob_store_url).await?;

    // 5. Assemble the coordinator and serve.
    let facts = RelationalFactStore::new(pool.pool().clone());
    let coordinator = FactCoordinator::new(facts, sequences);
    let state: Arc<LiveState> = Arc::new(AppState::new(coordinator));

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    pool.close().await;
    Ok(())
}
