//! Configuration for the service binary.
//!
//! All configuration is loaded from environment variables: the two
//! store URLs plus the HTTP bind address. Pool tuning beyond the
//! connection count stays at the [`syracuse_db::PostgresConfig`]
//! defaults.

use crate::error::ServiceError;

/// Default blob store URL for local development.
const DEFAULT_BLOB_STORE_URL: &str = "redis://localhost:6379";

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 8080;

/// Default maximum `PostgreSQL` connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Blob store connection URL (Redis URL scheme).
    pub blob_store_url: String,
    /// Host address the HTTP server binds to.
    pub host: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Maximum number of `PostgreSQL` connections in the pool.
    pub max_connections: u32,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `BLOB_STORE_URL` -- blob store URL (default `redis://localhost:6379`)
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default 8080)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default 10)
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] when a required variable is
    /// missing or a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ServiceError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ServiceError::Config(String::from("DATABASE_URL is not set")))?;

        let blob_store_url = std::env::var("BLOB_STORE_URL")
            .unwrap_or_else(|_| DEFAULT_BLOB_STORE_URL.to_owned());

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ServiceError::Config(format!("invalid PORT: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_connections: u32 = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ServiceError::Config(format!("invalid DB_MAX_CONNECTIONS: {e}")))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            blob_store_url,
            host,
            port,
            max_connections,
        })
    }
}
