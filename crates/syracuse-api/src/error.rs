//! Error types for the API layer.
//!
//! [`ApiError`] covers request-scoped failures and maps onto HTTP
//! responses via its [`IntoResponse`](axum::response::IntoResponse)
//! implementation. [`ServiceError`] covers startup failures in the
//! binary (configuration, store connections, server lifecycle).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use syracuse_db::StoreError;
use syracuse_kernel::KernelError;

use crate::server::ServerError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The input is outside the domain of the requested computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The kernel's defensive iteration bound was breached.
    #[error("computation limit exceeded: {0}")]
    LimitExceeded(String),
}

impl From<KernelError> for ApiError {
    fn from(err: KernelError) -> Self {
        match err {
            KernelError::InvalidArgument(_) => Self::InvalidInput(err.to_string()),
            KernelError::LimitExceeded { .. } => Self::LimitExceeded(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::LimitExceeded(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Errors that can occur while starting the service binary.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required environment variable is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A backing store could not be reached during startup.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
