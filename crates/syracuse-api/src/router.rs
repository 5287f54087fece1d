//! Axum router construction for the API server.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware. Generic over the store traits so tests can
//! build the same router over in-memory stores.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use syracuse_db::{FactStore, SequenceStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/numbers/{value}` -- merged dual-store lookup
/// - `POST /api/numbers` -- dual-store write
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router<F, S>(state: Arc<AppState<F, S>>) -> Router
where
    F: FactStore + 'static,
    S: SequenceStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/numbers/{value}", get(handlers::lookup_number::<F, S>))
        .route("/api/numbers", post(handlers::store_number::<F, S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
