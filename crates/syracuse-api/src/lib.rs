//! HTTP service for the Syracuse number-facts system.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **`GET /api/numbers/{value}`** -- concurrent dual-store lookup,
//!   returning the merged result with independently nullable halves
//! - **`POST /api/numbers`** -- dual-store write, computing facts and
//!   trajectory via the kernel when the caller did not supply them
//! - **Minimal HTML status page** (`GET /`) listing the endpoints
//!
//! # Architecture
//!
//! The server is a thin transport over
//! [`syracuse_db::FactCoordinator`]: handlers extract the integer,
//! delegate, and map the result to JSON. Routing, schema binding, and
//! configuration live here; all coordination semantics (fan-out/fan-in,
//! partial results, write reports) live in the data layer. The router
//! is generic over the store traits so it can be exercised in tests
//! with in-memory stores.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::ServiceConfig;
pub use error::{ApiError, ServiceError};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
