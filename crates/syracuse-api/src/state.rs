//! Shared application state for the API server.
//!
//! [`AppState`] owns the [`FactCoordinator`] the handlers delegate to.
//! It is generic over the store traits so the same router serves both
//! production (`PostgreSQL` + blob store) and tests (in-memory stores).
//! The coordinator holds no request-scoped mutable state, so the whole
//! state is shared across requests behind a plain [`std::sync::Arc`].

use syracuse_db::{
    BlobSequenceStore, FactCoordinator, FactStore, RelationalFactStore, SequenceStore,
};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
pub struct AppState<F, S> {
    /// The dual-store coordinator all handlers delegate to.
    pub coordinator: FactCoordinator<F, S>,
}

impl<F: FactStore, S: SequenceStore> AppState<F, S> {
    /// Create application state over an existing coordinator.
    pub const fn new(coordinator: FactCoordinator<F, S>) -> Self {
        Self { coordinator }
    }
}

/// The production state: `PostgreSQL` facts, Redis-compatible blobs.
pub type LiveState = AppState<RelationalFactStore, BlobSequenceStore>;
