//! REST API endpoint handlers.
//!
//! Handlers are thin: extract the integer, delegate to the
//! [`FactCoordinator`](syracuse_db::FactCoordinator), serialize the
//! outcome. All dual-store semantics live in the data layer.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/numbers/{value}` | Merged dual-store lookup |
//! | `POST` | `/api/numbers` | Dual-store write (kernel fills gaps) |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use syracuse_db::{FactStore, SequenceStore};
use syracuse_types::{LookupResult, NumberFacts, WriteReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/numbers`.
///
/// `facts` and `sequence` are optional: anything absent is computed by
/// the kernel; anything supplied is persisted verbatim.
#[derive(Debug, serde::Deserialize)]
pub struct StoreRequest {
    /// The integer to analyze and persist.
    pub value: i64,
    /// Precomputed scalar facts, if the caller already has them.
    pub facts: Option<NumberFacts>,
    /// Precomputed trajectory steps, if the caller already has them.
    pub sequence: Option<Vec<i64>>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API endpoints.
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Syracuse Facts</title>
    <style>
        body { background: #0d1117; color: #c9d1d9; font-family: monospace; padding: 2rem; }
        h1 { color: #58a6ff; }
        li::before { content: ""; }
        code { color: #7ee787; }
    </style>
</head>
<body>
    <h1>Syracuse Facts</h1>
    <p>Arithmetic properties and Collatz trajectories, cached across two stores.</p>
    <ul>
        <li><code>GET /api/numbers/{value}</code> -- merged lookup (facts + trajectory)</li>
        <li><code>POST /api/numbers</code> -- compute and persist facts for a value</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /api/numbers/{value}
// ---------------------------------------------------------------------------

/// Concurrent dual-store lookup for a single value.
///
/// Always answers 200: absence of either half is data, not an error.
/// A store outage reads as absence too (logged in the data layer),
/// which keeps the read path available while one store is down.
pub async fn lookup_number<F: FactStore, S: SequenceStore>(
    State(state): State<Arc<AppState<F, S>>>,
    Path(value): Path<i64>,
) -> Json<LookupResult> {
    Json(state.coordinator.lookup(value).await)
}

// ---------------------------------------------------------------------------
// POST /api/numbers
// ---------------------------------------------------------------------------

/// Dual-store write for a single value.
///
/// Missing facts or trajectory are computed by the kernel. The response
/// is a per-store [`WriteReport`] -- partial success is explicit, never
/// collapsed into an all-or-nothing status.
///
/// # Errors
///
/// `400` when the trajectory must be computed and the value is
/// non-positive; `422` when the kernel's iteration bound trips.
pub async fn store_number<F: FactStore, S: SequenceStore>(
    State(state): State<Arc<AppState<F, S>>>,
    Json(request): Json<StoreRequest>,
) -> Result<Json<WriteReport>, ApiError> {
    let report = state
        .coordinator
        .store(request.value, request.facts, request.sequence)
        .await?;
    Ok(Json(report))
}
