//! Integration tests for the API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, over in-memory stores. This validates
//! handler logic, routing, and status mapping without live stores.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use syracuse_api::router::build_router;
use syracuse_api::state::AppState;
use syracuse_db::{FactCoordinator, MemoryFactStore, MemorySequenceStore};
use tower::ServiceExt;

type TestState = AppState<MemoryFactStore, MemorySequenceStore>;

fn make_test_state() -> Arc<TestState> {
    let coordinator = FactCoordinator::new(MemoryFactStore::new(), MemorySequenceStore::new());
    Arc::new(AppState::new(coordinator))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn lookup_of_unknown_value_returns_both_halves_null() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/numbers/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["value"], 42);
    assert_eq!(body["facts"], Value::Null);
    assert_eq!(body["sequence"], Value::Null);
}

#[tokio::test]
async fn store_then_lookup_round_trip() {
    let state = make_test_state();

    let response = build_router(state.clone())
        .oneshot(post_json("/api/numbers", &json!({ "value": 6 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;
    assert_eq!(report["value"], 6);
    assert_eq!(report["relational_written"], true);
    assert_eq!(report["blob_written"], true);
    assert_eq!(report["errors"], json!([]));

    let response = build_router(state)
        .oneshot(Request::get("/api/numbers/6").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["facts"]["is_even"], true);
    assert_eq!(body["facts"]["is_perfect"], true);
    assert_eq!(body["facts"]["is_prime"], false);
    assert_eq!(body["sequence"]["steps"], json!([6, 3, 10, 5, 16, 8, 4, 2, 1]));
}

#[tokio::test]
async fn store_accepts_precomputed_parts() {
    let state = make_test_state();

    let request = json!({
        "value": 5,
        "facts": { "value": 5, "is_even": false, "is_perfect": false, "is_prime": true },
        "sequence": [5, 16, 8, 4, 2, 1],
    });
    let response = build_router(state.clone())
        .oneshot(post_json("/api/numbers", &request))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;
    assert_eq!(report["relational_written"], true);
    assert_eq!(report["blob_written"], true);

    let response = build_router(state)
        .oneshot(Request::get("/api/numbers/5").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["sequence"]["steps"], json!([5, 16, 8, 4, 2, 1]));
}

#[tokio::test]
async fn storing_a_duplicate_is_reported_not_rejected() {
    let state = make_test_state();

    let response = build_router(state.clone())
        .oneshot(post_json("/api/numbers", &json!({ "value": 28 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = build_router(state)
        .oneshot(post_json("/api/numbers", &json!({ "value": 28 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;
    assert_eq!(report["relational_written"], false);
    assert_eq!(report["blob_written"], true);
    assert_eq!(report["errors"][0]["store"], "relational");
}

#[tokio::test]
async fn storing_a_non_positive_value_is_bad_request() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/api/numbers", &json!({ "value": 0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn runaway_trajectory_is_unprocessable() {
    let router = build_router(make_test_state());

    // i64::MAX is odd; its very first Collatz step overflows, tripping
    // the kernel's runaway guard.
    let response = router
        .oneshot(post_json(
            "/api/numbers",
            &json!({ "value": i64::MAX }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn lookup_survives_a_relational_outage() {
    let facts_store = MemoryFactStore::new();
    let sequences = MemorySequenceStore::new();
    let coordinator = FactCoordinator::new(facts_store.clone(), sequences);
    let state = Arc::new(AppState::new(coordinator));

    // Seed both halves, then take the relational store down.
    build_router(state.clone())
        .oneshot(post_json("/api/numbers", &json!({ "value": 6 })))
        .await
        .unwrap();
    facts_store.set_unavailable(true);

    let response = build_router(state)
        .oneshot(Request::get("/api/numbers/6").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["facts"], Value::Null);
    assert_eq!(body["sequence"]["steps"][0], 6);
}
