//! Integration tests for the processing-backend health proxy.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, CountingTrigger, ScriptedStore};

fn app(processing_url: &str) -> axum::Router {
    common::build_test_app(
        ScriptedStore::new(vec![]),
        CountingTrigger::new(),
        processing_url,
    )
}

// ---------------------------------------------------------------------------
// Test: healthy backend is reported with its status passed through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reachable_backend_reports_ok() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("HEAD", "/auto-process")
        .with_status(200)
        .create_async()
        .await;

    let response = get(app(&server.url()), "/api/v1/backend/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backendStatus"], 200);
    assert_eq!(json["backendOk"], true);
}

// ---------------------------------------------------------------------------
// Test: a reachable-but-erroring backend is NOT "unreachable"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn erroring_backend_is_still_reachable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("HEAD", "/auto-process")
        .with_status(503)
        .create_async()
        .await;

    let response = get(app(&server.url()), "/api/v1/backend/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backendStatus"], 503);
    assert_eq!(json["backendOk"], false);
}

// ---------------------------------------------------------------------------
// Test: transport fault becomes a 502 with the unreachable envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_backend_returns_502_envelope() {
    // Port 9 (discard) is not listening; the probe fails fast.
    let response = get(app("http://127.0.0.1:9"), "/api/v1/backend/health").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["backendStatus"], "unreachable");
    assert!(json["message"].is_string());
}
