use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gamereel_api::config::ServerConfig;
use gamereel_api::router::build_app_router;
use gamereel_api::state::AppState;
use gamereel_core::reel::ReelEntry;
use gamereel_dashboard::{DashboardService, ProcessingTrigger, ReelStore};
use gamereel_processing::{ProcessingApi, ProcessingApiError};
use gamereel_storage::StorageError;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev
/// default); `processing_url` points wherever the test needs.
pub fn test_config(processing_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage_url: "http://localhost:54321".to_string(),
        storage_api_key: String::new(),
        storage_bucket: "videos".to_string(),
        storage_prefix: "reels".to_string(),
        processing_url: processing_url.to_string(),
        backend_health_timeout_secs: 5,
    }
}

/// Scripted reel store: each listing call pops the next response; an
/// exhausted script yields empty listings.
pub struct ScriptedStore {
    responses: Mutex<VecDeque<Result<Vec<ReelEntry>, StorageError>>>,
    pub calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new(responses: Vec<Result<Vec<ReelEntry>, StorageError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ReelStore for ScriptedStore {
    async fn list_reels(&self) -> Result<Vec<ReelEntry>, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn reel_url(&self, name: &str) -> String {
        format!("http://cdn.test/reels/{name}")
    }
}

/// Counting processing trigger that always succeeds.
pub struct CountingTrigger {
    pub calls: AtomicUsize,
}

impl CountingTrigger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ProcessingTrigger for CountingTrigger {
    async fn start(&self) -> Result<(), ProcessingApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A reel listing of `count` entries named `clip_{i}.mp4`.
pub fn reels(count: usize) -> Vec<ReelEntry> {
    (0..count)
        .map(|i| ReelEntry {
            name: format!("clip_{i}.mp4"),
            id: Some(format!("id-{i}")),
            created_at: Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap(),
            size_bytes: Some(2_097_152),
        })
        .collect()
}

/// Build the full application router with all middleware layers over
/// the given fakes.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID,
/// timeout, tracing, panic recovery) that production uses.
/// `processing_url` is where the backend health proxy will probe.
pub fn build_test_app(
    store: Arc<ScriptedStore>,
    trigger: Arc<CountingTrigger>,
    processing_url: &str,
) -> Router {
    let config = test_config(processing_url);
    let dashboard = DashboardService::new(store, trigger);
    let processing = Arc::new(ProcessingApi::new(processing_url));

    let state = AppState {
        config: Arc::new(config.clone()),
        dashboard,
        processing,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

/// Issue a POST request with an empty body against the app.
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

/// Issue a DELETE request against the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri).await
}

/// Issue a PUT request with a JSON body against the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the standard `{error, code}` envelope.
pub async fn assert_error_envelope(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
