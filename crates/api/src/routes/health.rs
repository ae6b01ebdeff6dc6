//! Service health check and the processing-backend reachability proxy.

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Proxy response when the processing backend answered the probe.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendHealthResponse {
    pub status: &'static str,
    /// Raw HTTP status the backend answered with.
    pub backend_status: u16,
    /// Whether that status was a 2xx.
    pub backend_ok: bool,
}

/// Proxy error envelope when the backend could not be reached within
/// the probe timeout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendUnreachableResponse {
    pub status: &'static str,
    pub message: String,
    pub backend_status: &'static str,
}

/// GET /health -- service self-health.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/backend/health -- probe the processing backend.
///
/// Issues a `HEAD` to the backend with a bounded timeout. A backend
/// that answers at all (any status) is reported as reachable; a
/// transport fault or timeout becomes a 502 with an `"unreachable"`
/// marker, distinct from a reachable-but-erroring backend.
pub async fn backend_health(State(state): State<AppState>) -> Response {
    let timeout = Duration::from_secs(state.config.backend_health_timeout_secs);

    match state.processing.ping(timeout).await {
        Ok(status) => Json(BackendHealthResponse {
            status: "ok",
            backend_status: status,
            backend_ok: (200..300).contains(&status),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Processing backend unreachable");
            (
                StatusCode::BAD_GATEWAY,
                Json(BackendUnreachableResponse {
                    status: "error",
                    message: e.to_string(),
                    backend_status: "unreachable",
                }),
            )
                .into_response()
        }
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
