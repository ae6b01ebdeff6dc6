pub mod health;
pub mod session;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /backend/health                   backend reachability proxy
///
/// /sessions                         create (landing hand-off)
/// /sessions/{id}                    close (DELETE)
/// /sessions/{id}/dashboard          current dashboard view
/// /sessions/{id}/refresh            manual refresh (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/backend/health", get(health::backend_health))
        .nest("/sessions", session::router())
}
