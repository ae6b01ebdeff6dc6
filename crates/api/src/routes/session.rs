//! Routes for the `/sessions` resource: the landing hand-off and the
//! dashboard view/refresh flow.
//!
//! A session spans one dashboard screen lifetime. Creating it carries
//! the landing surface's query-style parameter pair (`company`,
//! `processing`); closing it ends the screen.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use gamereel_core::types::SessionId;
use gamereel_dashboard::DashboardView;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters of the landing hand-off.
#[derive(Debug, Deserialize)]
pub struct LandingParams {
    /// Free-text company identifier entered on the landing surface.
    pub company: Option<String>,
    /// Whether a processing job should be started for this session.
    #[serde(default)]
    pub processing: bool,
}

/// Response to a successful hand-off.
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
    pub dashboard: DashboardView,
}

/// POST /api/v1/sessions?company=Acme&processing=true
///
/// Opens a dashboard session. The company name is trimmed and must be
/// non-empty; the processing flag fires the one-shot trigger. Returns
/// the session id plus the dashboard view after the initial load.
pub async fn create_session(
    State(state): State<AppState>,
    Query(params): Query<LandingParams>,
) -> AppResult<(StatusCode, Json<CreateSessionResponse>)> {
    let company = params.company.unwrap_or_default();

    let session_id = state
        .dashboard
        .open_session(&company, params.processing)
        .await?;
    let dashboard = state.dashboard.view(session_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            dashboard,
        }),
    ))
}

/// GET /api/v1/sessions/{id}/dashboard -- current view state.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<Json<DashboardView>> {
    Ok(Json(state.dashboard.view(id).await?))
}

/// POST /api/v1/sessions/{id}/refresh -- manual "check for new reels".
///
/// Re-fetches the listing and returns the refreshed view, including a
/// new-content alert when the filtered count strictly increased.
pub async fn refresh_dashboard(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<Json<DashboardView>> {
    state.dashboard.refresh(id, true).await?;
    Ok(Json(state.dashboard.view(id).await?))
}

/// Body of the selection update.
#[derive(Debug, Deserialize)]
pub struct SelectReelRequest {
    /// Name of the reel to open in the detail view.
    pub name: String,
}

/// PUT /api/v1/sessions/{id}/selection -- open a reel's detail view.
///
/// The name must be in the current filtered listing; unknown names
/// are a 404. Returns the updated view.
pub async fn select_reel(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<SelectReelRequest>,
) -> AppResult<Json<DashboardView>> {
    state.dashboard.select_reel(id, &body.name).await?;
    Ok(Json(state.dashboard.view(id).await?))
}

/// DELETE /api/v1/sessions/{id}/selection -- close the detail view.
pub async fn clear_selection(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<Json<DashboardView>> {
    state.dashboard.clear_selection(id).await?;
    Ok(Json(state.dashboard.view(id).await?))
}

/// POST /api/v1/sessions/{id}/processing -- request the processing job.
///
/// At most one outbound attempt is made per session lifetime; repeat
/// requests are accepted and ignored once the attempt has started.
pub async fn request_processing(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<StatusCode> {
    state.dashboard.request_processing(id).await?;
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /api/v1/sessions/{id} -- the screen was left.
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<StatusCode> {
    state.dashboard.close_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                 -> create_session
/// GET    /{id}/dashboard   -> get_dashboard
/// POST   /{id}/refresh     -> refresh_dashboard
/// PUT    /{id}/selection   -> select_reel
/// DELETE /{id}/selection   -> clear_selection
/// POST   /{id}/processing  -> request_processing
/// DELETE /{id}             -> close_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/{id}/dashboard", get(get_dashboard))
        .route("/{id}/refresh", post(refresh_dashboard))
        .route(
            "/{id}/selection",
            put(select_reel).delete(clear_selection),
        )
        .route("/{id}/processing", post(request_processing))
        .route("/{id}", delete(close_session))
}
