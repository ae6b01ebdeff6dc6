use std::sync::Arc;

use gamereel_dashboard::DashboardService;
use gamereel_processing::ProcessingApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Dashboard session service (listing, refresh, trigger).
    pub dashboard: Arc<DashboardService>,
    /// Processing backend client, used directly by the health proxy.
    pub processing: Arc<ProcessingApi>,
}
