use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamereel_api::config::ServerConfig;
use gamereel_api::router::build_app_router;
use gamereel_api::state::AppState;
use gamereel_dashboard::DashboardService;
use gamereel_processing::ProcessingApi;
use gamereel_storage::{StorageClient, StorageConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamereel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Outbound clients (one shared connection pool) ---
    let http = reqwest::Client::new();

    let storage = Arc::new(StorageClient::with_client(
        http.clone(),
        StorageConfig {
            base_url: config.storage_url.clone(),
            api_key: config.storage_api_key.clone(),
            bucket: config.storage_bucket.clone(),
            prefix: config.storage_prefix.clone(),
        },
    ));
    tracing::info!(
        bucket = %config.storage_bucket,
        prefix = %config.storage_prefix,
        "Storage client created"
    );

    let processing = Arc::new(ProcessingApi::with_client(
        http,
        config.processing_url.clone(),
    ));
    tracing::info!(backend = %config.processing_url, "Processing client created");

    // --- Dashboard service ---
    let dashboard = DashboardService::new(
        storage,
        Arc::clone(&processing) as Arc<dyn gamereel_dashboard::ProcessingTrigger>,
    );

    // --- App state & router ---
    let state = AppState {
        config: Arc::new(config.clone()),
        dashboard,
        processing,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
