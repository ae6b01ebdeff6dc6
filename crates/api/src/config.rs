/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the storage service.
    pub storage_url: String,
    /// API key for the storage service.
    pub storage_api_key: String,
    /// Bucket holding the reels (default: `videos`).
    pub storage_bucket: String,
    /// Sub-path within the bucket (default: `reels`).
    pub storage_prefix: String,
    /// Base URL of the external processing backend.
    pub processing_url: String,
    /// Timeout for the backend health probe in seconds (default: `5`).
    pub backend_health_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                                       |
    /// |-------------------------------|-----------------------------------------------|
    /// | `HOST`                        | `0.0.0.0`                                     |
    /// | `PORT`                        | `3000`                                        |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`                       |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                                          |
    /// | `STORAGE_URL`                 | `http://localhost:54321`                      |
    /// | `STORAGE_API_KEY`             | (empty)                                       |
    /// | `STORAGE_BUCKET`              | `videos`                                      |
    /// | `STORAGE_PREFIX`              | `reels`                                       |
    /// | `PROCESSING_URL`              | `https://web-production-155f4.up.railway.app` |
    /// | `BACKEND_HEALTH_TIMEOUT_SECS` | `5`                                           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_url =
            std::env::var("STORAGE_URL").unwrap_or_else(|_| "http://localhost:54321".into());
        let storage_api_key = std::env::var("STORAGE_API_KEY").unwrap_or_default();
        let storage_bucket = std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "videos".into());
        let storage_prefix = std::env::var("STORAGE_PREFIX").unwrap_or_else(|_| "reels".into());

        let processing_url = std::env::var("PROCESSING_URL")
            .unwrap_or_else(|_| "https://web-production-155f4.up.railway.app".into());

        let backend_health_timeout_secs: u64 = std::env::var("BACKEND_HEALTH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("BACKEND_HEALTH_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_url,
            storage_api_key,
            storage_bucket,
            storage_prefix,
            processing_url,
            backend_health_timeout_secs,
        }
    }
}
