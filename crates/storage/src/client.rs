//! REST client for the storage listing and public-URL endpoints.
//!
//! Speaks the Supabase Storage dialect: `POST /storage/v1/object/list/{bucket}`
//! for listings, `/storage/v1/object/public/{bucket}/{path}` for
//! public URLs. Listing is the only network operation; URL resolution
//! is a pure function of the key.

use serde::Deserialize;

use gamereel_core::types::Timestamp;

/// Maximum number of entries requested per listing call.
pub const LIST_LIMIT: u32 = 100;

/// Storage column used for ordering (newest first).
pub const SORT_COLUMN: &str = "created_at";

/// Connection settings for one storage namespace.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the storage service, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
    /// Bucket holding the reels.
    pub bucket: String,
    /// Sub-path within the bucket.
    pub prefix: String,
}

impl StorageConfig {
    /// Config for the default reel namespace (`videos/reels`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            bucket: "videos".to_string(),
            prefix: "reels".to_string(),
        }
    }
}

/// One object row returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageObject {
    /// Object name within the listed sub-path.
    pub name: String,
    /// Storage-assigned identifier; absent for folder marker rows.
    pub id: Option<String>,
    /// Creation time reported by storage.
    pub created_at: Timestamp,
    /// Object metadata; null for folder marker rows.
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

/// Subset of object metadata the dashboard uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectMetadata {
    /// Object size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// Errors from the storage REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service returned a non-2xx status code.
    #[error("Storage API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for a single storage namespace.
///
/// Constructed once at startup and injected into the dashboard
/// service; the lifetime equals the process lifetime.
pub struct StorageClient {
    client: reqwest::Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: StorageConfig) -> Self {
        Self { client, config }
    }

    /// Storage configuration this client talks to.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// List up to [`LIST_LIMIT`] objects under the reel sub-path,
    /// ordered by creation time descending.
    ///
    /// Returns the raw storage rows; displayability filtering is the
    /// caller's concern.
    pub async fn list(&self) -> Result<Vec<StorageObject>, StorageError> {
        let body = serde_json::json!({
            "prefix": self.config.prefix,
            "limit": LIST_LIMIT,
            "offset": 0,
            "sortBy": { "column": SORT_COLUMN, "order": "desc" },
        });

        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/list/{}",
                self.config.base_url, self.config.bucket
            ))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Resolve a stored object name to its public download URL.
    ///
    /// Pure function of the key and the fixed namespace; no network
    /// call is made and the object's existence is not checked.
    pub fn public_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}/{}",
            self.config.base_url, self.config.bucket, self.config.prefix, name
        )
    }

    /// Deserialize a listing response, mapping non-2xx statuses to
    /// [`StorageError::Api`] with the raw body preserved.
    async fn parse_response(response: reqwest::Response) -> Result<Vec<StorageObject>, StorageError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
