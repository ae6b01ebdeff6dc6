//! REST client for the processing backend's HTTP endpoints.

use std::time::Duration;

/// Path of the job-start endpoint, relative to the backend base URL.
pub const AUTO_PROCESS_PATH: &str = "/auto-process";

/// Errors from the processing backend REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Processing backend error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for a single processing backend.
pub struct ProcessingApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProcessingApi {
    /// Create a new client for a processing backend.
    ///
    /// * `base_url` - backend base URL, e.g. `https://backend.example.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to start a processing job.
    ///
    /// Sends `POST /auto-process` with no meaningful body. Any 2xx
    /// status counts as accepted; everything else is an error. Exactly
    /// one attempt is made.
    pub async fn start(&self) -> Result<(), ProcessingApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, AUTO_PROCESS_PATH))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Probe backend reachability.
    ///
    /// Sends `HEAD /auto-process` with the given per-request timeout
    /// and returns the raw status code. A reachable-but-erroring
    /// backend yields `Ok` with its status; only transport faults and
    /// timeouts yield `Err`.
    pub async fn ping(&self, timeout: Duration) -> Result<u16, ProcessingApiError> {
        let response = self
            .client
            .head(format!("{}{}", self.base_url, AUTO_PROCESS_PATH))
            .timeout(timeout)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }

    /// Map a non-2xx response to [`ProcessingApiError::Api`],
    /// preserving the raw body.
    async fn check_status(response: reqwest::Response) -> Result<(), ProcessingApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProcessingApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
