//! Seams between the dashboard service and its network collaborators.
//!
//! The storage and processing clients are process-wide singletons,
//! but the service only ever sees them through these traits so the
//! refresh and trigger flows are testable with in-memory fakes.

use async_trait::async_trait;

use gamereel_core::reel::ReelEntry;
use gamereel_processing::{ProcessingApi, ProcessingApiError};
use gamereel_storage::{StorageClient, StorageError, StorageObject};

/// Source of reel listings and public URLs.
#[async_trait]
pub trait ReelStore: Send + Sync {
    /// Fetch the raw reel listing, newest first.
    async fn list_reels(&self) -> Result<Vec<ReelEntry>, StorageError>;

    /// Resolve a reel name to its public download URL (pure).
    fn reel_url(&self, name: &str) -> String;
}

#[async_trait]
impl ReelStore for StorageClient {
    async fn list_reels(&self) -> Result<Vec<ReelEntry>, StorageError> {
        let rows = self.list().await?;
        Ok(rows.into_iter().map(reel_from_object).collect())
    }

    fn reel_url(&self, name: &str) -> String {
        self.public_url(name)
    }
}

/// Fire-and-forget start of an external processing job.
#[async_trait]
pub trait ProcessingTrigger: Send + Sync {
    /// Issue the single outbound start request.
    async fn start(&self) -> Result<(), ProcessingApiError>;
}

#[async_trait]
impl ProcessingTrigger for ProcessingApi {
    async fn start(&self) -> Result<(), ProcessingApiError> {
        ProcessingApi::start(self).await
    }
}

/// Map a raw storage row to the dashboard's reel view of it.
fn reel_from_object(object: StorageObject) -> ReelEntry {
    ReelEntry {
        name: object.name,
        id: object.id,
        created_at: object.created_at,
        size_bytes: object.metadata.and_then(|m| m.size),
    }
}
