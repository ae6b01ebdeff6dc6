//! Client for the managed object-storage service.
//!
//! Covers the two storage operations the dashboard needs: listing
//! objects under the reel sub-path (newest first) and resolving a
//! stored key to its public download URL. This system never writes
//! to storage.

pub mod client;

pub use client::{ObjectMetadata, StorageClient, StorageConfig, StorageError, StorageObject};
