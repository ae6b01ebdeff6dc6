//! Reel listing domain logic.
//!
//! A "reel" is one video object stored under the fixed storage
//! sub-path. This module owns the displayability filter applied to
//! raw storage listings and the new-content delta computed on a
//! manual refresh. Both are pure so the dashboard service stays
//! trivially testable.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// File extensions accepted for display (lowercase, with dot).
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm"];

/// Name tokens that mark non-content storage objects.
pub const EXCLUDED_TOKENS: &[&str] = &["placeholder", "empty"];

/// One stored video object, as seen by the dashboard.
///
/// Created externally when a video is uploaded to storage; read-only
/// from this system's perspective. `id` is optional because the
/// storage listing omits it for folder marker rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelEntry {
    /// Object name, also the storage key within the reel sub-path.
    pub name: String,
    /// Opaque identifier assigned by storage.
    pub id: Option<String>,
    /// Creation time reported by storage.
    pub created_at: Timestamp,
    /// Object size in bytes, when storage reports it.
    pub size_bytes: Option<u64>,
}

/// Whether an object name may be shown on the dashboard.
///
/// Rejects hidden files (leading `.`), placeholder/empty markers, and
/// anything without a known video extension. Case-insensitive.
pub fn is_displayable(name: &str) -> bool {
    let name = name.to_lowercase();

    if name.starts_with('.') {
        return false;
    }
    if EXCLUDED_TOKENS.iter().any(|token| name.contains(token)) {
        return false;
    }
    VIDEO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Drop non-displayable entries, preserving the listing order.
///
/// Applied before display and before any count comparison, so hidden
/// and placeholder objects never influence the new-content delta.
pub fn filter_reels(entries: Vec<ReelEntry>) -> Vec<ReelEntry> {
    entries
        .into_iter()
        .filter(|entry| is_displayable(&entry.name))
        .collect()
}

/// New-content delta between two filtered counts.
///
/// Returns `Some(current - previous)` only when the previous count
/// was nonzero and the current count strictly exceeds it. The
/// zero-previous case covers the initial load, which never alerts.
/// This is a stateless comparison: simultaneous additions and
/// removals that net to a non-increase are not detected.
pub fn new_content_delta(previous: usize, current: usize) -> Option<usize> {
    if previous > 0 && current > previous {
        Some(current - previous)
    } else {
        None
    }
}
