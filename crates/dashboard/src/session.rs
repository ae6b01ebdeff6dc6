//! Transient per-screen dashboard state and its serialized views.

use serde::Serialize;

use gamereel_core::format::{format_file_size, format_timestamp};
use gamereel_core::reel::ReelEntry;
use gamereel_core::types::Timestamp;

use crate::trigger::TriggerState;

/// State held for the lifetime of one dashboard screen.
///
/// Nothing here is persisted; a new session is rebuilt from scratch
/// on every dashboard entry.
#[derive(Debug)]
pub struct DashboardSession {
    /// Company identifier handed off by the landing surface.
    pub company_name: String,
    /// Filtered reel listing, most recent first.
    pub reels: Vec<ReelEntry>,
    /// Initial load in progress.
    pub loading: bool,
    /// Manual refresh in progress.
    pub refreshing: bool,
    /// Filtered count recorded after the most recent fetch; input to
    /// the next new-content comparison.
    pub last_reel_count: usize,
    /// Name of the reel opened in the detail view, if any.
    pub selected_reel: Option<String>,
    /// Live new-content notification, if any.
    pub alert: Option<NewContentAlert>,
    /// Monotonic alert counter; lets a scheduled clear recognize that
    /// a newer alert has replaced the one it was armed for.
    pub alert_seq: u64,
    /// One-shot processing trigger guard.
    pub trigger: TriggerState,
}

impl DashboardSession {
    /// Fresh session for a company, before the initial load.
    pub fn new(company_name: String) -> Self {
        Self {
            company_name,
            reels: Vec::new(),
            loading: true,
            refreshing: false,
            last_reel_count: 0,
            selected_reel: None,
            alert: None,
            alert_seq: 0,
            trigger: TriggerState::default(),
        }
    }
}

/// Transient notification that a manual refresh found new reels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewContentAlert {
    /// How many reels were added since the last known count.
    pub new_reels: usize,
}

/// Snapshot of a session for the HTTP layer.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub company_name: String,
    pub reels: Vec<ReelView>,
    pub reel_count: usize,
    /// Formatted sum of all listed reel sizes (the stats row).
    pub total_size_display: String,
    pub loading: bool,
    pub refreshing: bool,
    pub selected_reel: Option<String>,
    pub alert: Option<NewContentAlert>,
    pub trigger: TriggerState,
}

/// One reel as displayed, with the resolved URL and formatted fields.
#[derive(Debug, Serialize)]
pub struct ReelView {
    pub name: String,
    pub id: Option<String>,
    pub created_at: Timestamp,
    pub url: String,
    pub size_display: String,
    pub created_display: String,
}

impl ReelView {
    /// Build the display form of a reel, resolving its public URL
    /// through the given resolver.
    pub fn from_entry(entry: &ReelEntry, url: String) -> Self {
        Self {
            name: entry.name.clone(),
            id: entry.id.clone(),
            created_at: entry.created_at,
            url,
            size_display: format_file_size(entry.size_bytes),
            created_display: format_timestamp(entry.created_at),
        }
    }
}
