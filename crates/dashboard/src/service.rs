//! Dashboard session service.
//!
//! Owns the set of live sessions and the two outbound flows: the
//! listing fetch with new-content detection, and the one-shot
//! processing trigger. The collaborating clients are injected as
//! trait objects; the service itself holds no network code.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};

use gamereel_core::error::CoreError;
use gamereel_core::format::format_file_size;
use gamereel_core::reel::{filter_reels, new_content_delta};
use gamereel_core::types::SessionId;

use crate::session::{DashboardSession, DashboardView, NewContentAlert, ReelView};
use crate::store::{ProcessingTrigger, ReelStore};

/// Seconds a new-content alert stays visible before auto-clearing.
pub const ALERT_CLEAR_SECS: u64 = 5;

type SharedSession = Arc<Mutex<DashboardSession>>;

/// Service coordinating all live dashboard sessions.
pub struct DashboardService {
    store: Arc<dyn ReelStore>,
    trigger: Arc<dyn ProcessingTrigger>,
    sessions: RwLock<HashMap<SessionId, SharedSession>>,
}

impl DashboardService {
    /// Create the service over the injected collaborators.
    pub fn new(store: Arc<dyn ReelStore>, trigger: Arc<dyn ProcessingTrigger>) -> Arc<Self> {
        Arc::new(Self {
            store,
            trigger,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Open a dashboard session (the landing hand-off).
    ///
    /// Validates the company name (trimmed, non-empty), optionally
    /// spawns the one-shot processing trigger, then performs the
    /// initial load. Trigger and load run independently; neither
    /// waits for the other.
    pub async fn open_session(
        &self,
        company_name: &str,
        processing_requested: bool,
    ) -> Result<SessionId, CoreError> {
        let company = company_name.trim();
        if company.is_empty() {
            return Err(CoreError::Validation(
                "Company name must not be empty".to_string(),
            ));
        }

        let id = SessionId::new_v4();
        let session = Arc::new(Mutex::new(DashboardSession::new(company.to_string())));
        self.sessions.write().await.insert(id, Arc::clone(&session));
        tracing::info!(session_id = %id, company, processing_requested, "Dashboard session opened");

        if processing_requested {
            tokio::spawn(run_trigger(
                Arc::clone(&self.trigger),
                Arc::clone(&session),
                id,
            ));
        }

        self.refresh(id, false).await?;
        Ok(id)
    }

    /// Attempt the one-shot processing trigger for a session.
    ///
    /// At most one outbound request is issued per session lifetime:
    /// the [`TriggerState`](crate::TriggerState) guard is claimed
    /// under the session lock, the request runs with the lock
    /// released, and both outcomes settle the guard. Repeat calls
    /// after the attempt has started are no-ops.
    pub async fn request_processing(&self, id: SessionId) -> Result<(), CoreError> {
        let session = self.session(id).await?;
        run_trigger(Arc::clone(&self.trigger), session, id).await;
        Ok(())
    }

    /// Fetch, filter, and store the reel listing for a session.
    ///
    /// `manual` distinguishes a user-requested refresh from the
    /// automatic initial load. Only a manual refresh can raise a
    /// new-content alert, and only when the previously recorded count
    /// was nonzero and strictly exceeded. On a storage error the
    /// previous listing and count are left untouched; the busy flags
    /// are cleared on every path.
    pub async fn refresh(&self, id: SessionId, manual: bool) -> Result<(), CoreError> {
        let session = self.session(id).await?;

        {
            let mut s = session.lock().await;
            if manual {
                s.refreshing = true;
            } else {
                s.loading = true;
            }
        }

        let result = self.store.list_reels().await;

        let mut s = session.lock().await;
        match result {
            Ok(entries) => {
                let reels = filter_reels(entries);

                if manual {
                    if let Some(delta) = new_content_delta(s.last_reel_count, reels.len()) {
                        s.alert = Some(NewContentAlert { new_reels: delta });
                        s.alert_seq += 1;
                        tracing::info!(session_id = %id, new_reels = delta, "New reels since last check");
                        Self::spawn_alert_clear(Arc::clone(&session), s.alert_seq);
                    }
                }

                // Recorded unconditionally, alert or not.
                s.last_reel_count = reels.len();
                s.reels = reels;
                tracing::debug!(session_id = %id, count = s.last_reel_count, manual, "Reel listing updated");
            }
            Err(e) => {
                // Previous listing and count stay as they were.
                tracing::error!(session_id = %id, error = %e, "Failed to list reels");
            }
        }
        s.loading = false;
        s.refreshing = false;
        Ok(())
    }

    /// Snapshot a session for the HTTP layer, resolving public URLs
    /// and formatted display fields.
    pub async fn view(&self, id: SessionId) -> Result<DashboardView, CoreError> {
        let session = self.session(id).await?;
        let s = session.lock().await;

        let reels = s
            .reels
            .iter()
            .map(|entry| ReelView::from_entry(entry, self.store.reel_url(&entry.name)))
            .collect::<Vec<_>>();
        let total_bytes: u64 = s.reels.iter().filter_map(|entry| entry.size_bytes).sum();

        Ok(DashboardView {
            company_name: s.company_name.clone(),
            reel_count: reels.len(),
            reels,
            total_size_display: format_file_size(Some(total_bytes)),
            loading: s.loading,
            refreshing: s.refreshing,
            selected_reel: s.selected_reel.clone(),
            alert: s.alert,
            trigger: s.trigger,
        })
    }

    /// Open a reel in the detail view.
    ///
    /// The name must be in the current filtered listing; the selection
    /// then survives refreshes until it is cleared or replaced.
    pub async fn select_reel(&self, id: SessionId, name: &str) -> Result<(), CoreError> {
        let session = self.session(id).await?;
        let mut s = session.lock().await;

        if !s.reels.iter().any(|entry| entry.name == name) {
            return Err(CoreError::NotFound {
                entity: "ReelEntry",
                id: name.to_string(),
            });
        }
        s.selected_reel = Some(name.to_string());
        Ok(())
    }

    /// Close the detail view. A no-op when nothing is selected.
    pub async fn clear_selection(&self, id: SessionId) -> Result<(), CoreError> {
        let session = self.session(id).await?;
        session.lock().await.selected_reel = None;
        Ok(())
    }

    /// End a session (the screen was left).
    pub async fn close_session(&self, id: SessionId) -> Result<(), CoreError> {
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(_) => {
                tracing::info!(session_id = %id, "Dashboard session closed");
                Ok(())
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// Clear the alert with sequence `seq` after the fixed delay,
    /// unless a newer alert has replaced it in the meantime.
    fn spawn_alert_clear(session: SharedSession, seq: u64) {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(ALERT_CLEAR_SECS)).await;
            let mut s = session.lock().await;
            if s.alert_seq == seq {
                s.alert = None;
            }
        });
    }

    async fn session(&self, id: SessionId) -> Result<SharedSession, CoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn not_found(id: SessionId) -> CoreError {
        CoreError::NotFound {
            entity: "DashboardSession",
            id: id.to_string(),
        }
    }
}

/// Guarded one-shot trigger attempt for a session.
///
/// Claims the guard under the session lock, issues the outbound
/// request with the lock released, then settles the guard. A second
/// invocation finds the guard claimed and returns without any
/// outbound call.
async fn run_trigger(
    trigger: Arc<dyn ProcessingTrigger>,
    session: SharedSession,
    id: SessionId,
) {
    {
        let mut s = session.lock().await;
        if !s.trigger.begin() {
            tracing::debug!(session_id = %id, state = ?s.trigger, "Processing already attempted; skipping");
            return;
        }
    }

    let result = trigger.start().await;

    let mut s = session.lock().await;
    match result {
        Ok(()) => {
            tracing::info!(session_id = %id, "Processing job started");
            s.trigger.settle(true);
        }
        Err(e) => {
            tracing::warn!(session_id = %id, error = %e, "Processing trigger failed");
            s.trigger.settle(false);
        }
    }
}
