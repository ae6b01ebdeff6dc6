//! Per-session dashboard state and flows.
//!
//! A dashboard session spans one screen lifetime: it is opened by the
//! landing hand-off, holds the filtered reel listing plus refresh
//! bookkeeping in memory, and dies with the screen. The two outbound
//! flows (reel listing and the one-shot processing trigger) run
//! independently and may be in flight concurrently.

pub mod service;
pub mod session;
pub mod store;
pub mod trigger;

pub use service::{DashboardService, ALERT_CLEAR_SECS};
pub use session::{DashboardSession, DashboardView, NewContentAlert, ReelView};
pub use store::{ProcessingTrigger, ReelStore};
pub use trigger::TriggerState;
