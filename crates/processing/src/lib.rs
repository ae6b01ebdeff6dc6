//! HTTP client for the external reel-processing backend.
//!
//! The backend owns all video-processing logic; this crate only
//! starts a job (`POST /auto-process`, fire-and-forget) and probes
//! reachability (`HEAD` with a bounded timeout) for the health-check
//! proxy. No retry anywhere: every failure is terminal for that
//! single attempt.

pub mod api;

pub use api::{ProcessingApi, ProcessingApiError};
