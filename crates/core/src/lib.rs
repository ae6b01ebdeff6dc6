//! Domain types and pure logic shared across the GameReel backend.
//!
//! Everything in this crate is side-effect free: reel filtering, the
//! new-content delta used by the dashboard refresh flow, display
//! formatting helpers, and the shared error taxonomy.

pub mod error;
pub mod format;
pub mod reel;
pub mod types;
