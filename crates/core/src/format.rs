//! Display formatting helpers for the dashboard view.
//!
//! Pure and deterministic: sizes in mebibytes with two decimals,
//! timestamps in a fixed en-US short form. The server has no ambient
//! locale, so the format is pinned rather than negotiated.

use crate::types::Timestamp;

/// Token shown when storage reports no usable size.
pub const SIZE_UNAVAILABLE: &str = "N/A";

/// Format a byte count as `"X.XX MB"` (mebibytes, two decimals).
///
/// Absent or zero sizes yield [`SIZE_UNAVAILABLE`].
pub fn format_file_size(bytes: Option<u64>) -> String {
    match bytes {
        None | Some(0) => SIZE_UNAVAILABLE.to_string(),
        Some(bytes) => {
            let mb = bytes as f64 / 1_048_576.0;
            format!("{mb:.2} MB")
        }
    }
}

/// Format a timestamp as a short date/time string, e.g. `"Feb 8, 2026, 21:30"`.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format("%b %-d, %Y, %H:%M").to_string()
}
