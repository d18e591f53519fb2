//! Utility functions used across the igraph workspace

use chrono::TimeDelta;

use crate::Timestamp;

/// Total elapsed seconds of a duration as a float, sign preserved.
///
/// Millisecond precision is kept so sub-second durations survive unit
/// conversion.
pub fn total_seconds(duration: &TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}

/// Format a timestamp for display and log output
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
