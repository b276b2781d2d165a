use std::time::Duration;

use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Seconds with two decimals, e.g. `5.00s`.
#[must_use]
pub fn format_seconds(value: Duration) -> String {
    format!("{:.2}s", value.as_secs_f64())
}

/// Whole minutes and seconds, floor-truncated, e.g. `09:59`.
#[must_use]
pub fn format_clock(value: Duration) -> String {
    let total = value.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes:02}:{seconds:02}")
}
