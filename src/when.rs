//! Relative time labels for feed rows ("3m ago")

use chrono::{DateTime, Utc};

const SEC: i64 = 1_000;
const MIN: i64 = 60 * SEC;
const HOUR: i64 = 60 * MIN;
const DAY: i64 = 24 * HOUR;
const ABSOLUTE_AFTER: i64 = 30 * DAY;

/// Label for `ts_ms` as seen at `now_ms` (both Unix milliseconds).
/// Future timestamps read "just now"; anything older than 30 days gets a date.
pub fn relative(ts_ms: i64, now_ms: i64) -> String {
    let age = now_ms.saturating_sub(ts_ms);
    if age < SEC {
        "just now".to_string()
    } else if age < MIN {
        format!("{}s ago", age / SEC)
    } else if age < HOUR {
        format!("{}m ago", age / MIN)
    } else if age < DAY {
        format!("{}h ago", age / HOUR)
    } else if age < ABSOLUTE_AFTER {
        format!("{}d ago", age / DAY)
    } else {
        absolute(ts_ms)
    }
}

/// "%Y-%m-%d" in UTC, or the raw number if out of chrono's range
pub fn absolute(ts_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ts_ms.to_string())
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
