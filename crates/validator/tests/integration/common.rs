//! Shared fixtures.

use chrono::{DateTime, TimeZone, Utc};
use fieldcheck_validator::prelude::*;

/// 1 January of `year`, 01:00 UTC.
pub fn jan_first(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 1, 0, 0).unwrap()
}

/// Error keys recorded for a field, in order.
pub fn keys<'a>(errors: &'a ErrorMap, field: &str) -> Vec<&'a str> {
    errors
        .errors_for_field(field)
        .map(|entries| entries.iter().map(ErrorEntry::key).collect())
        .unwrap_or_default()
}

/// Installs a test subscriber so tracing output shows up under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
