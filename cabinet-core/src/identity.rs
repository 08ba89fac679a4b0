//! Identifier generation for new cabinets and projects.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Generate an id from the current time in milliseconds.
///
/// Ids are strictly increasing within a process: a second call in the same
/// millisecond gets the next integer.
pub fn generate_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(previous + 1).to_string()
}
