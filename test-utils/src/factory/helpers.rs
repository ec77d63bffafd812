//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to generate unique default values (emails, names) so that
/// multiple entities created in one test don't collide on unique columns.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
