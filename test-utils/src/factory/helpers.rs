//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique values across factories.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
