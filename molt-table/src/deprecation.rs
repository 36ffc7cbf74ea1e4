//! Runtime deprecation notices.
//!
//! Deprecated entry points emit exactly one notice per call through
//! [`notice`]. The notice is a `tracing` warning naming the replacement, and
//! a process-wide counter lets tests assert the one-notice-per-call contract.

use std::sync::atomic::{AtomicU64, Ordering};

static NOTICES: AtomicU64 = AtomicU64::new(0);

/// Emit one deprecation notice pointing callers at the replacement name.
pub fn notice(old: &str, new: &str) {
    NOTICES.fetch_add(1, Ordering::Relaxed);
    tracing::warn!("`{old}` is deprecated; use `{new}` instead");
}

/// Total notices emitted by this process so far.
pub fn notice_count() -> u64 {
    NOTICES.load(Ordering::Relaxed)
}
