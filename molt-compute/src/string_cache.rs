//! Optional string-interning service for categorical column construction.
//!
//! A [`StringCache`] maps strings to dense `u32` codes. Categorical columns
//! built against the same cache share one code space, which lets consumers
//! skip re-encoding when combining them.
//!
//! The cache is an *injected collaborator*: code that builds arrays may take a
//! `&StringCache`, but the type unifier never consults one. Unification output
//! is declared physical regardless of whether any cache was active while the
//! inputs were built, so correctness never depends on cache state.
//!
//! A process-global instance with an explicit enable/disable lifecycle is
//! provided for callers that want every categorical column in the process to
//! share codes.

use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

#[derive(Default)]
struct CacheInner {
    codes: FxHashMap<String, u32>,
    strings: Vec<String>,
}

/// Interner mapping strings to dense `u32` codes.
///
/// Thread-safe; interning the same string twice returns the same code.
#[derive(Default)]
pub struct StringCache {
    inner: RwLock<CacheInner>,
}

impl StringCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `value`, assigning the next free code if unseen.
    pub fn intern(&self, value: &str) -> u32 {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&code) = inner.codes.get(value) {
            return code;
        }
        let code = inner.strings.len() as u32;
        inner.codes.insert(value.to_string(), code);
        inner.strings.push(value.to_string());
        code
    }

    /// Look up the code for `value` without inserting.
    pub fn code_of(&self, value: &str) -> Option<u32> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .codes
            .get(value)
            .copied()
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .strings
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the code-to-string table, indexed by code.
    pub fn strings(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .strings
            .clone()
    }
}

static GLOBAL: RwLock<Option<Arc<StringCache>>> = RwLock::new(None);

/// Enable the process-global cache, returning a handle to it.
///
/// Idempotent: if a global cache is already active, the existing handle is
/// returned.
pub fn enable_global() -> Arc<StringCache> {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(cache) => Arc::clone(cache),
        None => {
            let cache = Arc::new(StringCache::new());
            *slot = Some(Arc::clone(&cache));
            cache
        }
    }
}

/// Disable the process-global cache. Existing handles remain usable.
pub fn disable_global() {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

/// Handle to the process-global cache, if one is enabled.
pub fn global() -> Option<Arc<StringCache>> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
}
