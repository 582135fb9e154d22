//! In-memory TTL cache for search responses.
//!
//! Entries are keyed by [`key::cache_key`] and expire lazily: a `get` on an
//! entry older than the TTL removes it and reports a miss. Nothing runs in
//! the background, so expired entries stay in memory until they are read
//! again or [`SearchCache::purge_expired`] is called.
//!
//! Only `get` and `set` are individually atomic. Two callers racing on the
//! same key may both miss and both hit the provider; the last `set` wins.

pub mod clock;
pub mod key;

pub use clock::{Clock, ManualClock, SystemClock};
pub use key::cache_key;

use crate::types::SearchResponse;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default entry lifetime (30 minutes).
pub const DEFAULT_TTL_SECS: i64 = 30 * 60;

/// A cached response and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: SearchResponse,
    pub inserted_at: DateTime<Utc>,
}

/// Process-wide search response cache.
#[derive(Debug)]
pub struct SearchCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SearchCache {
    /// Create an empty cache with the given clock and TTL.
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self { entries: Mutex::new(HashMap::new()), clock, ttl }
    }

    /// Create an empty cache on the system clock with the default TTL.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(SystemClock), Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a response by key.
    ///
    /// Returns a copy of the stored value, or `None` if the key is absent or
    /// its entry has outlived the TTL (in which case the entry is removed).
    pub fn get(&self, key: &str) -> Option<SearchResponse> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let expired = self.is_expired(entries.get(key)?, now);
        if expired {
            entries.remove(key);
            tracing::debug!(key, "evicted expired search cache entry");
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store a response, replacing any previous entry and resetting its age.
    pub fn set(&self, key: impl Into<String>, value: SearchResponse) {
        let entry = CacheEntry { value, inserted_at: self.clock.now() };
        self.lock().insert(key.into(), entry);
    }

    /// Number of entries currently held, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Delete every expired entry.
    ///
    /// Returns the number of deleted entries.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry, now));
        before - entries.len()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn is_expired(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        now - entry.inserted_at > self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
