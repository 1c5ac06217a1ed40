//! In-memory page cache.
//!
//! The default [`PageCache`] backend: a plain key→entry map plus an in-flight
//! set. The whole dataset lives in memory; there is no persistence (offline
//! storage is explicitly out of scope for this crate).
//!
//! # Thread Safety
//!
//! This type is `Send` but not `Sync`. It is designed to sit behind a single
//! fetch worker, which serializes all access — the same single-writer layout
//! the rest of the crate assumes.

use std::collections::{HashMap, HashSet};

use crate::domain::{Page, RequestKey};

use super::backend::PageCache;
use super::models::{CacheEntry, CacheLookup};

/// In-memory page cache with request deduplication.
///
/// # Examples
///
/// ```
/// use catalist::cache::{MemoryPageCache, PageCache};
/// use catalist::domain::{build_key, Mode, Page};
///
/// let mut cache = MemoryPageCache::new(60);
/// let key = build_key(&Mode::Browse, 1).unwrap();
///
/// let first = cache.fetch_keyed(&key, 0);
/// assert!(first.needs_fetch);
///
/// cache.complete(&key, Page::empty(), 0);
/// let second = cache.fetch_keyed(&key, 30);
/// assert!(second.data.is_some());
/// assert!(!second.needs_fetch);
/// ```
pub struct MemoryPageCache {
    /// Cached page slots, keyed by request key.
    entries: HashMap<RequestKey, CacheEntry>,

    /// Keys with a fetch currently in flight. At most one fetch per key.
    in_flight: HashSet<RequestKey>,

    /// Freshness window in seconds; older entries revalidate on lookup.
    stale_after: i64,
}

impl MemoryPageCache {
    /// Creates a cache whose entries stay fresh for `stale_after` seconds.
    #[must_use]
    pub fn new(stale_after: i64) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            stale_after,
        }
    }

    /// Number of keys with cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PageCache for MemoryPageCache {
    fn fetch_keyed(&mut self, key: &RequestKey, now: i64) -> CacheLookup {
        let entry = self.entries.entry(key.clone()).or_insert_with(CacheEntry::vacant);

        let already_in_flight = self.in_flight.contains(key);
        let needs_fetch = !already_in_flight && entry.is_stale(now, self.stale_after);

        if needs_fetch {
            self.in_flight.insert(key.clone());
        }

        tracing::debug!(
            key = %key,
            has_data = entry.page.is_some(),
            in_flight = already_in_flight,
            claimed = needs_fetch,
            "cache lookup"
        );

        CacheLookup {
            data: entry.page.clone(),
            is_loading: already_in_flight || needs_fetch,
            error: entry.error.clone(),
            needs_fetch,
        }
    }

    fn complete(&mut self, key: &RequestKey, page: Page, now: i64) {
        let entry = self.entries.entry(key.clone()).or_insert_with(CacheEntry::vacant);
        entry.page = Some(page);
        entry.fetched_at = Some(now);
        entry.error = None;
        self.in_flight.remove(key);

        tracing::debug!(key = %key, fetched_at = now, "cache entry refreshed");
    }

    fn fail(&mut self, key: &RequestKey, error: String) {
        let entry = self.entries.entry(key.clone()).or_insert_with(CacheEntry::vacant);
        entry.error = Some(error);
        self.in_flight.remove(key);

        tracing::debug!(key = %key, "cache fetch failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_key, Item, Mode};

    fn key(page: u32) -> RequestKey {
        build_key(&Mode::Browse, page).unwrap()
    }

    #[test]
    fn first_lookup_claims_the_fetch() {
        let mut cache = MemoryPageCache::new(60);
        let lookup = cache.fetch_keyed(&key(1), 0);
        assert!(lookup.needs_fetch);
        assert!(lookup.is_loading);
        assert!(lookup.data.is_none());
    }

    #[test]
    fn in_flight_keys_are_never_claimed_twice() {
        let mut cache = MemoryPageCache::new(60);
        assert!(cache.fetch_keyed(&key(1), 0).needs_fetch);

        let second = cache.fetch_keyed(&key(1), 0);
        assert!(!second.needs_fetch);
        assert!(second.is_loading);
    }

    #[test]
    fn fresh_entries_are_served_without_a_fetch() {
        let mut cache = MemoryPageCache::new(60);
        cache.fetch_keyed(&key(1), 0);
        cache.complete(&key(1), Page::new(vec![Item::new(1)]), 0);

        let lookup = cache.fetch_keyed(&key(1), 30);
        assert!(!lookup.needs_fetch);
        assert!(!lookup.is_loading);
        assert_eq!(lookup.data.unwrap().len(), 1);
    }

    #[test]
    fn stale_entries_serve_data_and_claim_a_revalidation() {
        let mut cache = MemoryPageCache::new(60);
        cache.fetch_keyed(&key(1), 0);
        cache.complete(&key(1), Page::new(vec![Item::new(1)]), 0);

        let lookup = cache.fetch_keyed(&key(1), 120);
        assert!(lookup.needs_fetch);
        assert!(lookup.is_loading);
        assert_eq!(lookup.data.unwrap().len(), 1, "stale data still served");
    }

    #[test]
    fn failure_keeps_previous_data_for_stale_serving() {
        let mut cache = MemoryPageCache::new(60);
        cache.fetch_keyed(&key(1), 0);
        cache.complete(&key(1), Page::new(vec![Item::new(1)]), 0);

        cache.fetch_keyed(&key(1), 120);
        cache.fail(&key(1), "connection reset".to_string());

        let lookup = cache.fetch_keyed(&key(1), 121);
        assert_eq!(lookup.error.as_deref(), Some("connection reset"));
        assert!(lookup.data.is_some());
        assert!(lookup.needs_fetch, "retry re-claims the same key");
    }

    #[test]
    fn distinct_keys_do_not_share_entries() {
        let mut cache = MemoryPageCache::new(60);
        cache.fetch_keyed(&key(1), 0);
        cache.complete(&key(1), Page::new(vec![Item::new(1)]), 0);

        let other = cache.fetch_keyed(&key(2), 0);
        assert!(other.data.is_none());
        assert!(other.needs_fetch);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn completion_clears_a_recorded_error() {
        let mut cache = MemoryPageCache::new(60);
        cache.fetch_keyed(&key(1), 0);
        cache.fail(&key(1), "timeout".to_string());

        cache.fetch_keyed(&key(1), 1);
        cache.complete(&key(1), Page::empty(), 1);

        let lookup = cache.fetch_keyed(&key(1), 2);
        assert!(lookup.error.is_none());
        assert!(lookup.data.is_some());
    }
}
