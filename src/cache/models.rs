//! Cache record types and the staleness policy.
//!
//! These types are the cache-layer representation of fetched pages, separate
//! from the controller's state to keep a clear boundary between the keyed
//! fetch-and-cache primitive and the list-loading logic built on top of it.
//!
//! Timestamps are epoch seconds passed in explicitly by the caller, keeping
//! staleness decisions deterministic under test.

use serde::{Deserialize, Serialize};

use crate::domain::Page;

/// One cached page slot, keyed by request key in the cache map.
///
/// A slot may hold data, a fetch error, both (stale data kept through a
/// failed revalidation), or neither (first fetch still in flight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached page, if any fetch has ever succeeded for this key.
    pub page: Option<Page>,

    /// Epoch seconds of the most recent successful fetch.
    pub fetched_at: Option<i64>,

    /// Error message from the most recent failed fetch, cleared on success.
    pub error: Option<String>,
}

impl CacheEntry {
    /// An empty slot for a key whose first fetch was just claimed.
    #[must_use]
    pub fn vacant() -> Self {
        Self {
            page: None,
            fetched_at: None,
            error: None,
        }
    }

    /// Whether the entry's data is older than the freshness window.
    ///
    /// An entry with no data is always stale. `now` and `stale_after` are in
    /// seconds, matching the configuration's `stale_after_secs`.
    #[must_use]
    pub fn is_stale(&self, now: i64, stale_after: i64) -> bool {
        self.fetched_at
            .map_or(true, |fetched_at| now - fetched_at >= stale_after)
    }
}

/// The result of one keyed cache lookup.
///
/// This is the shape the list controller's collaborator contract is written
/// against: cached data (possibly stale) served immediately, an in-flight
/// flag, and the last fetch error for the key. `needs_fetch` additionally
/// tells the fetch worker whether this lookup claimed the key for a new
/// background fetch; at most one lookup claims any given key until the fetch
/// resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheLookup {
    /// Cached page data, if present. May be stale; stale data is served while
    /// a revalidation fetch runs in the background.
    pub data: Option<Page>,

    /// Whether a fetch for this key is in flight (including one claimed by
    /// this very lookup).
    pub is_loading: bool,

    /// Error from the most recent failed fetch for this key, if any.
    pub error: Option<String>,

    /// Whether this lookup claimed the key: the caller must now perform the
    /// fetch and resolve it via `complete` or `fail`.
    pub needs_fetch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Page};

    #[test]
    fn vacant_entries_are_always_stale() {
        assert!(CacheEntry::vacant().is_stale(0, 60));
    }

    #[test]
    fn freshness_window_is_inclusive_of_its_edge() {
        let entry = CacheEntry {
            page: Some(Page::new(vec![Item::new(1)])),
            fetched_at: Some(100),
            error: None,
        };
        assert!(!entry.is_stale(159, 60));
        assert!(entry.is_stale(160, 60));
    }
}
