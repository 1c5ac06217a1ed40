//! Page cache abstraction.
//!
//! This module defines the [`PageCache`] trait, the keyed fetch-and-cache
//! collaborator the list controller is written against. The trait is minimal
//! and focused on the operations the fetch worker actually needs, not a
//! generic cache API: one lookup that claims fetches, and the two ways an
//! in-flight fetch resolves.

use crate::domain::{Page, RequestKey};

use super::models::CacheLookup;

/// Abstraction over the keyed page cache.
///
/// The cache owns a process-wide key→entry map shared by every list widget.
/// Its contract serializes concurrent interest in the same key: a lookup for
/// a key that is absent or stale claims the key for a fetch, and no further
/// lookup claims it again until the fetch resolves (request deduplication).
/// Stale entries keep serving their data while a revalidation is in flight
/// (stale-while-revalidate).
///
/// # Implementations
///
/// - [`MemoryPageCache`](super::MemoryPageCache): in-memory map (default)
pub trait PageCache: Send {
    /// Looks up a key, serving cached data and claiming a fetch if needed.
    ///
    /// Returns the cached data (fresh or stale), the in-flight flag, and the
    /// last fetch error for the key. When the entry is absent or stale and no
    /// fetch is in flight, the key is claimed and `needs_fetch` is set; the
    /// caller must then perform the fetch and resolve it with
    /// [`complete`](Self::complete) or [`fail`](Self::fail).
    ///
    /// `now` is the current time in epoch seconds.
    fn fetch_keyed(&mut self, key: &RequestKey, now: i64) -> CacheLookup;

    /// Resolves an in-flight fetch with fresh page data.
    ///
    /// Stores the page, stamps it with `now`, and clears any recorded error.
    fn complete(&mut self, key: &RequestKey, page: Page, now: i64);

    /// Resolves an in-flight fetch with an error.
    ///
    /// Records the error but keeps any previously cached data so a stale page
    /// can still be served until a retry succeeds.
    fn fail(&mut self, key: &RequestKey, error: String);
}
