//! Keyed page cache with request deduplication and stale-while-revalidate.
//!
//! This module provides the fetch-and-cache primitive the list controller
//! collaborates with: given a canonical request key, return cached data
//! immediately if present, claim a background fetch if the entry is absent or
//! stale, and guarantee at most one in-flight fetch per key.
//!
//! # Modules
//!
//! - `backend`: the [`PageCache`] collaborator trait
//! - `memory`: in-memory implementation
//! - `models`: cache record types and the staleness policy

pub mod backend;
pub mod memory;
pub mod models;

pub use backend::PageCache;
pub use memory::MemoryPageCache;
pub use models::{CacheEntry, CacheLookup};
