//! Request key construction for cache lookup and deduplication.
//!
//! Every page fetch is identified by a canonical [`RequestKey`] derived from
//! (mode, query, page index). The cache uses the key directly for lookup and
//! request deduplication, so the builder must be pure, total, and
//! deterministic: identical inputs always produce the same key, and changing
//! the mode or query always changes the key, even for page 1.
//!
//! The key format mirrors the request paths of the remote catalog API
//! (`catalog/browse?page=N`, `catalog/search?query=Q&page=N`). The page
//! parameter is always the final one, which keeps the mapping from
//! (mode, query, page) to key injective even for queries containing `&` or
//! `=`.

use serde::{Deserialize, Serialize};

use super::error::{CatalistError, Result};
use super::mode::Mode;

/// Canonical identifier of one page fetch.
///
/// Two requests with identical (mode, query, page) map to the same key so the
/// cache can deduplicate them. Keys are cheap to clone and hash, and travel
/// inside worker messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestKey(String);

impl RequestKey {
    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the canonical request key for one page of one mode/query pair.
///
/// Pure and deterministic: no mutable state is consulted, so the cache can
/// rely on the key alone for lookup and deduplication. Page indices are
/// 1-based.
///
/// # Errors
///
/// Returns [`CatalistError::InvalidArgument`] if `page` is zero or if the
/// mode is `Search` with a blank query. Both are programming-contract
/// violations: the mode selection policy commits blank input to `Browse`
/// before any key is built.
///
/// # Examples
///
/// ```
/// use catalist::domain::{build_key, Mode};
///
/// let browse = build_key(&Mode::Browse, 1).unwrap();
/// let search = build_key(&Mode::Search("bat".into()), 1).unwrap();
/// assert_eq!(browse.as_str(), "catalog/browse?page=1");
/// assert_eq!(search.as_str(), "catalog/search?query=bat&page=1");
/// assert_ne!(browse, search);
/// ```
pub fn build_key(mode: &Mode, page: u32) -> Result<RequestKey> {
    if page == 0 {
        return Err(CatalistError::InvalidArgument(
            "page index must be >= 1".to_string(),
        ));
    }

    match mode {
        Mode::Browse => Ok(RequestKey(format!("catalog/browse?page={page}"))),
        Mode::Search(query) => {
            if query.trim().is_empty() {
                return Err(CatalistError::InvalidArgument(
                    "search mode requires a non-blank query".to_string(),
                ));
            }
            Ok(RequestKey(format!("catalog/search?query={query}&page={page}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_build_identical_keys() {
        let mode = Mode::Search("bat".into());
        assert_eq!(build_key(&mode, 3).unwrap(), build_key(&mode, 3).unwrap());
    }

    #[test]
    fn browse_and_search_page_one_differ() {
        let browse = build_key(&Mode::Browse, 1).unwrap();
        let search = build_key(&Mode::Search("bat".into()), 1).unwrap();
        assert_ne!(browse, search);
    }

    #[test]
    fn query_change_changes_the_page_one_key() {
        let a = build_key(&Mode::Search("bat".into()), 1).unwrap();
        let b = build_key(&Mode::Search("batman".into()), 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn page_zero_is_an_invalid_argument() {
        let err = build_key(&Mode::Browse, 0).unwrap_err();
        assert!(matches!(err, CatalistError::InvalidArgument(_)));
    }

    #[test]
    fn blank_search_query_is_an_invalid_argument() {
        let err = build_key(&Mode::Search("  ".into()), 1).unwrap_err();
        assert!(matches!(err, CatalistError::InvalidArgument(_)));
    }

    #[test]
    fn page_index_is_the_final_parameter() {
        // A query containing "&page=" cannot collide with another
        // (query, page) pair because the real page is always last.
        let tricky = build_key(&Mode::Search("a&page=2".into()), 3).unwrap();
        let plain = build_key(&Mode::Search("a".into()), 2).unwrap();
        assert_ne!(tricky, plain);
        assert!(tricky.as_str().ends_with("&page=3"));
    }
}
