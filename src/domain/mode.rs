//! Request source mode and the mode selection policy.
//!
//! The list is fed from one of two remote request sources: the default browse
//! collection, or search results for a committed query. Which one is active
//! is decided by a single policy evaluated once per settled debounce value:
//! blank input means browse, anything else means search with the trimmed
//! text.

use serde::{Deserialize, Serialize};

/// Which remote request source feeds the list.
///
/// `Browse` carries no extra state; `Search` carries the committed query
/// string. A mode change (including a query change within `Search`) resets
/// the controller's page sequence back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Browsing the default catalog collection.
    Browse,

    /// Showing search results for the committed (debounced, trimmed) query.
    ///
    /// The query is guaranteed non-blank by [`Mode::from_input`]; the request
    /// key builder enforces this as a hard contract.
    Search(String),
}

impl Mode {
    /// Applies the mode selection policy to a settled search input.
    ///
    /// Empty or whitespace-only input selects `Browse`; anything else selects
    /// `Search` with the trimmed text. Evaluated once per debounced-value
    /// change, never against raw keystrokes.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::domain::Mode;
    ///
    /// assert_eq!(Mode::from_input(""), Mode::Browse);
    /// assert_eq!(Mode::from_input("   "), Mode::Browse);
    /// assert_eq!(Mode::from_input("  bat "), Mode::Search("bat".to_string()));
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self::Browse
        } else {
            Self::Search(trimmed.to_string())
        }
    }

    /// The committed query, if this is a search mode.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Browse => None,
            Self::Search(query) => Some(query),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Browse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_forces_browse() {
        assert_eq!(Mode::from_input(""), Mode::Browse);
        assert_eq!(Mode::from_input(" \t "), Mode::Browse);
    }

    #[test]
    fn nonblank_input_is_trimmed_search() {
        assert_eq!(Mode::from_input(" bat\n"), Mode::Search("bat".into()));
    }

    #[test]
    fn query_accessor_matches_mode() {
        assert_eq!(Mode::Browse.query(), None);
        assert_eq!(Mode::Search("x".into()).query(), Some("x"));
    }
}
