//! Remote catalog source boundary.
//!
//! The actual HTTP client for the catalog API is the host's concern; the
//! worker only needs a way to ask for one page of one mode/query pair and
//! get back either a decoded [`Page`] or a network error.

use crate::domain::{Mode, Page, Result};

/// Abstraction over the remote catalog API.
///
/// Implementations fetch one page for the given mode and 1-based page index.
/// An empty or short page is a normal result (the end-of-data signal), not an
/// error; implementations should reserve `Err` for transport and decode
/// failures.
pub trait CatalogSource: Send {
    /// Fetches one page from the remote catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalistError::Network`](crate::domain::CatalistError::Network)
    /// for transport failures and
    /// [`CatalistError::Decode`](crate::domain::CatalistError::Decode) for
    /// malformed payloads.
    fn fetch_page(&mut self, mode: &Mode, page: u32) -> Result<Page>;
}
