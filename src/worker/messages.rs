//! Fetch worker message types.
//!
//! This module defines the request and response protocol between the list
//! controller and the background fetch worker. Messages are serde-derived so
//! a host embedding several list widgets can move them over whatever IPC
//! boundary it uses; in-process hosts just pass them by value.
//!
//! Responses deliberately echo the (mode, query, page) triple of the request
//! rather than only the opaque key: the controller validates every response
//! against its *current* mode and query, which is what keeps results for
//! abandoned keys from ever being merged after a reset.

use serde::{Deserialize, Serialize};

use crate::domain::{Mode, Page};

/// A request for one page of one mode/query pair.
///
/// The canonical request key is derived inside the worker; the controller
/// only ever names pages by their (mode, page index) coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Request source (browse, or search with its committed query).
    pub mode: Mode,

    /// 1-based page index within the mode/query session.
    pub page: u32,
}

impl FetchRequest {
    /// Creates a request for `page` of `mode`.
    #[must_use]
    pub fn new(mode: Mode, page: u32) -> Self {
        Self { mode, page }
    }
}

/// A fetch outcome delivered back to the controller as an event.
///
/// One request may produce two responses: cached (possibly stale) data
/// immediately, then fresh data once a background revalidation completes.
/// Storing a page at its index is idempotent, so the controller handles both
/// identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// A page's data is available.
    PageResolved {
        /// Request source the page belongs to.
        mode: Mode,
        /// 1-based page index.
        page: u32,
        /// The page body.
        body: Page,
        /// Whether the body came from the cache rather than a fresh fetch.
        from_cache: bool,
    },

    /// A page fetch failed and no cached data could be served.
    PageFailed {
        /// Request source the page belongs to.
        mode: Mode,
        /// 1-based page index.
        page: u32,
        /// Human-readable error message.
        error: String,
    },
}
