//! Remote catalog wire types.
//!
//! The catalog API returns one page per request as a JSON object of the fixed
//! shape `{ "results": [ ... ] }`. The controller treats items as opaque: it
//! never inspects an item beyond its `id` (used by the view layer for render
//! keys) and a page beyond its item count (used for end-of-data detection).
//! Everything else the remote sends is carried through untouched.

use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// Opaque beyond its identifier: all remaining remote fields are captured in
/// `extra` via serde flattening so the view layer can render them without the
/// controller knowing their shape.
///
/// # Examples
///
/// ```
/// use catalist::domain::Item;
///
/// let item: Item = serde_json::from_str(
///     r#"{ "id": 42, "title": "Batman", "vote_average": 7.1 }"#,
/// ).unwrap();
/// assert_eq!(item.id, 42);
/// assert_eq!(item.extra["title"], "Batman");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier, assumed unique within a (mode, query) session.
    pub id: u64,

    /// All remaining remote fields, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Creates a bare item carrying only an id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            extra: serde_json::Map::new(),
        }
    }
}

/// The raw result of one page fetch.
///
/// An ordered sequence of items. A page with fewer items than the configured
/// page size signals end-of-data; an empty first page means the whole list is
/// empty. Neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Items in remote order. Order is preserved through merging.
    pub results: Vec<Item>,
}

impl Page {
    /// Creates a page from a list of items.
    #[must_use]
    pub fn new(results: Vec<Item>) -> Self {
        Self { results }
    }

    /// Creates an empty page (the end-of-data signal for page 1).
    #[must_use]
    pub fn empty() -> Self {
        Self { results: Vec::new() }
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Decodes a page from the remote JSON payload.
    ///
    /// The wire shape is fixed (`{ "results": [...] }`); nothing beyond the
    /// item count is validated here.
    ///
    /// # Errors
    ///
    /// Returns [`CatalistError::Decode`](crate::domain::CatalistError::Decode)
    /// if the payload does not match the wire shape.
    pub fn from_json(payload: &str) -> crate::domain::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
