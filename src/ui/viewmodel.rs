//! View model types representing renderable list state.
//!
//! Immutable projections computed from the controller state. They contain no
//! business logic, only display-ready data: cards for loaded items, a
//! skeleton count while a page is loading, the live search input, and the
//! load-more affordance flags. Rendering itself (cards, grids, styling) is
//! the host's concern; this module only fixes the contract the controller
//! satisfies toward its view.

/// Complete view model for one list widget.
///
/// Computed via `ListState::compute_viewmodel()` and consumed read-only by
/// the renderer. The controller state is never handed to the view directly.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Header information (collection title and item count).
    pub header: HeaderInfo,

    /// Loaded items in page order, one card each.
    pub cards: Vec<CardViewModel>,

    /// Number of placeholder cards to render while a page is loading.
    ///
    /// Equal to the configured page size during loading, zero otherwise, so
    /// the grid keeps its shape while results stream in.
    pub skeleton_count: usize,

    /// Live search bar state.
    pub search_bar: SearchBarInfo,

    /// Whether the "load more" affordance should be enabled.
    pub can_advance: bool,

    /// Whether the list has reached end-of-data for the current mode/query.
    pub end_of_data: bool,

    /// Fetch error to surface, if the latest page failed.
    pub error: Option<String>,

    /// Empty state message, present when a settled query matched nothing.
    pub empty_state: Option<EmptyState>,
}

/// One renderable item card.
///
/// Carries the item's id (the render key) and the untouched remote fields
/// the card template reads from.
#[derive(Debug, Clone)]
pub struct CardViewModel {
    /// Unique item identifier, used as the render key.
    pub id: u64,

    /// Remote item fields, untouched by the controller.
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, e.g. `Browse (40)` or `Results for "bat" (7)`.
    pub title: String,
}

/// Search bar display information.
///
/// `input` echoes every keystroke (the controlled-input contract); the
/// committed query only changes once the debounce settles.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Raw, undebounced input text.
    pub input: String,

    /// The settled query currently driving requests, if in search mode.
    pub committed_query: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No results").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
