//! Controller state and view model computation.
//!
//! This module defines [`ListState`], the central state container for one
//! list widget: the current request source, the growing window of fetched
//! pages, and the lifecycle phase. It is the single owner of all list state;
//! the view binding only ever sees computed [`ListViewModel`] projections,
//! and requests changes through events.
//!
//! # Page arena
//!
//! Fetched pages land in a `BTreeMap<u32, Page>` keyed by 1-based page index.
//! Pages may resolve out of order (a cache-warm page 3 can beat a slow page
//! 2); the arena absorbs them at their index and the [`items`](ListState::items)
//! projection walks only the gap-free prefix, so the visible list is always
//! the exact in-order concatenation of pages 1..k regardless of resolution
//! order.
//!
//! # End-of-data
//!
//! Evaluated only once the whole window has resolved, against the highest
//! page of the window: end-of-data holds iff page 1 is empty or the latest
//! page carries fewer items than the configured page size.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::domain::{Item, Mode, Page};
use crate::infrastructure::Debounced;
use crate::ui::viewmodel::{
    CardViewModel, EmptyState, HeaderInfo, ListViewModel, SearchBarInfo,
};

use super::modes::Phase;

/// Central state for one incremental list widget.
///
/// Owns the (mode, query) session, the page window, and the phase machine.
/// Mutated exclusively by the event handler; all reads by the view go through
/// [`compute_viewmodel`](Self::compute_viewmodel) or the projection methods.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Active request source. Changing it (including the query within
    /// `Search`) resets the page window.
    pub mode: Mode,

    /// Raw, undebounced search input, echoed straight back to the view.
    pub search_input: String,

    /// Debounced search input; only settled values reach the mode policy.
    pub debounced_input: Debounced<String>,

    /// How many pages have been requested for the current session (>= 1).
    pub page_count: u32,

    /// Resolved pages, keyed by 1-based index. May temporarily contain gaps
    /// while pages resolve out of order.
    pages: BTreeMap<u32, Page>,

    /// Fetch errors by page index, cleared when the index resolves or on
    /// retry/reset.
    page_errors: BTreeMap<u32, String>,

    /// Lifecycle phase of the current session.
    pub phase: Phase,

    /// Configured page size, used for end-of-data detection and skeletons.
    page_size: usize,
}

impl ListState {
    /// Creates a fresh browse-mode state with an empty page window.
    ///
    /// The state starts in [`Phase::Idle`]; the host issues `Event::Start` to
    /// request the first page.
    #[must_use]
    pub fn new(page_size: usize, debounce_delay: Duration) -> Self {
        Self {
            mode: Mode::Browse,
            search_input: String::new(),
            debounced_input: Debounced::new(String::new(), debounce_delay),
            page_count: 1,
            pages: BTreeMap::new(),
            page_errors: BTreeMap::new(),
            phase: Phase::Idle,
            page_size,
        }
    }

    /// The configured page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Starts a new session for `mode`, discarding the old page window.
    ///
    /// Resets `page_count` to 1 and enters `Loading` — even from
    /// `EndOfData`, since the new key sequence knows nothing about the old
    /// one's end.
    pub fn reset_for(&mut self, mode: Mode) {
        tracing::debug!(
            old_mode = ?self.mode,
            new_mode = ?mode,
            discarded_pages = self.pages.len(),
            "mode/query changed, resetting page window"
        );

        self.mode = mode;
        self.page_count = 1;
        self.pages.clear();
        self.page_errors.clear();
        self.phase = Phase::Loading;
    }

    /// Stores a resolved page at its index and re-derives the phase.
    ///
    /// Storing is idempotent: a revalidated body for an already-present index
    /// simply replaces it. Any recorded error for the index is cleared.
    pub fn store_page(&mut self, page: u32, body: Page) {
        tracing::debug!(page, items = body.len(), "page resolved");
        self.page_errors.remove(&page);
        self.pages.insert(page, body);
        self.recompute_phase();
    }

    /// Records a fetch failure for a page index.
    ///
    /// Previously loaded pages are untouched; advancing stays blocked until
    /// the index is retried.
    pub fn record_failure(&mut self, page: u32, error: String) {
        tracing::debug!(page, error = %error, "page fetch failed");
        self.page_errors.insert(page, error);
    }

    /// Clears recorded errors and returns the window indices still missing
    /// data, for the retry path.
    pub fn take_missing_pages(&mut self) -> Vec<u32> {
        self.page_errors.clear();
        (1..=self.page_count)
            .filter(|index| !self.pages.contains_key(index))
            .collect()
    }

    /// Re-derives the phase from the page window.
    ///
    /// `Loaded` once every index 1..=page_count has data, immediately
    /// upgraded to `EndOfData` when the invariant holds: page 1 empty, or the
    /// latest resolved page shorter than the page size.
    fn recompute_phase(&mut self) {
        let complete = (1..=self.page_count).all(|index| self.pages.contains_key(&index));
        if !complete {
            self.phase = Phase::Loading;
            return;
        }

        let first_empty = self.pages.get(&1).is_some_and(Page::is_empty);
        let latest_short = self
            .pages
            .get(&self.page_count)
            .is_some_and(|page| page.len() < self.page_size);

        self.phase = if first_empty || latest_short {
            tracing::debug!(page_count = self.page_count, "end of data reached");
            Phase::EndOfData
        } else {
            Phase::Loaded
        };
    }

    /// The merged, order-preserving item projection.
    ///
    /// Flattens the gap-free prefix of cached pages in ascending page order,
    /// items within a page in remote order. A page only becomes visible once
    /// every lower-indexed page is also cached; no deduplication is performed
    /// across pages.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        let mut items = Vec::new();
        for index in 1..=self.page_count {
            match self.pages.get(&index) {
                Some(page) => items.extend(page.results.iter().cloned()),
                None => break,
            }
        }
        items
    }

    /// Whether a page request is outstanding and no error is being surfaced.
    ///
    /// A recorded failure pauses the loading presentation: the view should
    /// show the error and its retry affordance instead of skeletons.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading && self.page_errors.is_empty()
    }

    /// Whether the view may request the next page.
    ///
    /// True exactly in `Loaded`: never while loading, never past end-of-data,
    /// and not while a failed page awaits retry.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.phase == Phase::Loaded
    }

    /// Whether the current mode/query has no further pages.
    #[must_use]
    pub fn end_of_data(&self) -> bool {
        self.phase == Phase::EndOfData
    }

    /// The most recently recorded page fetch error, if any.
    #[must_use]
    pub fn latest_error(&self) -> Option<&str> {
        self.page_errors
            .values()
            .next_back()
            .map(String::as_str)
    }

    /// Computes the renderable view model from the current state.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use catalist::app::ListState;
    ///
    /// let state = ListState::new(20, Duration::from_millis(500));
    /// let vm = state.compute_viewmodel();
    /// assert!(vm.cards.is_empty());
    /// assert!(!vm.can_advance);
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListViewModel {
        let items = self.items();

        let title = match &self.mode {
            Mode::Browse => format!("Browse ({})", items.len()),
            Mode::Search(query) => format!("Results for \"{query}\" ({})", items.len()),
        };

        let empty_state = (self.end_of_data() && items.is_empty()).then(|| match &self.mode {
            Mode::Browse => EmptyState {
                message: "Nothing to browse".to_string(),
                subtitle: "The catalog returned no items".to_string(),
            },
            Mode::Search(query) => EmptyState {
                message: format!("No results for \"{query}\""),
                subtitle: "Try a different search".to_string(),
            },
        });

        let cards = items
            .into_iter()
            .map(|item| CardViewModel {
                id: item.id,
                fields: item.extra,
            })
            .collect();

        ListViewModel {
            header: HeaderInfo { title },
            cards,
            skeleton_count: if self.is_loading() { self.page_size } else { 0 },
            search_bar: SearchBarInfo {
                input: self.search_input.clone(),
                committed_query: self.mode.query().map(str::to_string),
            },
            can_advance: self.can_advance(),
            end_of_data: self.end_of_data(),
            error: self.latest_error().map(str::to_string),
            empty_state,
        }
    }

    /// Feeds a raw input edit into the debouncer.
    pub fn touch_input(&mut self, now: Instant) {
        self.debounced_input.update(self.search_input.clone(), now);
    }
}
