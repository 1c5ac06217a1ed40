//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, the
//! periodic tick, and fetch worker responses, translating them into state
//! changes and fetch actions. It is the only place controller state is
//! mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the host's event loop or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ListState` methods
//! 4. Fetch actions are collected and returned for execution
//!
//! Every call takes the current [`Instant`] explicitly, so debounce timing is
//! deterministic and the handler itself never consults a clock.
//!
//! # Stale responses
//!
//! In-flight requests for an abandoned (mode, query) are not canceled; their
//! results arrive here eventually and are dropped unless their mode/query
//! *and* page index still belong to the active window. Key-addressed caching
//! makes the dropped results harmless — they warmed the cache for keys no
//! longer on the active path.

use std::time::Instant;

use crate::domain::{Mode, Result};
use crate::worker::{FetchRequest, FetchResponse};

use super::actions::Action;
use super::modes::Phase;
use super::state::ListState;

/// Events processed by the list controller.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and fetch actions. The handler processes them sequentially, ensuring
/// deterministic transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Requests the initial page. Issued once by the host after setup.
    Start,

    /// Appends a character to the search input.
    Char(char),

    /// Removes the last character from the search input.
    Backspace,

    /// Clears the search input entirely.
    ClearSearch,

    /// Periodic tick; polls the debouncer and commits settled input.
    Tick,

    /// The view requests the next page ("load more" / scroll threshold).
    ///
    /// A strict no-op unless the controller is `Loaded`: double-clicks and
    /// scroll storms while a page is in flight are absorbed here.
    Advance,

    /// Re-requests every window page that failed or never resolved.
    Retry,

    /// A fetch outcome arrived from the background worker.
    FetchCompleted(FetchResponse),
}

/// Processes an event, mutates controller state, and returns what to do next.
///
/// Returns `(needs_render, actions)`: whether the view model changed, and the
/// fetch requests the host must post to the worker.
///
/// # Errors
///
/// Infallible today; the `Result` return keeps the signature stable for
/// hosts that wrap fallible side effects around it.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use catalist::app::{handle_event, Action, Event, ListState};
///
/// let mut state = ListState::new(20, std::time::Duration::from_millis(500));
/// let (render, actions) = handle_event(&mut state, &Event::Start, Instant::now()).unwrap();
/// assert!(render);
/// assert_eq!(actions.len(), 1); // fetch for page 1
/// ```
pub fn handle_event(
    state: &mut ListState,
    event: &Event,
    now: Instant,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            if state.phase != Phase::Idle {
                tracing::debug!("already started, ignoring");
                return Ok((false, vec![]));
            }
            state.phase = Phase::Loading;
            let request = FetchRequest::new(state.mode.clone(), 1);
            Ok((true, vec![Action::Fetch(request)]))
        }

        Event::Char(c) => {
            state.search_input.push(*c);
            state.touch_input(now);
            tracing::trace!(input = %state.search_input, "search input updated");
            Ok((true, vec![]))
        }

        Event::Backspace => {
            if state.search_input.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.touch_input(now);
            Ok((true, vec![]))
        }

        Event::ClearSearch => {
            if state.search_input.is_empty() {
                return Ok((false, vec![]));
            }
            state.search_input.clear();
            state.touch_input(now);
            Ok((true, vec![]))
        }

        Event::Tick => {
            let Some(settled) = state.debounced_input.poll(now) else {
                return Ok((false, vec![]));
            };

            let new_mode = Mode::from_input(&settled);
            if new_mode == state.mode {
                tracing::debug!(?new_mode, "settled input maps to the current mode, no reset");
                return Ok((false, vec![]));
            }

            state.reset_for(new_mode);
            let request = FetchRequest::new(state.mode.clone(), 1);
            Ok((true, vec![Action::Fetch(request)]))
        }

        Event::Advance => {
            if !state.can_advance() {
                tracing::debug!(phase = ?state.phase, "advance ignored");
                return Ok((false, vec![]));
            }

            state.page_count += 1;
            state.phase = Phase::Loading;
            tracing::debug!(page_count = state.page_count, "advancing to next page");

            let request = FetchRequest::new(state.mode.clone(), state.page_count);
            Ok((true, vec![Action::Fetch(request)]))
        }

        Event::Retry => {
            let missing = state.take_missing_pages();
            if missing.is_empty() {
                return Ok((false, vec![]));
            }

            state.phase = Phase::Loading;
            tracing::debug!(pages = ?missing, "retrying unresolved pages");

            let actions = missing
                .into_iter()
                .map(|page| Action::Fetch(FetchRequest::new(state.mode.clone(), page)))
                .collect();
            Ok((true, actions))
        }

        Event::FetchCompleted(response) => match response {
            FetchResponse::PageResolved { mode, page, body, from_cache } => {
                if *mode != state.mode {
                    tracing::debug!(?mode, "dropping result for an abandoned mode/query");
                    return Ok((false, vec![]));
                }
                if *page == 0 || *page > state.page_count {
                    tracing::debug!(page, "dropping result outside the active window");
                    return Ok((false, vec![]));
                }

                tracing::debug!(page, from_cache, "merging resolved page");
                state.store_page(*page, body.clone());
                Ok((true, vec![]))
            }

            FetchResponse::PageFailed { mode, page, error } => {
                if *mode != state.mode || *page == 0 || *page > state.page_count {
                    tracing::debug!(?mode, page, "dropping failure for an abandoned request");
                    return Ok((false, vec![]));
                }

                state.record_failure(*page, error.clone());
                Ok((true, vec![]))
            }
        },
    }
}
