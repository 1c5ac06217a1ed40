//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge the pure state transitions and the effectful world: the
//! host executes them in order, which for this controller means posting fetch
//! requests to the background worker. Whether the UI should re-render is the
//! boolean channel of the handler's return value, as re-rendering is not a
//! side effect the host can reorder.

use crate::worker::FetchRequest;

/// Commands emitted by the event handler for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a page fetch request to the background worker.
    ///
    /// The worker answers with one or more `FetchResponse`s, which the host
    /// feeds back in as `Event::FetchCompleted`.
    Fetch(FetchRequest),
}
