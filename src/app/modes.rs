//! Controller phase state machine.
//!
//! The list controller moves through four phases per (mode, query) session.
//! `Idle` only exists before the first fetch is issued; after that the
//! controller cycles between `Loading` and `Loaded` as pages are requested
//! and resolve, until the end-of-data condition parks it in `EndOfData`.
//! A mode or query change restarts the cycle from `Loading`, even out of
//! `EndOfData`.

/// Lifecycle phase of the current (mode, query) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial, transient state before the first page is requested.
    Idle,

    /// A fetch for some page in the current window is outstanding.
    ///
    /// Advancing is blocked; concurrent advance requests are no-ops.
    Loading,

    /// Every page in the window (1..=page_count) has cached data.
    ///
    /// The only phase in which advancing is allowed.
    Loaded,

    /// No further pages exist for the current mode/query.
    ///
    /// Terminal within the session: advancing is permanently blocked until a
    /// mode or query change starts a new session.
    EndOfData,
}
