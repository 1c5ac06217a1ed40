//! Application layer: the incremental list-loading controller.
//!
//! This layer owns the state machine that decides which remote page to
//! request next, merges fetched pages into one growing list, and detects
//! end-of-data. It sits between the host's event loop and the domain/cache/
//! worker layers.
//!
//! # Architecture
//!
//! Unidirectional data flow:
//!
//! ```text
//! keystrokes/tick → Events → handle_event → ListState → Actions → fetch worker
//!                      ↑                                               ↓
//!                      └──────────── FetchCompleted events ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side-effect commands emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`modes`]: controller phase state machine
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;


pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Phase;
pub use state::ListState;
