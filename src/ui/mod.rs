//! View binding layer.
//!
//! Defines the read-only view model contract between the list controller and
//! whatever renders it. Intentionally thin: no rendering, no styling.

pub mod viewmodel;

pub use viewmodel::{CardViewModel, EmptyState, HeaderInfo, ListViewModel, SearchBarInfo};
