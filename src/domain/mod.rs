//! Domain layer for the catalist crate.
//!
//! This module contains the core domain types for incremental list loading,
//! independent of the application state machine and infrastructure concerns:
//! the request source [`Mode`], the remote wire types [`Item`] and [`Page`],
//! the canonical [`RequestKey`] with its builder, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`mode`]: Browse/search mode and the mode selection policy
//! - [`page`]: Remote catalog wire types
//! - [`key`]: Request key construction for cache lookup and deduplication

pub mod error;
pub mod key;
pub mod mode;
pub mod page;

pub use error::{CatalistError, Result};
pub use key::{build_key, RequestKey};
pub use mode::Mode;
pub use page::{Item, Page};
