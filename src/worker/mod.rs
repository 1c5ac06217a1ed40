//! Background fetch worker for asynchronous page loading.
//!
//! This module implements the worker that performs all remote I/O so the
//! single-threaded controller never blocks: the controller emits
//! [`FetchRequest`]s as actions, the worker consults the shared page cache
//! (and the remote source when the cache claims a fetch), and the outcomes
//! come back to the controller as [`FetchResponse`] events.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol types
//! - `handler`: worker implementation and request processing logic
//! - `source`: the remote catalog API boundary

pub mod handler;
pub mod messages;
pub mod source;

pub use handler::FetchWorker;
pub use messages::{FetchRequest, FetchResponse};
pub use source::CatalogSource;
