//! Error types for the catalist crate.
//!
//! This module defines the centralized error type [`CatalistError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Note that an empty result page is *not* an error: it is the valid
//! end-of-data signal handled by the list controller.

use thiserror::Error;

/// The main error type for catalist operations.
///
/// This enum consolidates all error conditions that can occur while driving
/// the list controller, from remote fetch failures to contract violations in
/// the request key builder.
///
/// # Examples
///
/// ```
/// use catalist::domain::CatalistError;
///
/// fn validate_page(page: u32) -> Result<(), CatalistError> {
///     if page == 0 {
///         return Err(CatalistError::InvalidArgument(
///             "page index must be >= 1".to_string(),
///         ));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum CatalistError {
    /// A remote fetch failed.
    ///
    /// Surfaced per page by the controller: previously loaded pages are kept
    /// intact and advancing stays blocked until the same key is retried.
    #[error("network error: {0}")]
    Network(String),

    /// A programming-contract violation, fatal to the caller.
    ///
    /// Raised by the request key builder for a zero page index or a blank
    /// search query. Never silently ignored.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A page payload could not be decoded from the remote wire shape.
    ///
    /// Wraps errors from `serde_json` using the `#[from]` attribute.
    #[error("malformed page payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Occurs when reading a configuration file fails. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for catalist operations.
///
/// This is a type alias for `std::result::Result<T, CatalistError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CatalistError>;
