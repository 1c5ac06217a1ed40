//! Infrastructure layer for generic, domain-independent primitives.
//!
//! Currently hosts the debounced value emitter used to settle rapidly
//! changing search input before it reaches the mode selection policy.

pub mod debounce;

pub use debounce::Debounced;
