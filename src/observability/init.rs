//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to a formatted
//! subscriber. The library emits spans and events unconditionally; whether
//! anything is recorded is the host's choice, made by calling
//! [`init_tracing`] (or installing its own subscriber instead).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes a formatted tracing subscriber for the whole process.
///
/// # Trace Level Resolution
///
/// 1. The `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Silently does nothing if another subscriber is already installed
/// (observability is optional, hosts may bring their own).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
