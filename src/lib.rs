//! Catalist: an incremental list-loading controller for paginated,
//! searchable remote catalogs.
//!
//! Catalist turns "infinite scroll over a remote search API" into a small,
//! deterministic state machine:
//! - One growing, gap-free list merged from numbered remote pages
//! - Debounced search input, so queries are issued only after typing settles
//! - Keyed page caching with stale-while-revalidate and request
//!   deduplication
//! - End-of-data detection from page shape (a short or empty page)
//! - A renderable view model, so hosts bind any view technology to it
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host event loop (keystrokes, ticks, worker bridge) │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and phase transitions             │
//! │  - Page window merging, end-of-data detection       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Cache Layer   │   │ Worker Layer  │
//! │ (ui/)         │   │ (cache/)      │   │ (worker/)     │
//! │ - View models │   │ - Keyed pages │   │ - Fetch loop  │
//! │               │   │ - Staleness   │   │ - Msg codec   │
//! │               │   │ - Dedup       │   │ - Source trait│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Debounced input (infrastructure/)                │
//! │  - Request keys, modes, wire types, errors (domain/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: controller state machine with event/action model
//! - [`domain`]: request keys, modes, page wire types, errors
//! - [`infrastructure`]: the debounced value emitter
//! - [`cache`]: keyed page cache with staleness and in-flight tracking
//! - [`worker`]: background fetch handling and its message protocol
//! - [`ui`]: computed view models for the list binding
//! - [`observability`]: tracing subscriber setup
//!
//! # Execution model
//!
//! Everything is single-threaded and event-driven. The controller never
//! spawns threads, starts timers, or performs I/O: the host's event loop
//! feeds it [`Event`]s carrying an explicit clock reading, and executes the
//! [`Action`]s it returns by posting [`worker::FetchRequest`]s to a
//! [`worker::FetchWorker`] (on whatever thread or task the host prefers).
//! Fetch outcomes come back as `Event::FetchCompleted`.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Instant;
//! use catalist::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (render, actions) = handle_event(&mut state, &Event::Start, Instant::now())?;
//! assert!(render);
//! assert_eq!(actions.len(), 1); // fetch request for page 1
//!
//! for action in actions {
//!     let Action::Fetch(request) = action;
//!     // post `request` to the fetch worker...
//! }
//! # Ok::<(), catalist::CatalistError>(())
//! ```

pub mod app;
pub mod cache;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ListState, Phase};
pub use domain::{build_key, CatalistError, Item, Mode, Page, RequestKey, Result};
pub use ui::viewmodel::ListViewModel;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Controller configuration.
///
/// Hosts embed the controller with a fixed configuration established at
/// startup, from a TOML file ([`Config::from_file`]), a host-provided string
/// map ([`Config::from_map`]), or [`Config::default`].
///
/// # Example
///
/// ```toml
/// # catalist.toml
/// page_size = 20
/// debounce_ms = 500
/// stale_after_secs = 300
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Items per remote page.
    ///
    /// Must match what the catalog actually returns: end-of-data is detected
    /// by comparing page length against this. Default: 20
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Milliseconds the search input must stay unchanged before a query is
    /// committed. Default: 500
    #[serde(default = "defaults::debounce_ms")]
    pub debounce_ms: u64,

    /// Seconds after which a cached page is considered stale and served with
    /// a background revalidation. Default: 300
    #[serde(default = "defaults::stale_after_secs")]
    pub stale_after_secs: i64,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    #[serde(default)]
    pub trace_level: Option<String>,
}

mod defaults {
    pub fn page_size() -> usize {
        20
    }

    pub fn debounce_ms() -> u64 {
        500
    }

    pub fn stale_after_secs() -> i64 {
        300
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            debounce_ms: defaults::debounce_ms(),
            stale_after_secs: defaults::stale_after_secs(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Extracts and parses typed values with fallback defaults; unknown keys
    /// and unparseable values are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use catalist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "30".to_string());
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 30);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.stale_after_secs, 300);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or_else(defaults::page_size);

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(defaults::debounce_ms);

        let stale_after_secs = config
            .get("stale_after_secs")
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or_else(defaults::stale_after_secs);

        Self {
            page_size,
            debounce_ms,
            stale_after_secs,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalistError::Io`] if the file cannot be read, and
    /// [`CatalistError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| CatalistError::Config(e.to_string()))
    }

    /// The debounce delay as a [`Duration`].
    #[must_use]
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Initializes the controller with configuration.
///
/// Installs the tracing subscriber when `trace_level` is set, then creates
/// a fresh browse-mode [`ListState`]. The host issues [`Event::Start`] to
/// request the first page.
///
/// # Example
///
/// ```rust
/// use catalist::{initialize, Config, Phase};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.phase, Phase::Idle);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> ListState {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }

    tracing::debug!(
        page_size = config.page_size,
        debounce_ms = config.debounce_ms,
        stale_after_secs = config.stale_after_secs,
        "initializing list controller"
    );

    ListState::new(config.page_size, config.debounce_delay())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_matches_the_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.stale_after_secs, 300);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_map_ignores_unparseable_values() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "lots".to_string());
        map.insert("debounce_ms".to_string(), "0".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_ms, 0, "zero delay is allowed");
    }

    #[test]
    fn from_map_rejects_a_zero_page_size() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "0".to_string());
        assert_eq!(Config::from_map(&map).page_size, 20);
    }

    #[test]
    fn from_file_reads_a_partial_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 10").unwrap();
        writeln!(file, "trace_level = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_file_surfaces_malformed_toml_as_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = \"many\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalistError::Config(_)));
    }

    #[test]
    fn from_file_propagates_a_missing_file_as_io() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalistError::Io(_)));
    }

    #[test]
    fn initialize_respects_the_configured_page_size() {
        let config = Config {
            page_size: 7,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.page_size(), 7);
        assert_eq!(state.phase, Phase::Idle);
    }
}
