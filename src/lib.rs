//! Bookworld: a Zellij plugin for searching the world's books.
//!
//! Bookworld provides:
//! - Free-text search against a Google Books style volumes API
//! - Paginated results with a sliding window of page buttons
//! - An expandable detail panel per book
//! - Query and page kept in a navigable location (back/forward, deep links)
//! - Stale responses discarded, in-flight requests shared, pages cached

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Navigation    │   │ Catalog       │
//! │ (ui/)         │   │ (navigation/) │   │ (catalog/)    │
//! │ - Layout      │   │ - Location    │   │ - Fetchers    │
//! │ - Components  │   │ - Query store │   │ - Payloads    │
//! │ - Frame       │   │ - Selection   │   │ - Staleness   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Pagination & Infrastructure                │
//! │  - Query, book and error types (domain/)            │
//! │  - Page window calculation (pagination/)            │
//! │  - Sandbox paths, query strings (infrastructure/)   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog requests, payload decoding and request tracking
//! - [`domain`]: Queries, books and errors
//! - [`infrastructure`]: Sandbox paths and query-string encoding
//! - [`navigation`]: Location, query state store and detail selection
//! - [`pagination`]: Page window calculation
//! - [`ui`]: Layout of the plugin pane
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/bookworld.wasm" {
//!         api_key "AIza..."
//!         page_size "10"
//!         sibling_count "2"
//!         trace_level "info"
//!         q "dune"
//!         page "1"
//!     }
//! }
//! ```
//!
//! A running instance can be pointed at a query with a pipe message:
//!
//! ```text
//! zellij pipe --name bookworld --args "q=dune,page=3"
//! ```
//!
//! # Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialise tracing,
//!    request permissions.
//! 2. **Permissions granted**: the location is read; a valid query loads its
//!    page, anything else shows the landing view.
//! 3. **Query change** (submit, page keys, back/forward, pipe): the store
//!    publishes the new query, the selection is cleared and the page is
//!    fetched unless cached or already in flight.
//! 4. **Response**: matched to its request through the context map; only the
//!    latest request for a resource updates the view.
//!
//! # Example
//!
//! ```rust
//! use bookworld::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//!
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch { .. }]));
//! # Ok::<(), bookworld::BookworldError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod navigation;
pub mod pagination;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route};
pub use domain::{BookworldError, Result};

use std::collections::BTreeMap;

use navigation::{PAGE_KEY, QUERY_KEY};

/// Default volumes endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_SIBLING_COUNT: u32 = 2;
const DEFAULT_CACHE_PAGES: usize = 32;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sent as `key=` on every request when set.
    pub api_key: Option<String>,

    /// Volumes endpoint. Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Books per page. Default: 10
    pub page_size: u32,

    /// Page buttons shown on each side of the current page. Default: 2
    pub sibling_count: u32,

    /// Result pages (and, separately, detail records) kept in memory.
    /// `0` disables caching. Default: 32
    pub cache_pages: usize,

    /// Filter directive for spans and events.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the trace file. `~` maps to the host home directory.
    pub trace_dir: Option<String>,

    /// Location the plugin starts at (`q` and `page`).
    pub initial_params: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            cache_pages: DEFAULT_CACHE_PAGES,
            trace_level: None,
            trace_dir: None,
            initial_params: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable numbers fall back to their defaults, as does a page size
    /// below 1. Blank strings count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookworld::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("page_size".to_string(), "20".to_string()),
    ///     ("q".to_string(), "dune".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 20);
    /// assert_eq!(config.sibling_count, 2);
    /// assert_eq!(config.initial_params.get("q").map(String::as_str), Some("dune"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|size| *size >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let sibling_count = config
            .get("sibling_count")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_SIBLING_COUNT);

        let cache_pages = config
            .get("cache_pages")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_CACHE_PAGES);

        let initial_params = [QUERY_KEY, PAGE_KEY]
            .into_iter()
            .filter_map(|key| config.get(key).map(|value| (key.to_string(), value.clone())))
            .collect();

        Self {
            api_key: text("api_key"),
            base_url: text("base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            page_size,
            sibling_count,
            cache_pages,
            trace_level: text("trace_level"),
            trace_dir: text("trace_dir"),
            initial_params,
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// The location is not read here; that happens once permissions are
/// resolved (see [`Event::PermissionsResult`]).
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        page_size = config.page_size,
        has_api_key = config.api_key.is_some(),
        "initializing bookworld plugin"
    );

    AppState::new(config)
}
