//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owned state container for the
//! plugin. The event handler receives it by `&mut`; nothing else holds it.
//!
//! # State Components
//!
//! - **Store**: the current query, mirrored into the location
//! - **Selection**: the expanded book, cleared on every query change
//! - **Results / Details**: fetch status for the current page and the open book
//! - **Trackers**: in-flight deduplication, response cache and staleness checks
//! - **Cursor**: highlighted row within the current page
//! - **Input**: search box text and input mode

use super::actions::Action;
use super::modes::{DetailsStatus, InputMode, ResultsStatus, Route};
use crate::catalog::{
    CatalogEndpoint, CatalogRequest, Completion, DetailFetcher, FetchPlan, Lookup,
    RequestContext, RequestTracker, ResultFetcher,
};
use crate::domain::{BookDetails, BookSummary, RequestKey, ResultPage, SearchQuery};
use crate::navigation::{DetailSelector, Navigation, QueryParams, QueryStateStore};
use crate::pagination::{compute_window, PageWindow};
use crate::Config;

const WEB_ACCESS_DENIED: &str = "web access permission denied";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Landing or search view, derived from the last navigation.
    pub route: Route,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text in the search box. Submitting it publishes a new query.
    pub input: String,

    /// Owner of the current query and the location history.
    pub store: QueryStateStore<QueryParams>,

    /// The expanded book, if any.
    pub selection: DetailSelector,

    /// Result page for the current query.
    pub results: ResultsStatus,

    /// Detail panel for the selected book.
    pub details: DetailsStatus,

    /// Zero-based highlighted row within the current page.
    pub cursor: usize,

    /// Page numbers shown on each side of the current page.
    pub sibling_count: u32,

    /// Set when the user refused web access. No request is sent afterwards.
    pub permission_denied: bool,

    /// Result page requests keyed by `(text, page)`.
    pub pages: RequestTracker<RequestKey, ResultPage>,

    /// Detail requests keyed by volume id.
    pub volumes: RequestTracker<String, BookDetails>,

    result_fetcher: ResultFetcher,
    detail_fetcher: DetailFetcher,
}

impl AppState {
    /// Creates the state for `config` without reading the location.
    ///
    /// The location is parsed once permissions are granted, since the first
    /// result page needs web access.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let endpoint = CatalogEndpoint::new(config.base_url.clone(), config.api_key.clone());
        Self {
            route: Route::Landing,
            input_mode: InputMode::Typing,
            input: String::new(),
            store: QueryStateStore::new(QueryParams::from_params(config.initial_params.clone())),
            selection: DetailSelector::new(),
            results: ResultsStatus::Idle,
            details: DetailsStatus::Closed,
            cursor: 0,
            sibling_count: config.sibling_count,
            permission_denied: false,
            pages: RequestTracker::new(config.cache_pages),
            volumes: RequestTracker::new(config.cache_pages),
            result_fetcher: ResultFetcher::new(endpoint.clone(), config.page_size),
            detail_fetcher: DetailFetcher::new(endpoint),
        }
    }

    /// The query in effect, if any.
    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.store.query()
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.result_fetcher.page_size()
    }

    /// The loaded result page, if any.
    #[must_use]
    pub const fn page(&self) -> Option<&ResultPage> {
        match &self.results {
            ResultsStatus::Ready(page) => Some(page),
            _ => None,
        }
    }

    /// Page window for the loaded result page.
    #[must_use]
    pub fn window(&self) -> Option<PageWindow> {
        let query = self.query()?;
        let page = self.page()?;
        Some(compute_window(
            page.total_items,
            self.page_size(),
            query.page,
            self.sibling_count,
        ))
    }

    /// The book under the cursor.
    #[must_use]
    pub fn highlighted_book(&self) -> Option<&BookSummary> {
        self.page().and_then(|page| page.items.get(self.cursor))
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let len = self.page().map_or(0, |page| page.items.len());
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.page().map_or(0, |page| page.items.len());
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Applies the outcome of parsing the location.
    ///
    /// Returns whether the view changed and the requests to send.
    pub fn apply_navigation(&mut self, navigation: Navigation) -> (bool, Vec<Action>) {
        match navigation {
            Navigation::Unchanged => (false, vec![]),
            Navigation::Changed(query) => (true, self.load_results(&query)),
            Navigation::RedirectToLanding => {
                self.show_landing();
                (true, vec![])
            }
        }
    }

    /// Requests the result page for `query`.
    ///
    /// Blank text resolves to [`ResultsStatus::NoQuery`] without a request. A
    /// cached page is shown immediately; an identical in-flight request is
    /// awaited rather than sent again.
    pub(crate) fn load_results(&mut self, query: &SearchQuery) -> Vec<Action> {
        let _span = tracing::debug_span!("load_results", query = %query.key()).entered();

        self.route = Route::Search;
        self.cursor = 0;
        self.sync_details();

        let request = match self.result_fetcher.plan(query) {
            FetchPlan::NoQuery => {
                tracing::debug!("empty query, nothing to fetch");
                self.pages.reset_latest();
                self.results = ResultsStatus::NoQuery;
                return vec![];
            }
            FetchPlan::Request(request) => request,
        };

        if self.permission_denied {
            tracing::debug!("web access denied, not requesting results");
            self.results = ResultsStatus::Failed(WEB_ACCESS_DENIED.to_string());
            return vec![];
        }

        match self.pages.request(query.key()) {
            Lookup::Cached(page) => {
                tracing::debug!(items = page.items.len(), "serving cached page");
                self.results = ResultsStatus::Ready(page);
                vec![]
            }
            Lookup::InFlight => {
                tracing::debug!("identical request in flight, waiting");
                self.results = ResultsStatus::Loading;
                vec![]
            }
            Lookup::Dispatch => {
                self.results = ResultsStatus::Loading;
                Self::dispatch(request)
            }
        }
    }

    /// Records a result page response.
    ///
    /// Responses for anything but the most recently requested key are
    /// discarded. Returns whether the view changed.
    pub fn receive_results(&mut self, key: &RequestKey, status: u16, body: &[u8]) -> bool {
        let result = ResultFetcher::parse(status, body);

        match self.pages.complete(key, result) {
            Completion::Stale => {
                tracing::debug!(key = %key, "discarding stale result page");
                false
            }
            Completion::Current(Ok(page)) => {
                tracing::debug!(
                    key = %key,
                    items = page.items.len(),
                    total_items = page.total_items,
                    "result page received"
                );
                self.cursor = 0;
                self.results = ResultsStatus::Ready(page);
                true
            }
            Completion::Current(Err(error)) => {
                tracing::warn!(key = %key, error = %error, "result page fetch failed");
                self.results = ResultsStatus::Failed(error.to_string());
                true
            }
        }
    }

    /// Expands the book under the cursor and requests its details.
    pub fn open_details(&mut self) -> Vec<Action> {
        let Some(id) = self.highlighted_book().map(|book| book.id.clone()) else {
            tracing::debug!("no book highlighted");
            return vec![];
        };
        if self.selection.is_selected(&id) {
            return vec![];
        }

        let _span = tracing::debug_span!("open_details", id = %id).entered();
        self.selection.select(id.clone());

        if self.permission_denied {
            self.details = DetailsStatus::Failed(WEB_ACCESS_DENIED.to_string());
            return vec![];
        }

        match self.volumes.request(id.clone()) {
            Lookup::Cached(details) => {
                self.details = DetailsStatus::Ready(details);
                vec![]
            }
            Lookup::InFlight => {
                self.details = DetailsStatus::Loading;
                vec![]
            }
            Lookup::Dispatch => {
                self.details = DetailsStatus::Loading;
                let request = self.detail_fetcher.plan(&id);
                Self::dispatch(request)
            }
        }
    }

    /// Records a detail response. Returns whether the view changed.
    pub fn receive_details(&mut self, id: &str, status: u16, body: &[u8]) -> bool {
        let result = DetailFetcher::parse(status, body);

        match self.volumes.complete(&id.to_string(), result) {
            Completion::Stale => {
                tracing::debug!(id = %id, "discarding stale details");
                false
            }
            Completion::Current(Ok(details)) => {
                self.details = DetailsStatus::Ready(details);
                true
            }
            Completion::Current(Err(error)) => {
                tracing::warn!(id = %id, error = %error, "details fetch failed");
                self.details = DetailsStatus::Failed(error.to_string());
                true
            }
        }
    }

    /// Collapses the detail panel.
    pub fn close_details(&mut self) {
        self.selection.clear();
        self.sync_details();
    }

    /// Switches to the landing view with the search box focused.
    pub fn show_landing(&mut self) {
        self.route = Route::Landing;
        self.input_mode = InputMode::Typing;
        self.results = ResultsStatus::Idle;
        self.cursor = 0;
        self.pages.reset_latest();
        self.sync_details();
    }

    /// Closes the detail panel if the selection was cleared underneath it.
    fn sync_details(&mut self) {
        if self.selection.selected_id().is_none() {
            self.details = DetailsStatus::Closed;
            self.volumes.reset_latest();
        }
    }

    fn dispatch(request: CatalogRequest) -> Vec<Action> {
        tracing::debug!(url = %request.url, "dispatching catalog request");
        vec![Action::Fetch {
            url: request.url,
            context: RequestContext::new(request.target),
        }]
    }
}
