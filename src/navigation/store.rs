//! Query state synchronized with the location.
//!
//! [`QueryStateStore`] owns the canonical [`SearchQuery`]. Every mutation is
//! pushed to the [`Location`] inside the same call, and the location is parsed
//! back with [`QueryStateStore::read_from_external`] on entry and after
//! external navigation (deep links, back/forward).

use std::collections::BTreeMap;

use super::location::{Location, QueryParams, PAGE_KEY, QUERY_KEY};
use super::selection::DetailSelector;
use crate::domain::{SearchQuery, FIRST_PAGE};

/// Outcome of parsing the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The location describes the query already in effect.
    Unchanged,
    /// The location describes a new query that should be fetched.
    Changed(SearchQuery),
    /// `q` or `page` is absent or malformed; show the landing view.
    RedirectToLanding,
}

/// Owner of the current search query.
#[derive(Debug, Clone)]
pub struct QueryStateStore<L: Location = QueryParams> {
    location: L,
    query: Option<SearchQuery>,
}

impl<L: Location> QueryStateStore<L> {
    /// Wraps `location` without reading it. Call
    /// [`read_from_external`](Self::read_from_external) to load the initial
    /// query.
    pub const fn new(location: L) -> Self {
        Self {
            location,
            query: None,
        }
    }

    /// The query in effect, if any.
    pub const fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub const fn location(&self) -> &L {
        &self.location
    }

    /// Publishes a new query.
    ///
    /// `page` values below 1 are clamped to 1. The location is updated before
    /// returning and the detail selection is cleared.
    pub fn set_query(
        &mut self,
        text: impl Into<String>,
        page: i64,
        selection: &mut DetailSelector,
    ) -> &SearchQuery {
        let query = SearchQuery::new(text, clamp_page(page));
        tracing::debug!(text = %query.text, page = query.page, "set_query");

        self.location.set(params_for(&query));
        selection.clear();
        self.query.insert(query)
    }

    /// Parses `q` and `page` from the location.
    ///
    /// Blank `q`, missing `page`, or a non-integer `page` redirect to landing
    /// and drop the current query. An integer `page` below 1 is clamped and
    /// the location is rewritten in place to match. The selection is cleared
    /// whenever the query changes.
    pub fn read_from_external(&mut self, selection: &mut DetailSelector) -> Navigation {
        let text = self
            .location
            .get(QUERY_KEY)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_owned);
        let raw_page = self.location.get(PAGE_KEY).map(str::to_owned);
        let page = raw_page.as_deref().and_then(parse_page);

        let (Some(text), Some(page)) = (text, page) else {
            tracing::debug!(page = ?raw_page, "location lacks a valid query, redirecting to landing");
            self.query = None;
            selection.clear();
            return Navigation::RedirectToLanding;
        };

        let query = SearchQuery::new(text, page);
        if raw_page.as_deref() != Some(query.page.to_string().as_str()) {
            self.location.replace(params_for(&query));
        }

        if self.query.as_ref() == Some(&query) {
            return Navigation::Unchanged;
        }

        selection.clear();
        self.query = Some(query.clone());
        Navigation::Changed(query)
    }

    /// Replaces the location with `params` and parses it.
    pub fn navigate(
        &mut self,
        params: BTreeMap<String, String>,
        selection: &mut DetailSelector,
    ) -> Navigation {
        self.location.set(params);
        self.read_from_external(selection)
    }

    /// Moves to the following page. `None` without a query.
    pub fn next_page(&mut self, selection: &mut DetailSelector) -> Option<&SearchQuery> {
        let query = self.query.clone()?;
        Some(self.set_query(query.text, i64::from(query.page) + 1, selection))
    }

    /// Moves to the preceding page. `None` without a query or on page 1.
    pub fn prev_page(&mut self, selection: &mut DetailSelector) -> Option<&SearchQuery> {
        let query = self.query.clone().filter(|query| query.page > FIRST_PAGE)?;
        Some(self.set_query(query.text, i64::from(query.page) - 1, selection))
    }

    /// Jumps to `page` of the current query. `None` without a query.
    pub fn select_page(
        &mut self,
        page: u32,
        selection: &mut DetailSelector,
    ) -> Option<&SearchQuery> {
        let text = self.query.as_ref()?.text.clone();
        Some(self.set_query(text, i64::from(page), selection))
    }
}

impl QueryStateStore<QueryParams> {
    /// Steps back through the location history and re-reads it.
    ///
    /// Returns [`Navigation::Unchanged`] at the start of history.
    pub fn back(&mut self, selection: &mut DetailSelector) -> Navigation {
        if self.location.back() {
            self.read_from_external(selection)
        } else {
            Navigation::Unchanged
        }
    }

    /// Steps forward through the location history and re-reads it.
    pub fn forward(&mut self, selection: &mut DetailSelector) -> Navigation {
        if self.location.forward() {
            self.read_from_external(selection)
        } else {
            Navigation::Unchanged
        }
    }
}

fn params_for(query: &SearchQuery) -> BTreeMap<String, String> {
    BTreeMap::from([
        (QUERY_KEY.to_string(), query.text.clone()),
        (PAGE_KEY.to_string(), query.page.to_string()),
    ])
}

fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<i64>().ok().map(clamp_page)
}

fn clamp_page(page: i64) -> u32 {
    u32::try_from(page.max(i64::from(FIRST_PAGE))).unwrap_or(u32::MAX)
}
