//! Navigable location state.
//!
//! The [`Location`] trait is the key-value parameter store the query state is
//! mirrored into. [`QueryParams`] is the in-plugin implementation: a set of
//! parameters plus a linear history, so back/forward behave like a browser's.

use std::collections::BTreeMap;

use crate::infrastructure::{parse_query_string, to_query_string};

/// Key holding the query text.
pub const QUERY_KEY: &str = "q";

/// Key holding the 1-based page number, as a decimal string.
pub const PAGE_KEY: &str = "page";

/// Default number of history entries kept by [`QueryParams`].
pub const MAX_HISTORY: usize = 100;

/// A key-value parameter store representing the current location.
pub trait Location {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Replaces the current parameters with `params`.
    fn set(&mut self, params: BTreeMap<String, String>);

    /// Rewrites the current parameters without recording a navigation.
    fn replace(&mut self, params: BTreeMap<String, String>) {
        self.set(params);
    }
}

/// Location parameters with back/forward history.
///
/// Every [`set`](Location::set) pushes a new entry and drops any forward
/// entries, unless the parameters equal the current entry. Past the history
/// limit the oldest entries are dropped.
#[derive(Debug, Clone)]
pub struct QueryParams {
    history: Vec<BTreeMap<String, String>>,
    cursor: usize,
    limit: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::from_params(BTreeMap::new())
    }
}

impl QueryParams {
    /// Starts a history whose only entry is `params`.
    #[must_use]
    pub fn from_params(params: BTreeMap<String, String>) -> Self {
        Self {
            history: vec![params],
            cursor: 0,
            limit: MAX_HISTORY,
        }
    }

    /// Keeps at most `limit` entries, never fewer than one.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self.trim();
        self
    }

    fn trim(&mut self) {
        let excess = self.history.len().saturating_sub(self.limit);
        if excess > 0 {
            self.history.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }

    /// Parses a `q=..&page=..` string into a fresh history.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        Self::from_params(parse_query_string(query))
    }

    /// Parameters of the current entry.
    #[must_use]
    pub fn current(&self) -> &BTreeMap<String, String> {
        // `cursor` always indexes into a non-empty `history`.
        &self.history[self.cursor]
    }

    /// Renders the current entry as a query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        to_query_string(self.current())
    }

    /// Steps back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Number of entries in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Location for QueryParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.current().get(key).map(String::as_str)
    }

    fn set(&mut self, params: BTreeMap<String, String>) {
        if *self.current() == params {
            return;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(params);
        self.trim();
        self.cursor = self.history.len() - 1;
    }

    fn replace(&mut self, params: BTreeMap<String, String>) {
        self.history[self.cursor] = params;
    }
}
