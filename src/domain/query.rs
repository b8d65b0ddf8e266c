//! Search query model.
//!
//! A [`SearchQuery`] is the single source of truth for what should be fetched.
//! It is replaced wholesale on every navigation event and never mutated in place.

use serde::{Deserialize, Serialize};

/// The first page of any result set. Pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

/// User-entered search text plus the page being viewed.
///
/// The constructor enforces `page >= 1` by clamping, so a `SearchQuery` can
/// never describe page zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub page: u32,
}

impl SearchQuery {
    /// Creates a query, clamping `page` to at least [`FIRST_PAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bookworld::domain::SearchQuery;
    ///
    /// let query = SearchQuery::new("dune", 0);
    /// assert_eq!(query.page, 1);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page: page.max(FIRST_PAGE),
        }
    }

    /// Whether the query text is empty (only legal before the first submit).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Identity of the request this query produces.
    #[must_use]
    pub fn key(&self) -> RequestKey {
        RequestKey {
            text: self.text.clone(),
            page: self.page,
        }
    }
}

/// Identity of a result-page request.
///
/// Responses carry their key back so they can be matched against the most
/// recently requested query by value rather than by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestKey {
    pub text: String,
    pub page: u32,
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.text, self.page)
    }
}
