//! Result and detail fetchers.
//!
//! A fetch is split into two pure halves: `plan` turns the input into a
//! [`CatalogRequest`] and `parse` turns the status and body into a domain
//! value. The plugin sends the request with Zellij's asynchronous
//! `web_request` and feeds the `WebRequestResult` back into `parse`; anything
//! with a blocking HTTP client can use `fetch` with a [`CatalogClient`].
//!
//! Neither fetcher caches or deduplicates. That is the job of
//! [`RequestTracker`](super::RequestTracker).

use super::payload::{VolumePayload, VolumesPayload};
use super::request::{CatalogEndpoint, CatalogRequest, RequestTarget};
use crate::domain::{BookDetails, BookworldError, ResultPage, Result, SearchQuery};

/// A raw catalog response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A blocking `GET` capability.
pub trait CatalogClient {
    /// Performs `GET url`.
    ///
    /// # Errors
    ///
    /// Returns [`BookworldError::Transport`] when no response was received.
    /// Non-success statuses are returned as a response, not an error.
    fn get(&self, url: &str) -> Result<CatalogResponse>;
}

/// What [`ResultFetcher::plan`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// The query text is empty; there is nothing to fetch.
    NoQuery,
    /// Send this request.
    Request(CatalogRequest),
}

/// A successful search fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The query text was empty and no remote call was made.
    NoQuery,
    Page(ResultPage),
}

/// Fetches one page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFetcher {
    endpoint: CatalogEndpoint,
    page_size: u32,
}

impl ResultFetcher {
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(endpoint: CatalogEndpoint, page_size: u32) -> Self {
        Self {
            endpoint,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on `page`: `(page - 1) * page_size`.
    #[must_use]
    pub fn offset(&self, page: u32) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Builds the request for `query`, or [`FetchPlan::NoQuery`] for blank text.
    #[must_use]
    pub fn plan(&self, query: &SearchQuery) -> FetchPlan {
        if query.is_empty() {
            return FetchPlan::NoQuery;
        }
        FetchPlan::Request(CatalogRequest {
            url: self
                .endpoint
                .search_url(&query.text, self.offset(query.page), self.page_size),
            target: RequestTarget::Page(query.key()),
        })
    }

    /// Interprets a search response.
    ///
    /// # Errors
    ///
    /// [`BookworldError::Status`] for non-2xx statuses and
    /// [`BookworldError::Malformed`] when the body is not a volume list. A
    /// single bad item fails the whole page.
    pub fn parse(status: u16, body: &[u8]) -> Result<ResultPage> {
        check_status(status)?;
        let payload: VolumesPayload = serde_json::from_slice(body)?;
        Ok(payload.into())
    }

    /// Plans, sends and parses in one call.
    ///
    /// # Errors
    ///
    /// Any transport, status or payload failure.
    pub fn fetch<C: CatalogClient>(&self, client: &C, query: &SearchQuery) -> Result<Fetched> {
        let request = match self.plan(query) {
            FetchPlan::NoQuery => return Ok(Fetched::NoQuery),
            FetchPlan::Request(request) => request,
        };

        let span = tracing::debug_span!("fetch_results", query = %query.key());
        let _guard = span.enter();

        let response = client.get(&request.url)?;
        let page = Self::parse(response.status, &response.body)?;
        tracing::debug!(items = page.items.len(), total_items = page.total_items, "page fetched");
        Ok(Fetched::Page(page))
    }
}

/// Fetches the full record of one volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFetcher {
    endpoint: CatalogEndpoint,
}

impl DetailFetcher {
    #[must_use]
    pub const fn new(endpoint: CatalogEndpoint) -> Self {
        Self { endpoint }
    }

    #[must_use]
    pub fn plan(&self, id: &str) -> CatalogRequest {
        CatalogRequest {
            url: self.endpoint.volume_url(id),
            target: RequestTarget::Details(id.to_string()),
        }
    }

    /// Interprets a volume response.
    ///
    /// # Errors
    ///
    /// Same classification as [`ResultFetcher::parse`].
    pub fn parse(status: u16, body: &[u8]) -> Result<BookDetails> {
        check_status(status)?;
        let payload: VolumePayload = serde_json::from_slice(body)?;
        Ok(payload.into())
    }

    /// Plans, sends and parses in one call.
    ///
    /// # Errors
    ///
    /// Any transport, status or payload failure.
    pub fn fetch<C: CatalogClient>(&self, client: &C, id: &str) -> Result<BookDetails> {
        let span = tracing::debug_span!("fetch_details", id = %id);
        let _guard = span.enter();

        let response = client.get(&self.plan(id).url)?;
        Self::parse(response.status, &response.body)
    }
}

fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(BookworldError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    const PAGE: &str = r#"{
        "totalItems": 42,
        "items": [
            {"id": "a", "volumeInfo": {"title": "Dune", "authors": ["Frank Herbert"], "publishedDate": "1965-08-01"}},
            {"id": "b", "volumeInfo": {"title": "Dune Messiah", "imageLinks": {"thumbnail": "http://img/b"}}}
        ]
    }"#;

    struct StubClient {
        response: Result<CatalogResponse>,
        calls: RefCell<Vec<String>>,
    }

    impl StubClient {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                response: Ok(CatalogResponse {
                    status,
                    body: body.as_bytes().to_vec(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                response: Err(BookworldError::Transport("connection refused".into())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CatalogClient for StubClient {
        fn get(&self, url: &str) -> Result<CatalogResponse> {
            self.calls.borrow_mut().push(url.to_string());
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(error) => Err(BookworldError::Transport(error.to_string())),
            }
        }
    }

    fn fetcher() -> ResultFetcher {
        ResultFetcher::new(CatalogEndpoint::new("https://books.test/volumes", None), 10)
    }

    #[test]
    fn empty_text_never_reaches_the_client() {
        let client = StubClient::ok(200, PAGE);
        let outcome = fetcher().fetch(&client, &SearchQuery::new("", 1)).unwrap();

        assert_eq!(outcome, Fetched::NoQuery);
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn offset_follows_page_size() {
        let fetcher = fetcher();
        assert_eq!(fetcher.offset(1), 0);
        assert_eq!(fetcher.offset(3), 20);

        let FetchPlan::Request(request) = fetcher.plan(&SearchQuery::new("dune", 3)) else {
            panic!("expected a request");
        };
        assert!(request.url.contains("startIndex=20&maxResults=10"));
        assert_eq!(request.target, RequestTarget::Page(SearchQuery::new("dune", 3).key()));
    }

    #[test]
    fn fetch_parses_page() {
        let client = StubClient::ok(200, PAGE);
        let Fetched::Page(page) = fetcher().fetch(&client, &SearchQuery::new("dune", 1)).unwrap() else {
            panic!("expected a page");
        };

        assert_eq!(page.total_items, 42);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].year, "1965");
        assert_eq!(page.items[1].thumbnail_url, "http://img/b");
        assert_eq!(client.calls.borrow().len(), 1);
    }

    #[test]
    fn failures_are_fetch_failures() {
        let query = SearchQuery::new("dune", 1);
        let cases = [
            fetcher().fetch(&StubClient::unreachable(), &query),
            fetcher().fetch(&StubClient::ok(503, PAGE), &query),
            fetcher().fetch(&StubClient::ok(200, "<html>"), &query),
            fetcher().fetch(&StubClient::ok(200, r#"{"items": []}"#), &query),
        ];
        for result in cases {
            assert!(result.unwrap_err().is_fetch_failure());
        }
    }

    #[test]
    fn status_is_reported() {
        assert!(matches!(
            ResultFetcher::parse(404, PAGE.as_bytes()),
            Err(BookworldError::Status(404))
        ));
    }

    #[test]
    fn details_fetch() {
        let client = StubClient::ok(
            200,
            r#"{"id": "a", "volumeInfo": {"title": "Dune", "pageCount": 412, "averageRating": 4.5, "previewLink": "http://p"}}"#,
        );
        let fetcher = DetailFetcher::new(CatalogEndpoint::new("https://books.test/volumes", None));
        let details = fetcher.fetch(&client, "a").unwrap();

        assert_eq!(client.calls.borrow()[0], "https://books.test/volumes/a");
        assert_eq!(details.page_count_text(), "412 pages");
        assert_eq!(details.rating_text(), "4.5 / 5");
        assert_eq!(details.link.as_deref(), Some("http://p"));
    }
}
