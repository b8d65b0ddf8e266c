//! Outgoing catalog requests and the context they carry.
//!
//! A [`RequestContext`] is serialized into the `web_request` context map and
//! comes back untouched with the response. It identifies what the response
//! belongs to, which is how late responses are matched by value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BookworldError, RequestKey, Result};
use crate::infrastructure::percent_encode;
use crate::observability::TraceContext;

/// Context map key under which the serialized [`RequestContext`] is stored.
pub const CONTEXT_KEY: &str = "bookworld_request";

/// What a request fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestTarget {
    /// One result page.
    Page(RequestKey),
    /// The full record of one volume.
    Details(String),
}

/// A ready-to-send `GET`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub url: String,
    pub target: RequestTarget,
}

/// Base URL and credentials shared by every catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    base_url: String,
    api_key: Option<String>,
}

impl CatalogEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a volume search.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookworld::catalog::CatalogEndpoint;
    ///
    /// let endpoint = CatalogEndpoint::new("https://books.test/volumes", None);
    /// assert_eq!(
    ///     endpoint.search_url("dune messiah", 20, 10),
    ///     "https://books.test/volumes?q=dune%20messiah&startIndex=20&maxResults=10"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, text: &str, start_index: u64, max_results: u32) -> String {
        let mut url = format!(
            "{}?q={}&startIndex={start_index}&maxResults={max_results}",
            self.base_url,
            percent_encode(text)
        );
        self.append_key(&mut url, '&');
        url
    }

    /// URL of a single volume.
    #[must_use]
    pub fn volume_url(&self, id: &str) -> String {
        let mut url = format!("{}/{}", self.base_url, percent_encode(id));
        self.append_key(&mut url, '?');
        url
    }

    fn append_key(&self, url: &mut String, separator: char) {
        if let Some(key) = &self.api_key {
            url.push(separator);
            url.push_str("key=");
            url.push_str(&percent_encode(key));
        }
    }
}

/// Identity, trace ids and start time of an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub target: RequestTarget,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trace_context: Option<TraceContext>,
    /// Milliseconds since the Unix epoch.
    pub started_at_ms: i64,
}

impl RequestContext {
    /// Builds a context for `target`, capturing the current span and time.
    #[must_use]
    pub fn new(target: RequestTarget) -> Self {
        Self {
            target,
            trace_context: TraceContext::from_current(),
            started_at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Serializes into a `web_request` context map.
    ///
    /// # Errors
    ///
    /// Returns [`BookworldError::Malformed`] if serialization fails.
    pub fn to_map(&self) -> Result<BTreeMap<String, String>> {
        Ok(BTreeMap::from([(CONTEXT_KEY.to_string(), serde_json::to_string(self)?)]))
    }

    /// Recovers the context from a `WebRequestResult` context map.
    ///
    /// # Errors
    ///
    /// Returns [`BookworldError::Malformed`] if the key is missing or its
    /// value does not deserialize.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let raw = map
            .get(CONTEXT_KEY)
            .ok_or_else(|| BookworldError::Malformed("response carries no request context".into()))?;
        Ok(serde_json::from_str(raw)?)
    }

    /// Milliseconds elapsed since the request started.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis() - self.started_at_ms
    }
}
