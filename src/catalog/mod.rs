//! Book catalog access.
//!
//! # Modules
//!
//! - [`request`]: request URLs and the context carried through `web_request`
//! - [`fetcher`]: [`ResultFetcher`] and [`DetailFetcher`]
//! - [`payload`]: catalog wire format and conversion into domain types
//! - [`tracker`]: in-flight deduplication, response cache, staleness
//! - [`markup`]: plain-text rendering of HTML descriptions

pub mod fetcher;
pub mod markup;
pub mod payload;
pub mod request;
pub mod tracker;

pub use fetcher::{
    CatalogClient, CatalogResponse, DetailFetcher, FetchPlan, Fetched, ResultFetcher,
};
pub use markup::strip_html;
pub use request::{CatalogEndpoint, CatalogRequest, RequestContext, RequestTarget, CONTEXT_KEY};
pub use tracker::{Completion, Lookup, RequestTracker};
