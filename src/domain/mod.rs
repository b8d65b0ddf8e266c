//! Domain layer for the Bookworld plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or the catalog's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`query`]: Search query and request identity
//! - [`book`]: Book summaries, result pages and detail records
//!
//! # Examples
//!
//! ```
//! use bookworld::domain::{Result, SearchQuery};
//!
//! fn first_page(text: &str) -> Result<SearchQuery> {
//!     Ok(SearchQuery::new(text, 1))
//! }
//! ```

pub mod book;
pub mod error;
pub mod query;

pub use book::{authors_text, year_of, BookDetails, BookSummary, ResultPage};
pub use error::{BookworldError, Result};
pub use query::{RequestKey, SearchQuery, FIRST_PAGE};
