//! Navigation state: the location, the query mirrored into it, and the
//! detail selection that resets whenever the query changes.
//!
//! - [`location`]: key-value parameter store with history
//! - [`store`]: [`QueryStateStore`], the owner of the current query
//! - [`selection`]: [`DetailSelector`]

pub mod location;
pub mod selection;
pub mod store;

pub use location::{Location, QueryParams, MAX_HISTORY, PAGE_KEY, QUERY_KEY};
pub use selection::DetailSelector;
pub use store::{Navigation, QueryStateStore};
