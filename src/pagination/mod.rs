//! Pagination helpers.
//!
//! - [`window`]: page-number window shown in the navigation bar

pub mod window;

pub use window::{compute_window, PageWindow};
