//! Route, input mode and fetch status types for the application.
//!
//! # State Machine
//!
//! The plugin shows one of two routes:
//! - **Landing**: the location holds no valid query; only the search box is shown
//! - **Search**: a query is in effect and its result page is shown
//!
//! Independently, input is either **Normal** (keys are commands) or **Typing**
//! (keys edit the search box).

use crate::domain::{BookDetails, ResultPage};

/// Which view the location resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Search,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands: paging, selection, history.
    Normal,

    /// Keys edit the search box. Enter submits, Esc cancels.
    Typing,
}

/// State of the result page for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsStatus {
    /// Nothing requested yet (landing).
    #[default]
    Idle,
    /// A request for the current query is in flight.
    Loading,
    /// The query text was empty; nothing was fetched.
    NoQuery,
    Ready(ResultPage),
    /// The fetch failed. The detail is for logs only.
    Failed(String),
}

/// State of the detail panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailsStatus {
    /// No book selected.
    #[default]
    Closed,
    Loading,
    Ready(BookDetails),
    Failed(String),
}
