//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; nothing in the library performs I/O.
//!
//! # Example
//!
//! ```rust
//! use bookworld::app::Action;
//! use bookworld::catalog::{RequestContext, RequestTarget};
//!
//! let action = Action::Fetch {
//!     url: "https://www.googleapis.com/books/v1/volumes/abc".to_string(),
//!     context: RequestContext::new(RequestTarget::Details("abc".to_string())),
//! };
//! assert!(matches!(action, Action::Fetch { .. }));
//! ```

use crate::catalog::RequestContext;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Sends `GET url` through Zellij's `web_request`.
    ///
    /// `context` is serialized into the request's context map and returns with
    /// the `WebRequestResult`, identifying what the response belongs to.
    Fetch {
        url: String,
        context: RequestContext,
    },
}
