//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input,
//! deep links and catalog responses, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime (`main.rs`)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `QueryStateStore` methods
//! 4. Actions (requests to send, closing the pane) are returned for execution
//!
//! # Event Types
//!
//! - **Search box**: `StartTyping`, `Char`, `Backspace`, `Submit`, `CancelTyping`
//! - **Results**: `CursorDown`, `CursorUp`, `OpenDetails`, `CloseDetails`, `ToggleDescription`
//! - **Paging**: `NextPage`, `PrevPage`, `SelectPage`, `JumpToButton`
//! - **Location**: `Back`, `Forward`, `Navigate`
//! - **System**: `PermissionsResult`, `WebResponse`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use bookworld::{handle_event, AppState, Config, Event};
//!
//! let mut state = AppState::new(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('d'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookworld::BookworldError>(())
//! ```

use std::collections::BTreeMap;

use super::modes::{InputMode, Route};
use crate::app::{Action, AppState};
use crate::catalog::{RequestContext, RequestTarget};
use crate::domain::error::Result;
use crate::infrastructure::parse_query_string;
use crate::navigation::{Navigation, PAGE_KEY, QUERY_KEY};

/// Pipe message names accepted as deep links.
pub const PIPE_NAMES: [&str; 2] = ["bookworld", "navigate"];

/// Events triggered by user input, deep links or catalog responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Focuses the search box.
    StartTyping,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Publishes the search box text as a new query, page 1.
    Submit,
    /// Leaves the search box.
    CancelTyping,

    /// Moves the highlighted row down (wraps to top).
    CursorDown,
    /// Moves the highlighted row up (wraps to bottom).
    CursorUp,
    /// Expands the highlighted book.
    OpenDetails,
    /// Collapses the detail panel.
    CloseDetails,
    /// Shows more or less of the open book's description.
    ToggleDescription,

    NextPage,
    PrevPage,
    /// Jumps to a page of the current query.
    SelectPage(u32),
    /// Jumps to the page on the n-th navigation button (1-based).
    JumpToButton(usize),

    /// Steps back through the location history.
    Back,
    /// Steps forward through the location history.
    Forward,
    /// Replaces the location with these parameters (deep link).
    Navigate(BTreeMap<String, String>),

    /// Reports whether the requested permissions were granted.
    ///
    /// The location is read for the first time when this arrives.
    PermissionsResult { granted: bool },

    /// A `WebRequestResult` from Zellij.
    WebResponse {
        status: u16,
        body: Vec<u8>,
        /// Context map sent with the request.
        context: BTreeMap<String, String>,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    /// Maps a pipe message to a [`Event::Navigate`].
    ///
    /// Only messages named in [`PIPE_NAMES`] are accepted. Parameters come
    /// from the payload (a query string) and the message args; args win.
    /// Keys other than `q` and `page` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use bookworld::Event;
    ///
    /// let event = Event::from_pipe("bookworld", Some("q=dune&page=2"), &BTreeMap::new());
    /// assert!(matches!(event, Some(Event::Navigate(_))));
    /// assert_eq!(Event::from_pipe("other", None, &BTreeMap::new()), None);
    /// ```
    #[must_use]
    pub fn from_pipe(
        name: &str,
        payload: Option<&str>,
        args: &BTreeMap<String, String>,
    ) -> Option<Self> {
        if !PIPE_NAMES.contains(&name) {
            return None;
        }

        let mut params = payload.map(parse_query_string).unwrap_or_default();
        params.extend(args.iter().map(|(k, v)| (k.clone(), v.clone())));
        params.retain(|key, _| key == QUERY_KEY || key == PAGE_KEY);

        Some(Self::Navigate(params))
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the view changed, plus the actions to execute in order.
///
/// # Errors
///
/// Returns [`BookworldError::Malformed`](crate::BookworldError::Malformed)
/// for a web response whose context map was not produced by this plugin.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::StartTyping => {
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            tracing::trace!(input = %state.input, "search box updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            Ok((state.input.pop().is_some(), vec![]))
        }
        Event::Submit => {
            let text = state.input.trim().to_string();
            if text.is_empty() {
                tracing::debug!("ignoring submit of blank query");
                return Ok((false, vec![]));
            }

            tracing::debug!(query = %text, "query submitted");
            let query = state.store.set_query(text.clone(), 1, &mut state.selection).clone();
            state.input = text;
            state.input_mode = InputMode::Normal;
            Ok((true, state.load_results(&query)))
        }
        Event::CancelTyping => {
            state.input_mode = InputMode::Normal;
            state.input = match (state.route, state.query()) {
                (Route::Search, Some(query)) => query.text.clone(),
                _ => String::new(),
            };
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::OpenDetails => {
            let actions = state.open_details();
            Ok((true, actions))
        }
        Event::CloseDetails => {
            if state.selection.selected_id().is_none() {
                return Ok((false, vec![]));
            }
            state.close_details();
            Ok((true, vec![]))
        }
        Event::ToggleDescription => {
            if state.selection.selected_id().is_none() {
                return Ok((false, vec![]));
            }
            state.selection.toggle_show_more();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let Some(query) = state.store.next_page(&mut state.selection).cloned() else {
                return Ok((false, vec![]));
            };
            Ok((true, state.load_results(&query)))
        }
        Event::PrevPage => {
            let Some(query) = state.store.prev_page(&mut state.selection).cloned() else {
                tracing::debug!("already on the first page");
                return Ok((false, vec![]));
            };
            Ok((true, state.load_results(&query)))
        }
        Event::SelectPage(page) => select_page(state, *page),
        Event::JumpToButton(n) => {
            let Some(page) = state.window().and_then(|window| window.nth(*n)) else {
                tracing::debug!(button = n, "no such page button");
                return Ok((false, vec![]));
            };
            select_page(state, page)
        }
        Event::Back => {
            let navigation = state.store.back(&mut state.selection);
            Ok(apply_navigation(state, navigation))
        }
        Event::Forward => {
            let navigation = state.store.forward(&mut state.selection);
            Ok(apply_navigation(state, navigation))
        }
        Event::Navigate(params) => {
            tracing::debug!(params = ?params, "navigating to deep link");
            let navigation = state.store.navigate(params.clone(), &mut state.selection);
            Ok(apply_navigation(state, navigation))
        }
        Event::PermissionsResult { granted } => {
            state.permission_denied = !granted;
            if *granted {
                tracing::debug!("permissions granted, reading location");
            } else {
                tracing::warn!("permissions denied, catalog requests disabled");
            }
            let navigation = state.store.read_from_external(&mut state.selection);
            Ok(apply_navigation(state, navigation))
        }
        Event::WebResponse { status, body, context } => {
            let context = RequestContext::from_map(context)?;
            let _trace_guard = context.trace_context.as_ref().and_then(|trace| trace.attach());
            let _response_span = tracing::debug_span!(
                "receive_response",
                status = status,
                body_len = body.len(),
                elapsed_ms = context.elapsed_ms()
            )
            .entered();

            let should_render = match &context.target {
                RequestTarget::Page(key) => state.receive_results(key, *status, body),
                RequestTarget::Details(id) => state.receive_details(id, *status, body),
            };
            Ok((should_render, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn select_page(state: &mut AppState, page: u32) -> Result<(bool, Vec<Action>)> {
    if state.query().is_some_and(|query| query.page == page) {
        return Ok((false, vec![]));
    }
    let Some(query) = state.store.select_page(page, &mut state.selection).cloned() else {
        return Ok((false, vec![]));
    };
    Ok((true, state.load_results(&query)))
}

/// Applies a location outcome, syncing the search box with the new query.
fn apply_navigation(state: &mut AppState, navigation: Navigation) -> (bool, Vec<Action>) {
    if let Navigation::Changed(query) = &navigation {
        state.input.clone_from(&query.text);
        state.input_mode = InputMode::Normal;
    }
    state.apply_navigation(navigation)
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::StartTyping => "StartTyping",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Submit => "Submit",
        Event::CancelTyping => "CancelTyping",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::OpenDetails => "OpenDetails",
        Event::CloseDetails => "CloseDetails",
        Event::ToggleDescription => "ToggleDescription",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::SelectPage(_) => "SelectPage",
        Event::JumpToButton(_) => "JumpToButton",
        Event::Back => "Back",
        Event::Forward => "Forward",
        Event::Navigate(_) => "Navigate",
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::WebResponse { .. } => "WebResponse",
        Event::CloseFocus => "CloseFocus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn typed(text: &str) -> AppState {
        let mut state = AppState::new(&Config::default());
        for c in text.chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        state
    }

    #[test]
    fn chars_only_edit_while_typing() {
        let mut state = typed("du");
        assert_eq!(state.input, "du");

        state.input_mode = InputMode::Normal;
        assert_eq!(handle_event(&mut state, &Event::Char('x')).unwrap(), (false, vec![]));
        assert_eq!(state.input, "du");
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut state = typed("   ");
        assert_eq!(handle_event(&mut state, &Event::Submit).unwrap(), (false, vec![]));
        assert!(state.query().is_none());
    }

    #[test]
    fn submit_publishes_page_one() {
        let mut state = typed(" dune ");
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(render);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.input, "dune");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.route, Route::Search);
        assert_eq!(state.store.location().to_query_string(), "page=1&q=dune");
    }

    #[test]
    fn cancel_restores_query_text() {
        let mut state = typed("dune");
        handle_event(&mut state, &Event::Submit).unwrap();
        handle_event(&mut state, &Event::StartTyping).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::CancelTyping).unwrap();

        assert_eq!(state.input, "dune");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn prev_page_on_first_page_is_noop() {
        let mut state = typed("dune");
        handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(handle_event(&mut state, &Event::PrevPage).unwrap(), (false, vec![]));
    }

    #[test]
    fn pipe_messages_map_to_navigate() {
        let args = BTreeMap::from([
            ("page".to_string(), "4".to_string()),
            ("extra".to_string(), "x".to_string()),
        ]);
        let Some(Event::Navigate(params)) = Event::from_pipe("navigate", Some("q=dune&page=2"), &args) else {
            panic!("expected navigate");
        };
        assert_eq!(params.get("q").map(String::as_str), Some("dune"));
        assert_eq!(params.get("page").map(String::as_str), Some("4"));
        assert!(!params.contains_key("extra"));
    }

    #[test]
    fn foreign_response_is_an_error() {
        let mut state = AppState::new(&Config::default());
        let event = Event::WebResponse {
            status: 200,
            body: vec![],
            context: BTreeMap::new(),
        };
        assert!(handle_event(&mut state, &event).is_err());
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = AppState::new(&Config::default());
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }
}
