//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Bookworld library and
//! the Zellij plugin system: it maps Zellij events to library events, performs
//! the returned actions, and draws the laid-out frame.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permissions**: The location is read once permissions are resolved
//! 4. **Update / Pipe**: Handle events, delegate to library layer
//! 5. **Render**: Lay out the view and draw it with Zellij UI primitives
//!
//! # Event Mapping
//!
//! - `Key` → per-mode key events (see below)
//! - `WebRequestResult` → `Event::WebResponse`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//! - pipe `bookworld` / `navigate` → `Event::Navigate`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `h`/`Left`, `l`/`Right`: Previous / next page
//! - `1`-`9`: Jump to the n-th page button
//! - `Enter`: Open details
//! - `Esc`: Close details
//! - `m`: Show more / less of the description
//! - `b`/`f`: Back / forward
//! - `/`: Edit search
//! - `q`: Close plugin
//!
//! While typing:
//! - Characters edit the search text
//! - `Enter`: Search
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookworld::ui::{Frame, Widget};
use bookworld::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: bookworld::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookworld::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, requests permissions and
    /// subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Query the catalog
    /// - `ReadApplicationState`: Receive pipe messages
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = bookworld::observability::init_tracing(&config) {
            eprintln!("bookworld: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            page_size = config.page_size,
            sibling_count = config.sibling_count,
            initial_params = ?config.initial_params,
            "parsed configuration"
        );
        self.app = bookworld::initialize(&config);

        request_permission(&[PermissionType::WebAccess, PermissionType::ReadApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request result");
                Event::WebResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => Event::PermissionsResult {
                granted: matches!(permissions, PermissionStatus::Granted),
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Accepts deep links: `zellij pipe --name bookworld --args "q=dune,page=2"`.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        match Event::from_pipe(&pipe_message.name, pipe_message.payload.as_deref(), &pipe_message.args) {
            Some(event) => self.dispatch(&event),
            None => {
                tracing::debug!("ignoring pipe message with unknown name");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        let frame = bookworld::ui::render(&self.app, rows, cols);
        Self::draw(&frame);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Typing => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::CancelTyping,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                BareKey::Left | BareKey::Char('h') => Event::PrevPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Char(c @ '1'..='9') => Event::JumpToButton(c as usize - '0' as usize),
                BareKey::Enter => Event::OpenDetails,
                BareKey::Esc => Event::CloseDetails,
                BareKey::Char('m') => Event::ToggleDescription,
                BareKey::Char('b') => Event::Back,
                BareKey::Char('f') => Event::Forward,
                BareKey::Char('/') => Event::StartTyping,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch { url, context } => match context.to_map() {
                Ok(context) => {
                    let headers = BTreeMap::from([("Accept".to_string(), "application/json".to_string())]);
                    web_request(url, HttpVerb::Get, headers, vec![], context);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode request context");
                }
            },
        }
    }

    /// Draws a laid-out frame with Zellij's UI primitives.
    fn draw(frame: &Frame) {
        for widget in frame.widgets() {
            match widget {
                Widget::Text {
                    x,
                    y,
                    width,
                    text,
                    selected,
                    highlights,
                } => {
                    let mut styled = Text::new(text);
                    if *selected {
                        styled = styled.selected();
                    }
                    for highlight in highlights {
                        styled = styled.color_range(highlight.level, highlight.range.clone());
                    }
                    print_text_with_coordinates(styled, *x, *y, *width, None);
                }
                Widget::Table {
                    x,
                    y,
                    width,
                    height,
                    header,
                    rows,
                } => {
                    let mut table = Table::new().add_row(header.clone());
                    for row in rows {
                        let cells = row
                            .cells
                            .iter()
                            .map(|cell| {
                                let cell = Text::new(cell);
                                if row.selected {
                                    cell.selected()
                                } else {
                                    cell
                                }
                            })
                            .collect();
                        table = table.add_styled_row(cells);
                    }
                    print_table_with_coordinates(table, *x, *y, Some(*width), Some(*height));
                }
                Widget::Ribbon { x, y, text, selected } => {
                    let mut styled = Text::new(text);
                    if *selected {
                        styled = styled.selected();
                    }
                    print_ribbon_with_coordinates(styled, *x, *y, None, None);
                }
            }
        }
    }
}
