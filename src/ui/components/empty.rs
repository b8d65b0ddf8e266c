//! Empty state component renderer.
//!
//! Shown in place of the result table on the landing view, while loading,
//! on failure and when a page has no books.

use crate::ui::frame::{Frame, Highlight};
use crate::ui::helpers::{centre_offset, fit};
use crate::ui::viewmodel::EmptyState;

/// Renders the centred message and subtitle inside the body rows
/// `top..bottom`.
pub fn render_empty_state(frame: &mut Frame, top: usize, bottom: usize, empty: &EmptyState, cols: usize) {
    let row = top + bottom.saturating_sub(top).saturating_sub(2) / 2;

    let message = fit(&empty.message, cols);
    let level = if empty.is_error { 3 } else { 0 };
    let highlights = vec![Highlight::whole(level, &message)];
    frame.styled_text(centre_offset(message.chars().count(), cols), row, message, highlights);

    if !empty.subtitle.is_empty() {
        let subtitle = fit(&empty.subtitle, cols);
        frame.text(centre_offset(subtitle.chars().count(), cols), row + 1, subtitle);
    }
}
