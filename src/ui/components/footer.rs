//! Footer component renderer.

use crate::ui::frame::Frame;
use crate::ui::helpers::{centre_offset, fit};
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centred on `row`, cut to fit narrow panes.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, cols: usize) -> usize {
    let help_text = fit(&footer.keybindings, cols);
    frame.text(centre_offset(help_text.chars().count(), cols), row, help_text);
    row + 1
}
