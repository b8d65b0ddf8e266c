//! Header component renderer.
//!
//! Renders the centred title with the query subtitle beneath it.

use crate::ui::frame::{Frame, Highlight};
use crate::ui::helpers::{centre_offset, fit};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row`.
///
/// Returns the next available row (a blank line is left below the subtitle).
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, cols: usize) -> usize {
    let title = fit(&header.title, cols);
    let title_len = title.chars().count();
    frame.styled_text(
        centre_offset(title_len, cols),
        row,
        title,
        vec![Highlight { level: 0, range: 0..title_len }],
    );

    let subtitle = fit(&header.subtitle, cols);
    frame.text(centre_offset(subtitle.chars().count(), cols), row + 1, subtitle);

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_centred() {
        let mut frame = Frame::new();
        let header = HeaderInfo {
            title: "BOOKWorld".to_string(),
            subtitle: "\"dune\", page 2".to_string(),
        };

        assert_eq!(render_header(&mut frame, 0, &header, 29), 3);
        assert_eq!(frame.line(0), "BOOKWorld");
        assert_eq!(frame.line(1), "\"dune\", page 2");
        assert!(matches!(frame.widgets()[0], crate::ui::Widget::Text { x: 10, .. }));
    }
}
