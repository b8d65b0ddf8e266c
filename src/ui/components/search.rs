//! Search bar component renderer.

use crate::ui::frame::{Frame, Highlight, Widget};
use crate::ui::helpers::fit;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 2;

const PROMPT: &str = "Search: ";

/// Renders the search input line at `row`.
///
/// While typing, the line is selected and ends in a cursor. An empty box
/// shows the placeholder instead.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, cols: usize) -> usize {
    let width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let prompt_len = PROMPT.chars().count();

    let (body, body_level) = if search.text.is_empty() && !search.is_typing {
        (search.placeholder.as_str(), 3)
    } else {
        (search.text.as_str(), 1)
    };
    let cursor = if search.is_typing { "_" } else { "" };

    // Keep the tail of long input visible while typing.
    let room = width.saturating_sub(prompt_len + cursor.len());
    let skip = body.chars().count().saturating_sub(room);
    let visible: String = body.chars().skip(skip).collect();
    let line = fit(&format!("{PROMPT}{visible}{cursor}"), width);

    let mut highlights = vec![Highlight { level: 2, range: 0..prompt_len }];
    if !visible.is_empty() {
        highlights.push(Highlight {
            level: body_level,
            range: prompt_len..line.chars().count(),
        });
    }

    frame.push(Widget::Text {
        x: SEARCH_BOX_MARGIN,
        y: row,
        width: Some(width),
        text: line,
        selected: search.is_typing,
        highlights,
    });

    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str, is_typing: bool) -> SearchBarInfo {
        SearchBarInfo {
            text: text.to_string(),
            is_typing,
            placeholder: "search over 10 million books".to_string(),
        }
    }

    #[test]
    fn placeholder_when_idle_and_empty() {
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 3, &info("", false), 80);
        assert_eq!(frame.line(3), "Search: search over 10 million books");
    }

    #[test]
    fn typing_shows_cursor_and_tail() {
        let mut frame = Frame::new();
        render_search_bar(&mut frame, 0, &info("the left hand of darkness", true), 24);

        let Widget::Text { text, selected, .. } = &frame.widgets()[0] else {
            panic!("expected text");
        };
        assert!(selected);
        assert_eq!(text, "Search: of darkness_");
    }
}
