//! Page navigation bar renderer.
//!
//! Renders previous/next arrows and one ribbon per page button, with the
//! current page selected, followed by the result summary.

use crate::ui::frame::{Frame, Widget};
use crate::ui::viewmodel::PaginationInfo;

/// Cells a ribbon occupies beyond its label.
const RIBBON_CHROME: usize = 4;

const LEFT_MARGIN: usize = 1;

/// Renders the navigation bar on `row`.
///
/// Ribbons that would overflow `cols` are dropped; the summary is only drawn
/// when it fits.
pub fn render_pagination(frame: &mut Frame, row: usize, pagination: &PaginationInfo, cols: usize) -> usize {
    let mut labels: Vec<(String, bool)> = Vec::new();
    if pagination.has_prev {
        labels.push(("<".to_string(), false));
    }
    labels.extend(
        pagination
            .buttons
            .iter()
            .map(|button| (button.page.to_string(), button.is_current)),
    );
    if pagination.has_next {
        labels.push((">".to_string(), false));
    }

    let mut x = LEFT_MARGIN;
    for (text, selected) in labels {
        let width = text.chars().count() + RIBBON_CHROME;
        if x + width > cols {
            break;
        }
        frame.push(Widget::Ribbon { x, y: row, text, selected });
        x += width;
    }

    let summary_x = x + 1;
    if summary_x + pagination.summary.chars().count() <= cols {
        frame.text(summary_x, row, pagination.summary.clone());
    }

    row + 1
}
