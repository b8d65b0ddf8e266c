//! Result table component renderer.
//!
//! Renders the visible slice of the result page as a four-column table with
//! the highlighted row selected and the open book marked.

use crate::ui::frame::{Frame, TableRow, Widget};
use crate::ui::viewmodel::DisplayItem;

pub const COLUMNS: [&str; 4] = ["TITLE", "AUTHORS", "YEAR", "CATEGORIES"];

/// Marker prefixed to the title of the book whose details are open.
const EXPANDED_MARKER: &str = "> ";

/// Renders the table at `row` within `width` columns.
///
/// Returns the next available row (header plus one row per item).
pub fn render_results(frame: &mut Frame, row: usize, items: &[DisplayItem], width: usize) -> usize {
    let rows: Vec<TableRow> = items.iter().map(table_row).collect();
    let height = rows.len() + 1;

    frame.push(Widget::Table {
        x: 0,
        y: row,
        width,
        height,
        header: COLUMNS.iter().map(ToString::to_string).collect(),
        rows,
    });

    row + height
}

fn table_row(item: &DisplayItem) -> TableRow {
    let title = if item.is_expanded {
        format!("{EXPANDED_MARKER}{}", item.title)
    } else {
        item.title.clone()
    };

    TableRow {
        cells: vec![title, item.authors.clone(), item.year.clone(), item.categories.clone()],
        selected: item.is_selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, is_selected: bool, is_expanded: bool) -> DisplayItem {
        DisplayItem {
            title: title.to_string(),
            authors: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            categories: "Fiction".to_string(),
            is_selected,
            is_expanded,
        }
    }

    #[test]
    fn rows_carry_selection_and_marker() {
        let mut frame = Frame::new();
        let next = render_results(&mut frame, 5, &[item("Dune", true, false), item("Dune Messiah", false, true)], 80);
        assert_eq!(next, 8);

        let Some(Widget::Table { header, rows, height, .. }) = frame.table() else {
            panic!("expected table");
        };
        assert_eq!(header[0], "TITLE");
        assert_eq!(*height, 3);
        assert!(rows[0].selected);
        assert_eq!(rows[1].cells[0], "> Dune Messiah");
        assert_eq!(rows[1].cells[2], "1965");
    }
}
