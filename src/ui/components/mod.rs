//! Composable UI component renderers.
//!
//! Each component pushes its widgets into a [`Frame`] starting at a given row
//! and returns the next available row.
//!
//! # Components
//!
//! - [`header`]: Title and query subtitle
//! - [`search`]: Search input line
//! - [`table`]: Result table (TITLE, AUTHORS, YEAR, CATEGORIES)
//! - [`details`]: Detail panel for the open book
//! - [`pagination`]: Page buttons and result summary
//! - [`empty`]: Centred message replacing the table
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Subtitle]
//! [blank]
//! [Search Bar]
//! [blank]
//! [Table | Empty State]        [Details, when wide]
//! [Pagination]
//! [blank]
//! [Footer]
//! ```
//!
//! Below [`SPLIT_MIN_COLS`] the detail panel replaces the table.

pub mod details;
pub mod empty;
pub mod footer;
pub mod header;
pub mod pagination;
pub mod search;
pub mod table;

use crate::ui::frame::Frame;
use crate::ui::viewmodel::UIViewModel;

use details::{render_details, Region};
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::render_results;

/// Narrowest pane that shows the table and detail panel side by side.
pub const SPLIT_MIN_COLS: usize = 100;

/// Lays out a view model in a pane of `rows` x `cols`.
#[must_use]
pub fn layout(vm: &UIViewModel, rows: usize, cols: usize) -> Frame {
    let mut frame = Frame::new();

    let mut row = render_header(&mut frame, 0, &vm.header, cols);
    row = render_search_bar(&mut frame, row, &vm.search_bar, cols);

    let footer_row = rows.saturating_sub(1);
    let pagination_row = rows.saturating_sub(3).max(row);

    match (&vm.empty_state, &vm.details) {
        (Some(empty), _) => render_empty_state(&mut frame, row, pagination_row, empty, cols),
        (None, Some(panel)) if cols >= SPLIT_MIN_COLS => {
            let table_width = cols * 3 / 5;
            render_results(&mut frame, row, &vm.display_items, table_width);
            let region = Region {
                x: table_width + 2,
                top: row,
                bottom: pagination_row.saturating_sub(1),
                width: cols.saturating_sub(table_width + 3),
            };
            render_details(&mut frame, region, panel);
        }
        (None, Some(panel)) => {
            let region = Region {
                x: 1,
                top: row,
                bottom: pagination_row.saturating_sub(1),
                width: cols.saturating_sub(2),
            };
            render_details(&mut frame, region, panel);
        }
        (None, None) => {
            render_results(&mut frame, row, &vm.display_items, cols);
        }
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(&mut frame, pagination_row, pagination, cols);
    }
    render_footer(&mut frame, footer_row, &vm.footer, cols);

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{
        DetailPanel, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    };
    use crate::ui::Widget;

    fn viewmodel() -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: "BOOKWorld".to_string(),
                subtitle: "\"dune\", page 1".to_string(),
            },
            search_bar: SearchBarInfo {
                text: "dune".to_string(),
                is_typing: false,
                placeholder: String::new(),
            },
            display_items: vec![DisplayItem {
                title: "Dune".to_string(),
                authors: "Frank Herbert".to_string(),
                year: "1965".to_string(),
                categories: "Fiction".to_string(),
                is_selected: true,
                is_expanded: false,
            }],
            selected_index: 0,
            empty_state: None,
            pagination: None,
            details: None,
            footer: FooterInfo {
                keybindings: "q: quit".to_string(),
            },
        }
    }

    #[test]
    fn footer_sits_on_last_row() {
        let frame = layout(&viewmodel(), 24, 80);
        assert_eq!(frame.line(23), "q: quit");
        assert!(matches!(frame.table(), Some(Widget::Table { y: 5, .. })));
    }

    #[test]
    fn empty_state_replaces_table() {
        let mut vm = viewmodel();
        vm.empty_state = Some(EmptyState {
            message: "No books found".to_string(),
            subtitle: String::new(),
            is_error: false,
        });
        let frame = layout(&vm, 24, 80);
        assert!(frame.table().is_none());
        assert!(frame.contains("No books found"));
    }

    #[test]
    fn details_split_or_replace_by_width() {
        let mut vm = viewmodel();
        vm.details = Some(DetailPanel::Loading);

        let wide = layout(&vm, 24, 120);
        assert!(wide.table().is_some());
        assert!(wide.contains("Loading..."));

        let narrow = layout(&vm, 24, 80);
        assert!(narrow.table().is_none());
        assert!(narrow.contains("Loading..."));
    }
}
