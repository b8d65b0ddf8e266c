//! View model computation.
//!
//! Transforms [`AppState`] into a [`UIViewModel`]. Handles row windowing
//! around the cursor, text defaults and truncation, and the page buttons.

use super::modes::{DetailsStatus, InputMode, ResultsStatus, Route};
use super::state::AppState;
use crate::domain::{BookDetails, BookSummary};
use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{
    DetailInfo, DetailPanel, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PageButton,
    PaginationInfo, SearchBarInfo, UIViewModel,
};

/// Titles longer than this are cut in the result table.
pub const TITLE_MAX_CHARS: usize = 27;

/// The detail panel shows only the first category, cut to this length.
pub const CATEGORY_MAX_CHARS: usize = 35;

/// Description length shown before "show more".
pub const DESCRIPTION_PREVIEW_CHARS: usize = 280;

/// Rows taken by header, search bar, table header, pagination and footer.
const CHROME_ROWS: usize = 10;

const PLACEHOLDER: &str = "search over 10 million books";

impl AppState {
    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let (display_items, selected_index) = self.compute_display_items(rows);

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            display_items,
            selected_index,
            empty_state: self.compute_empty_state(),
            pagination: self.compute_pagination(),
            details: self.compute_details(),
            footer: self.compute_footer(),
        }
    }

    /// Visible slice of the result page, centred on the cursor.
    fn compute_display_items(&self, rows: usize) -> (Vec<DisplayItem>, usize) {
        let Some(page) = self.page() else {
            return (vec![], 0);
        };
        if page.items.is_empty() {
            return (vec![], 0);
        }

        let available = rows.saturating_sub(CHROME_ROWS).max(1);
        let mut start = self.cursor.saturating_sub(available / 2);
        let end = (start + available).min(page.items.len());
        if end - start < available && page.items.len() >= available {
            start = end.saturating_sub(available);
        }

        let items = page.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, book)| self.compute_display_item(book, start + offset))
            .collect();

        (items, self.cursor.saturating_sub(start))
    }

    fn compute_display_item(&self, book: &BookSummary, index: usize) -> DisplayItem {
        DisplayItem {
            title: truncate(&book.title, TITLE_MAX_CHARS),
            authors: book.authors_text(),
            year: book.year.clone(),
            categories: book.categories.join(", "),
            is_selected: index == self.cursor,
            is_expanded: self.selection.is_selected(&book.id),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match (self.route, self.query()) {
            (Route::Search, Some(query)) => format!("\"{}\", page {}", query.text, query.page),
            _ => "The world's books at your fingertips".to_string(),
        };
        HeaderInfo {
            title: "BOOKWorld".to_string(),
            subtitle,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            text: self.input.clone(),
            is_typing: self.input_mode == InputMode::Typing,
            placeholder: PLACEHOLDER.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle, is_error) = match (&self.results, self.route) {
            (_, Route::Landing) => ("Search the catalog", "Type a title, author or subject and press Enter", false),
            (ResultsStatus::Idle | ResultsStatus::Loading, Route::Search) => ("Loading...", "", false),
            (ResultsStatus::NoQuery, Route::Search) => ("Nothing to search for", "Press / to enter a query", false),
            (ResultsStatus::Failed(_), Route::Search) => (
                "An error occurred. Please try again another time",
                "Change the query or page to retry",
                true,
            ),
            (ResultsStatus::Ready(page), Route::Search) if page.is_empty() => {
                ("No books found", "Try a different query", false)
            }
            (ResultsStatus::Ready(_), Route::Search) => return None,
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
            is_error,
        })
    }

    fn compute_pagination(&self) -> Option<PaginationInfo> {
        let window = self.window()?;
        let total_items = self.page().map_or(0, |page| page.total_items);

        let buttons = window
            .page_numbers
            .iter()
            .map(|&page| PageButton {
                page,
                is_current: window.is_current(page),
            })
            .collect();

        Some(PaginationInfo {
            buttons,
            has_prev: window.has_prev,
            has_next: window.has_next,
            summary: format!(
                "page {} of {} · {total_items} results",
                window.current_page, window.last_page
            ),
        })
    }

    fn compute_details(&self) -> Option<DetailPanel> {
        match &self.details {
            DetailsStatus::Closed => None,
            DetailsStatus::Loading => Some(DetailPanel::Loading),
            DetailsStatus::Failed(_) => Some(DetailPanel::Failed {
                message: "An error occurred".to_string(),
            }),
            DetailsStatus::Ready(details) => Some(DetailPanel::Ready(self.compute_detail_info(details))),
        }
    }

    fn compute_detail_info(&self, details: &BookDetails) -> DetailInfo {
        let show_more = self.selection.show_more();
        let can_show_more = details.description.chars().count() > DESCRIPTION_PREVIEW_CHARS;
        let description = if show_more {
            details.description.clone()
        } else {
            truncate(&details.description, DESCRIPTION_PREVIEW_CHARS)
        };

        DetailInfo {
            title: details.title.clone(),
            authors: details.authors_text(),
            description,
            can_show_more,
            show_more,
            category: details
                .categories
                .first()
                .map(|category| truncate(category, CATEGORY_MAX_CHARS))
                .unwrap_or_default(),
            date: details.date.clone(),
            rating: details.rating_text(),
            pages: details.page_count_text(),
            link: details.link.clone(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.route, self.selection.selected_id()) {
            (InputMode::Typing, Route::Landing, _) => "Type to search  Enter: search  Esc: clear",
            (InputMode::Typing, Route::Search, _) => "Type to search  Enter: search  Esc: cancel",
            (InputMode::Normal, Route::Landing, _) => "/: search  b/f: back/forward  q: quit",
            (InputMode::Normal, Route::Search, Some(_)) => {
                "Esc: close details  m: show more  j/k: move  h/l: page  b/f: back/forward  q: quit"
            }
            (InputMode::Normal, Route::Search, None) => {
                "j/k: move  Enter: details  h/l: page  1-9: jump  /: search  b/f: back/forward  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
