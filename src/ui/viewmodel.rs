//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! strings are already truncated and defaulted.

/// Complete renderable state of the plugin pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Rows of the visible slice of the result page.
    pub display_items: Vec<DisplayItem>,
    /// Index of the highlighted row within `display_items`.
    pub selected_index: usize,
    /// Replaces the result table (landing, loading, failure, no results).
    pub empty_state: Option<EmptyState>,
    pub pagination: Option<PaginationInfo>,
    pub details: Option<DetailPanel>,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Query and page in effect, or a tagline on the landing view.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub text: String,
    pub is_typing: bool,
    pub placeholder: String,
}

/// One book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub categories: String,
    pub is_selected: bool,
    /// The row's details are open.
    pub is_expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    pub is_error: bool,
}

/// Navigation bar below the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub buttons: Vec<PageButton>,
    pub has_prev: bool,
    pub has_next: bool,
    /// `"page 3 of 12 · 117 results"`.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub page: u32,
    pub is_current: bool,
}

/// Content of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    Loading,
    Failed { message: String },
    Ready(DetailInfo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    pub title: String,
    pub authors: String,
    /// Full or shortened description, depending on `show_more`.
    pub description: String,
    /// The description is longer than its preview.
    pub can_show_more: bool,
    pub show_more: bool,
    pub category: String,
    pub date: String,
    pub rating: String,
    pub pages: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
