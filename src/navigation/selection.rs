//! Detail selection.

/// Tracks at most one expanded book, plus whether its description is shown
/// in full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelector {
    selected_id: Option<String>,
    show_more: bool,
}

impl DetailSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, replacing any previous selection.
    ///
    /// The "show more" toggle resets on every call.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
        self.show_more = false;
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
        self.show_more = false;
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    #[must_use]
    pub const fn show_more(&self) -> bool {
        self.show_more
    }

    /// Flips the full-description toggle. No-op without a selection.
    pub fn toggle_show_more(&mut self) {
        if self.selected_id.is_some() {
            self.show_more = !self.show_more;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_and_clear_removes() {
        let mut selection = DetailSelector::new();
        selection.select("a");
        selection.select("b");
        assert_eq!(selection.selected_id(), Some("b"));
        assert!(selection.is_selected("b"));
        assert!(!selection.is_selected("a"));

        selection.clear();
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn show_more_resets_on_new_selection() {
        let mut selection = DetailSelector::new();
        selection.toggle_show_more();
        assert!(!selection.show_more());

        selection.select("a");
        selection.toggle_show_more();
        assert!(selection.show_more());

        selection.select("b");
        assert!(!selection.show_more());
    }
}
