//! Positioned widgets produced by a layout pass.
//!
//! Components never print. They push [`Widget`]s into a [`Frame`], which the
//! plugin shim flushes with Zellij's `print_*_with_coordinates` primitives.
//! Coordinates are zero-based cells; highlight ranges are character indices.

use std::ops::Range;

/// Emphasis applied to a character range of a text widget.
///
/// `level` maps to Zellij's `color_range` index (0 to 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub level: usize,
    pub range: Range<usize>,
}

impl Highlight {
    /// Highlights all of `text`.
    #[must_use]
    pub fn whole(level: usize, text: &str) -> Self {
        Self {
            level,
            range: 0..text.chars().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text {
        x: usize,
        y: usize,
        width: Option<usize>,
        text: String,
        selected: bool,
        highlights: Vec<Highlight>,
    },
    Table {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        header: Vec<String>,
        rows: Vec<TableRow>,
    },
    /// A tab-like button.
    Ribbon {
        x: usize,
        y: usize,
        text: String,
        selected: bool,
    },
}

impl Widget {
    /// Row the widget starts on.
    #[must_use]
    pub const fn y(&self) -> usize {
        match self {
            Self::Text { y, .. } | Self::Table { y, .. } | Self::Ribbon { y, .. } => *y,
        }
    }
}

/// Widgets of one render pass, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    widgets: Vec<Widget>,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Pushes plain text at `(x, y)`.
    pub fn text(&mut self, x: usize, y: usize, text: impl Into<String>) {
        self.styled_text(x, y, text, vec![]);
    }

    /// Pushes text at `(x, y)` with highlighted ranges.
    pub fn styled_text(&mut self, x: usize, y: usize, text: impl Into<String>, highlights: Vec<Highlight>) {
        self.push(Widget::Text {
            x,
            y,
            width: None,
            text: text.into(),
            selected: false,
            highlights,
        });
    }

    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Text of every text widget and ribbon on row `y`, joined by spaces.
    #[must_use]
    pub fn line(&self, y: usize) -> String {
        self.widgets
            .iter()
            .filter(|widget| widget.y() == y)
            .filter_map(|widget| match widget {
                Widget::Text { text, .. } | Widget::Ribbon { text, .. } => Some(text.trim()),
                Widget::Table { .. } => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether any text widget or ribbon contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.widgets.iter().any(|widget| match widget {
            Widget::Text { text, .. } | Widget::Ribbon { text, .. } => text.contains(needle),
            Widget::Table { rows, header, .. } => header
                .iter()
                .chain(rows.iter().flat_map(|row| row.cells.iter()))
                .any(|cell| cell.contains(needle)),
        })
    }

    /// The first table in the frame.
    #[must_use]
    pub fn table(&self) -> Option<&Widget> {
        self.widgets.iter().find(|widget| matches!(widget, Widget::Table { .. }))
    }
}
