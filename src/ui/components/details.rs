//! Detail panel renderer.
//!
//! Renders the open book's metadata and description into a rectangular
//! region, clipping the description to the rows available.

use crate::ui::frame::{Frame, Highlight};
use crate::ui::helpers::{fit, wrap};
use crate::ui::viewmodel::{DetailInfo, DetailPanel};

/// Region of the pane given to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub top: usize,
    /// First row past the region.
    pub bottom: usize,
    pub width: usize,
}

impl Region {
    const fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }
}

/// Renders the panel into `region`. Returns the next free row.
pub fn render_details(frame: &mut Frame, region: Region, panel: &DetailPanel) -> usize {
    if region.height() == 0 || region.width == 0 {
        return region.top;
    }

    match panel {
        DetailPanel::Loading => {
            frame.text(region.x, region.top, "Loading...");
            region.top + 1
        }
        DetailPanel::Failed { message } => {
            let message = fit(message, region.width);
            let highlights = vec![Highlight::whole(3, &message)];
            frame.styled_text(region.x, region.top, message, highlights);
            region.top + 1
        }
        DetailPanel::Ready(info) => render_info(frame, region, info),
    }
}

fn render_info(frame: &mut Frame, region: Region, info: &DetailInfo) -> usize {
    let mut lines: Vec<(String, Option<usize>)> = vec![
        (info.title.clone(), Some(0)),
        (format!("by {}", info.authors), None),
        (meta_line(info), Some(2)),
        (String::new(), None),
    ];

    let mut trailer: Vec<(String, Option<usize>)> = Vec::new();
    if info.can_show_more {
        let toggle = if info.show_more { "m: show less" } else { "m: show more" };
        trailer.push((toggle.to_string(), Some(1)));
    }
    if let Some(link) = &info.link {
        trailer.push((format!("Link: {link}"), None));
    }

    let room = region.height().saturating_sub(lines.len() + trailer.len());
    lines.extend(
        wrap(&info.description, region.width)
            .into_iter()
            .take(room)
            .map(|line| (line, None)),
    );
    lines.extend(trailer);

    let mut row = region.top;
    for (text, level) in lines.into_iter().take(region.height()) {
        let text = fit(&text, region.width);
        let highlights = level.map(|level| vec![Highlight::whole(level, &text)]).unwrap_or_default();
        frame.styled_text(region.x, row, text, highlights);
        row += 1;
    }
    row
}

fn meta_line(info: &DetailInfo) -> String {
    [info.category.as_str(), &info.date, &info.rating, &info.pages]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(description: &str, can_show_more: bool) -> DetailInfo {
        DetailInfo {
            title: "Dune".to_string(),
            authors: "Frank Herbert".to_string(),
            description: description.to_string(),
            can_show_more,
            show_more: false,
            category: "Fiction".to_string(),
            date: "1965".to_string(),
            rating: "4.5 / 5".to_string(),
            pages: "412 pages".to_string(),
            link: Some("https://example.org/dune".to_string()),
        }
    }

    #[test]
    fn renders_metadata_and_trailer() {
        let mut frame = Frame::new();
        let region = Region { x: 2, top: 10, bottom: 30, width: 60 };
        let next = render_details(&mut frame, region, &DetailPanel::Ready(info("A desert planet.", true)));

        assert_eq!(frame.line(10), "Dune");
        assert_eq!(frame.line(11), "by Frank Herbert");
        assert_eq!(frame.line(12), "Fiction · 1965 · 4.5 / 5 · 412 pages");
        assert_eq!(frame.line(14), "A desert planet.");
        assert_eq!(frame.line(15), "m: show more");
        assert_eq!(frame.line(16), "Link: https://example.org/dune");
        assert_eq!(next, 17);
    }

    #[test]
    fn description_is_clipped_to_region() {
        let mut frame = Frame::new();
        let region = Region { x: 0, top: 0, bottom: 8, width: 10 };
        let description = "one two three four five six seven eight nine ten";
        render_details(&mut frame, region, &DetailPanel::Ready(info(description, false)));

        // 4 heading rows, 1 link row, 3 description rows.
        assert_eq!(frame.widgets().len(), 8);
        assert_eq!(frame.line(7), "Link: h...");
    }

    #[test]
    fn loading_and_failure() {
        let mut frame = Frame::new();
        let region = Region { x: 0, top: 0, bottom: 5, width: 40 };
        render_details(&mut frame, region, &DetailPanel::Loading);
        render_details(
            &mut frame,
            Region { top: 1, ..region },
            &DetailPanel::Failed { message: "An error occurred".to_string() },
        );
        assert_eq!(frame.line(0), "Loading...");
        assert_eq!(frame.line(1), "An error occurred");
    }
}
