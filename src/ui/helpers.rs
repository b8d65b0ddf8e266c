//! Shared formatting utilities.
//!
//! All widths are counted in characters, never bytes, so multi-byte titles are
//! cut on character boundaries.

/// Cuts `value` to `len` characters and appends `"..."` when it is longer.
///
/// # Examples
///
/// ```
/// use bookworld::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Hitchhiker's Guide to the Galaxy", 27), "The Hitchhiker's Guide to t...");
/// assert_eq!(truncate("Dune", 27), "Dune");
/// ```
#[must_use]
pub fn truncate(value: &str, len: usize) -> String {
    match value.char_indices().nth(len) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Like [`truncate`] but the result, ellipsis included, fits in `width`.
#[must_use]
pub fn fit(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }
    truncate(value, width - 3)
}

/// Left padding that centres `len` characters in `width` columns.
#[must_use]
pub const fn centre_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Greedy word wrap to `width` columns. Existing newlines are kept.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let word = fit(word, width);
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(&word);
            line_len += word_len;
        }
        lines.push(line);
    }
    lines
}
