//! Book domain models.
//!
//! These are the catalog-independent shapes the rest of the crate works with.
//! The raw catalog payloads live in [`crate::catalog::payload`] and are
//! converted into these types once, with every optional field already
//! defaulted.

use serde::{Deserialize, Serialize};

/// Year shown when the catalog has no publication date.
pub const UNKNOWN_YEAR: &str = "unknown";

/// Date shown in the detail panel when the catalog has no publication date.
pub const UNKNOWN_DATE: &str = "unknown date";

/// Category shown in the detail panel when the catalog lists none.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// One row of a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub year: String,
    /// Empty when the catalog has no cover image.
    pub thumbnail_url: String,
    /// Empty when the catalog lists no categories.
    pub categories: Vec<String>,
}

impl BookSummary {
    /// Human-readable author list. See [`authors_text`].
    #[must_use]
    pub fn authors_text(&self) -> String {
        authors_text(&self.authors)
    }
}

/// A page of search results as returned by the catalog.
///
/// Immutable once received; the next fetch replaces it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<BookSummary>,
    pub total_items: u64,
}

impl ResultPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Full record of one book, shown in the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub page_count: Option<u32>,
    pub rating: Option<f64>,
    /// Publication date as given by the catalog, or [`UNKNOWN_DATE`].
    pub date: String,
    /// Plain-text description with markup removed. May be empty.
    pub description: String,
    /// Largest available cover (`medium`, then `small`, then `thumbnail`).
    pub thumbnail_url: String,
    /// Never empty: defaults to `[UNKNOWN_CATEGORY]`.
    pub categories: Vec<String>,
    pub link: Option<String>,
}

impl BookDetails {
    /// Human-readable author list. See [`authors_text`].
    #[must_use]
    pub fn authors_text(&self) -> String {
        authors_text(&self.authors)
    }

    /// Rating formatted as `"4.5 / 5"`, or `"unknown rating"`. A zero rating
    /// counts as unrated.
    #[must_use]
    pub fn rating_text(&self) -> String {
        self.rating
            .filter(|rating| *rating != 0.0)
            .map_or_else(|| "unknown rating".to_string(), |rating| format!("{rating} / 5"))
    }

    /// Page count formatted with thousands separators, or empty when unknown
    /// or zero.
    #[must_use]
    pub fn page_count_text(&self) -> String {
        self.page_count
            .filter(|&count| count > 0)
            .map(|count| format!("{} pages", group_thousands(count)))
            .unwrap_or_default()
    }
}

/// Formats an author list for display.
///
/// - no authors: `"unknown"`
/// - one author: the name
/// - several: `"A, B and C"`
///
/// # Examples
///
/// ```
/// use bookworld::domain::authors_text;
///
/// assert_eq!(authors_text(&[]), "unknown");
/// let authors = vec!["Ann".to_string(), "Bob".to_string(), "Cy".to_string()];
/// assert_eq!(authors_text(&authors), "Ann, Bob and Cy");
/// ```
#[must_use]
pub fn authors_text(authors: &[String]) -> String {
    match authors {
        [] => "unknown".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Extracts the four-digit year prefix of a catalog date (`"1965-08-01"`).
///
/// Dates shorter than four characters are returned whole; absent or blank
/// dates become [`UNKNOWN_YEAR`].
#[must_use]
pub fn year_of(published_date: Option<&str>) -> String {
    match published_date.map(str::trim) {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => UNKNOWN_YEAR.to_string(),
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
