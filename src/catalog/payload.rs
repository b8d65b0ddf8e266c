//! Catalog wire format.
//!
//! Only the fields Bookworld consumes are modelled. Required fields (`totalItems`,
//! each item's `id`, `volumeInfo` and `title`) are plain fields so that serde
//! rejects the whole payload when one is missing. Optional fields accept both
//! absence and `null`.

use serde::Deserialize;

use super::markup::strip_html;
use crate::domain::book::{UNKNOWN_CATEGORY, UNKNOWN_DATE};
use crate::domain::{year_of, BookDetails, BookSummary, ResultPage};

/// Response of a volume search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesPayload {
    pub total_items: u64,
    /// Omitted by the catalog when nothing matched.
    #[serde(default)]
    pub items: Option<Vec<VolumePayload>>,
}

/// A single volume, either as a search item or as a detail response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePayload {
    pub id: String,
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub preview_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

impl From<VolumesPayload> for ResultPage {
    fn from(payload: VolumesPayload) -> Self {
        Self {
            items: payload
                .items
                .unwrap_or_default()
                .into_iter()
                .map(BookSummary::from)
                .collect(),
            total_items: payload.total_items,
        }
    }
}

impl From<VolumePayload> for BookSummary {
    fn from(volume: VolumePayload) -> Self {
        let info = volume.volume_info;
        Self {
            id: volume.id,
            year: year_of(info.published_date.as_deref()),
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            thumbnail_url: info
                .image_links
                .and_then(|links| links.thumbnail)
                .unwrap_or_default(),
            categories: info.categories.unwrap_or_default(),
        }
    }
}

impl From<VolumePayload> for BookDetails {
    fn from(volume: VolumePayload) -> Self {
        let info = volume.volume_info;
        let links = info.image_links.unwrap_or_default();
        Self {
            id: volume.id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            page_count: info.page_count,
            rating: info.average_rating,
            date: info
                .published_date
                .filter(|date| !date.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            description: info.description.as_deref().map(strip_html).unwrap_or_default(),
            thumbnail_url: links
                .medium
                .or(links.small)
                .or(links.thumbnail)
                .unwrap_or_default(),
            categories: info
                .categories
                .filter(|categories| !categories.is_empty())
                .unwrap_or_else(|| vec![UNKNOWN_CATEGORY.to_string()]),
            link: info.preview_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_optional_fields() {
        let volume: VolumePayload =
            serde_json::from_str(r#"{"id":"x1","volumeInfo":{"title":"Dune","authors":null}}"#).unwrap();
        let summary = BookSummary::from(volume);

        assert_eq!(summary.title, "Dune");
        assert!(summary.authors.is_empty());
        assert_eq!(summary.year, "unknown");
        assert_eq!(summary.thumbnail_url, "");
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn details_prefer_largest_image_and_default_text() {
        let volume: VolumePayload = serde_json::from_str(
            r#"{"id":"x1","volumeInfo":{
                "title":"Dune",
                "imageLinks":{"thumbnail":"t","small":"s"},
                "categories":[],
                "description":"<p>Spice <b>must</b> flow</p>"
            }}"#,
        )
        .unwrap();
        let details = BookDetails::from(volume);

        assert_eq!(details.thumbnail_url, "s");
        assert_eq!(details.date, UNKNOWN_DATE);
        assert_eq!(details.categories, vec![UNKNOWN_CATEGORY.to_string()]);
        assert_eq!(details.description, "Spice must flow");
        assert_eq!(details.link, None);
    }

    #[test]
    fn missing_items_is_an_empty_page() {
        let payload: VolumesPayload = serde_json::from_str(r#"{"kind":"books#volumes","totalItems":0}"#).unwrap();
        let page = ResultPage::from(payload);
        assert!(page.is_empty());
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn item_without_title_is_rejected() {
        let result = serde_json::from_str::<VolumesPayload>(
            r#"{"totalItems":2,"items":[{"id":"a","volumeInfo":{"title":"A"}},{"id":"b","volumeInfo":{}}]}"#,
        );
        assert!(result.is_err());
    }
}
