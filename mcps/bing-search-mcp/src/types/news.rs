//! News Search response types
//!
//! Also home to [`NewsResult`], which the web search response reuses for its
//! `news` vertical.

use serde::{Deserialize, Serialize};

use super::common::Thumbnail;

/// Response of the `/news/search` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSearchResult {
    /// Response type tag, always sent by the service (e.g. "News")
    #[serde(rename = "_type")]
    pub type_hint: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated_matches: Option<u64>,

    /// Sort options the service offers for this query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortType>>,

    /// Articles in ranked order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<NewsResult>>,
}

impl NewsSearchResult {
    /// Articles in ranked order, empty when the service sent none
    pub fn articles(&self) -> &[NewsResult] {
        self.value.as_deref().unwrap_or_default()
    }

    /// The sort option the service applied, if it flagged one
    pub fn selected_sort(&self) -> Option<&SortType> {
        self.sort
            .as_deref()?
            .iter()
            .find(|s| s.is_selected == Some(true))
    }
}

/// One available sort order for a news query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A single news article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<NewsImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entities the article is about, with links back into the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Vec<NewsAbout>>,

    /// Publishers of the article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Vec<Provider>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Image attached to a news article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsAbout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,
}

/// Organization that published an article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_is_required() {
        let result = serde_json::from_str::<NewsSearchResult>(r#"{"readLink": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_selected_sort() {
        let result: NewsSearchResult = serde_json::from_str(
            r#"{
                "_type": "News",
                "sort": [
                    {"name": "Best match", "id": "relevance", "isSelected": true},
                    {"name": "Most recent", "id": "date", "isSelected": false}
                ]
            }"#,
        )
        .unwrap();

        let selected = result.selected_sort().unwrap();
        assert_eq!(selected.id.as_deref(), Some("relevance"));
    }

    #[test]
    fn test_articles_empty_when_absent() {
        let result: NewsSearchResult = serde_json::from_str(r#"{"_type": "News"}"#).unwrap();
        assert!(result.value.is_none());
        assert!(result.articles().is_empty());
        assert!(result.selected_sort().is_none());
    }

    #[test]
    fn test_provider_keeps_type_tag() {
        let provider: Provider =
            serde_json::from_str(r#"{"_type": "Organization", "name": "Reuters"}"#).unwrap();
        assert_eq!(provider.type_hint.as_deref(), Some("Organization"));
        assert_eq!(provider.name.as_deref(), Some("Reuters"));
    }
}
