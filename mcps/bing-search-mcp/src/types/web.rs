//! Web Search response types

use serde::{Deserialize, Serialize};

use super::common::{ResultRef, Thumbnail};
use super::news::NewsResult;

/// Response of the `/search` endpoint
///
/// Each vertical is present only when the service returned it for the query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchResult {
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_pages: Option<WebPages>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<News>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Videos>,

    /// Where each answer should be placed on a results page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_response: Option<RankingResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Sidebar>,
}

impl WebSearchResult {
    /// Ranked web pages, empty when the vertical is absent
    pub fn pages(&self) -> &[WebPage] {
        self.web_pages
            .as_ref()
            .and_then(|p| p.value.as_deref())
            .unwrap_or_default()
    }

    /// Look up a web page by the id a ranking item refers to
    pub fn page_by_id(&self, id: &str) -> Option<&WebPage> {
        self.pages().iter().find(|p| p.id.as_deref() == Some(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated_matches: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<WebPage>>,
}

/// A ranked web page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Vec<About>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_crawled: Option<String>,
}

/// Entity tag attached to a web page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_family_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_shopping_sources_badges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_recipe_sources_badges: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_page_url: Option<String>,
    /// Human-readable size, e.g. "215669 B"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_page_display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

/// News vertical embedded in a web search response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<NewsResult>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Videos {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_family_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Video>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Vec<Publisher>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_page_display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// ISO 8601 duration, e.g. "PT2M31S"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_https_embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_mobile_embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superfresh: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Placement metadata for the answers in a web search response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankingResponse {
    /// Answers for the main column, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mainline: Option<RankingGroup>,

    /// Answers to feature above the mainline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pole: Option<RankingGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<RankingGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankingGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RankingItem>>,
}

/// One placement slot: which answer, and optionally which result within it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItem {
    /// Vertical the item belongs to, e.g. "WebPages" or "News"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,

    /// Index into the answer's `value` list; absent means the whole answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ResultRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sidebar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SidebarItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ResultRef>,
}
