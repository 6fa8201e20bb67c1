//! Types shared by the web and news result trees

use serde::{Deserialize, Serialize};

/// Thumbnail attached to an image, video or news article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
}

/// Back-reference from ranking metadata to a result by its `id`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
