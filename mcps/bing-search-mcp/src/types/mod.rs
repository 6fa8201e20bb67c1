//! Typed result trees for Bing search responses
//!
//! These types mirror the JSON returned by the Bing Web Search and Bing News
//! Search APIs. Every field is optional unless the service always sends it,
//! so a missing key decodes to `None` rather than a zero value. Lists keep
//! the order the service returned them in; that order is the relevance
//! ranking.

pub mod common;
pub mod news;
pub mod web;

pub use common::{ResultRef, Thumbnail};
pub use news::{NewsAbout, NewsImage, NewsResult, NewsSearchResult, Provider, SortType};
pub use web::{
    About, Image, Images, News, Publisher, RankingGroup, RankingItem, RankingResponse, Sidebar,
    SidebarItem, Video, Videos, WebPage, WebPages, WebSearchResult,
};
