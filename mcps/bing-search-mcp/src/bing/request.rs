//! Request construction for the Bing search endpoints
//!
//! Building a request is pure: no I/O and no failure. Bad values surface
//! later as an API error from the service.

use url::form_urlencoded;

use crate::config::BingConfig;

/// Header carrying the API key; the key never goes into the URL
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

const API_PREFIX: &str = "/bing/v5.0";

/// Which Bing endpoint a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Web,
    News,
}

impl SearchKind {
    pub fn path(&self) -> &'static str {
        match self {
            SearchKind::Web => "/search",
            SearchKind::News => "/news/search",
        }
    }

    /// Parameters fixed by the kind, placed between `count` and `mkt`
    fn fixed_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            SearchKind::Web => &[],
            SearchKind::News => &[("freshness", "Month")],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchKind::Web => "web",
            SearchKind::News => "news",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully built GET request
#[derive(Clone, PartialEq, Eq)]
pub struct BingRequest {
    pub kind: SearchKind,
    pub url: String,
    /// Header name/value pairs, in insertion order
    pub headers: Vec<(String, String)>,
}

impl BingRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// The subscription key header is masked
impl std::fmt::Debug for BingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case(SUBSCRIPTION_KEY_HEADER) {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        f.debug_struct("BingRequest")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("headers", &headers)
            .finish()
    }
}

/// Build the request for one search call
///
/// The query is form-urlencoded, so spaces become `+` and reserved
/// characters are percent-encoded.
pub fn build_request(kind: SearchKind, query: &str, count: u32, config: &BingConfig) -> BingRequest {
    let count = count.to_string();

    let mut params = form_urlencoded::Serializer::new(String::new());
    params
        .append_pair("q", query)
        .append_pair("offset", "0")
        .append_pair("count", &count);
    for (name, value) in kind.fixed_params() {
        params.append_pair(name, value);
    }
    params.append_pair("mkt", &config.market);

    let url = format!(
        "{}{}{}?{}",
        config.endpoint.trim_end_matches('/'),
        API_PREFIX,
        kind.path(),
        params.finish()
    );

    BingRequest {
        kind,
        url,
        headers: vec![(
            SUBSCRIPTION_KEY_HEADER.to_string(),
            config.subscription_key.clone(),
        )],
    }
}
