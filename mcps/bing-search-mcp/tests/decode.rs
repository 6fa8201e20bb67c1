//! Decoding tests against realistic Bing payloads
//!
//! Payloads are trimmed copies of v5.0 responses that only use fields the
//! result types know about, so re-encoding must reproduce them exactly.

use bing_search_mcp::bing::{decode, BingError};
use bing_search_mcp::{NewsSearchResult, WebSearchResult};
use serde_json::Value;

const WEB_PAYLOAD: &str = r#"{
  "_type": "SearchResponse",
  "webPages": {
    "webSearchUrl": "https://www.bing.com/search?q=red+panda",
    "totalEstimatedMatches": 2350000,
    "value": [
      {
        "id": "https://api.cognitive.microsoft.com/api/v5/#WebPages.0",
        "name": "Red panda - Wikipedia",
        "url": "https://en.wikipedia.org/wiki/Red_panda",
        "about": [{"name": "Red panda"}],
        "displayUrl": "https://en.wikipedia.org/wiki/Red_panda",
        "snippet": "The red panda is a small mammal native to the eastern Himalayas.",
        "dateLastCrawled": "2017-03-02T08:41:00"
      },
      {
        "id": "https://api.cognitive.microsoft.com/api/v5/#WebPages.1",
        "name": "Red Panda Network",
        "url": "https://www.redpandanetwork.org/",
        "displayUrl": "www.redpandanetwork.org",
        "snippet": "Protecting red pandas and their habitat.",
        "dateLastCrawled": "2017-03-01T11:12:00"
      }
    ]
  },
  "images": {
    "id": "https://api.cognitive.microsoft.com/api/v5/#Images",
    "readLink": "https://api.cognitive.microsoft.com/api/v5/images/search?q=red+panda",
    "webSearchUrl": "https://www.bing.com/images/search?q=red+panda",
    "isFamilyFriendly": true,
    "value": [
      {
        "name": "Red panda on a branch",
        "thumbnailUrl": "https://tse1.mm.bing.net/th?id=OIP.1",
        "contentUrl": "https://example.org/panda.jpg",
        "hostPageUrl": "https://example.org/pandas",
        "contentSize": "215669 B",
        "encodingFormat": "jpeg",
        "width": 1024,
        "height": 768,
        "thumbnail": {"width": 300, "height": 225}
      }
    ],
    "displayShoppingSourcesBadges": false,
    "displayRecipeSourcesBadges": true
  },
  "news": {
    "id": "https://api.cognitive.microsoft.com/api/v5/#News",
    "readLink": "https://api.cognitive.microsoft.com/api/v5/news/search?q=red+panda",
    "value": [
      {
        "name": "Zoo welcomes red panda cub",
        "url": "https://news.example.com/cub",
        "description": "A cub was born at the zoo this week.",
        "provider": [{"_type": "Organization", "name": "Example News"}],
        "datePublished": "2017-03-02T07:00:00"
      }
    ]
  },
  "videos": {
    "id": "https://api.cognitive.microsoft.com/api/v5/#Videos",
    "readLink": "https://api.cognitive.microsoft.com/api/v5/videos/search?q=red+panda",
    "isFamilyFriendly": true,
    "value": [
      {
        "name": "Red pandas playing in the snow",
        "webSearchUrl": "https://www.bing.com/videos/search?q=red+panda",
        "thumbnailUrl": "https://tse2.mm.bing.net/th?id=OVP.2",
        "datePublished": "2016-12-14T19:45:52",
        "publisher": [{"name": "YouTube"}],
        "contentUrl": "https://www.youtube.com/watch?v=abc",
        "hostPageUrl": "https://www.youtube.com/watch?v=abc",
        "encodingFormat": "h264",
        "width": 1280,
        "height": 720,
        "duration": "PT2M31S",
        "embedHtml": "<iframe></iframe>",
        "allowHttpsEmbed": true,
        "viewCount": 1234567,
        "thumbnail": {"width": 300, "height": 168},
        "allowMobileEmbed": true,
        "isSuperfresh": false
      }
    ]
  },
  "rankingResponse": {
    "mainline": {
      "items": [
        {"answerType": "WebPages", "resultIndex": 0, "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#WebPages.0"}},
        {"answerType": "Images", "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#Images"}},
        {"answerType": "WebPages", "resultIndex": 1, "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#WebPages.1"}},
        {"answerType": "News", "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#News"}}
      ]
    },
    "sidebar": {
      "items": [
        {"answerType": "Videos", "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#Videos"}}
      ]
    }
  },
  "sidebar": {
    "items": [
      {"answerType": "Videos", "value": {"id": "https://api.cognitive.microsoft.com/api/v5/#Videos"}}
    ]
  }
}"#;

const NEWS_PAYLOAD: &str = r#"{
  "_type": "News",
  "readLink": "https://api.cognitive.microsoft.com/api/v5/news/search?q=red+panda",
  "totalEstimatedMatches": 82,
  "sort": [
    {"name": "Best match", "id": "relevance", "isSelected": true, "url": "https://api.cognitive.microsoft.com/api/v5/news/search?q=red+panda"},
    {"name": "Most recent", "id": "date", "isSelected": false, "url": "https://api.cognitive.microsoft.com/api/v5/news/search?q=red+panda&sortby=date"}
  ],
  "value": [
    {
      "name": "Second-ranked by date but first by relevance",
      "url": "https://news.example.com/b",
      "image": {"contentUrl": "https://news.example.com/b.jpg", "thumbnail": {"contentUrl": "https://tse3.mm.bing.net/th?id=ON.b", "width": 700, "height": 466}},
      "description": "Article B.",
      "about": [{"name": "Red panda", "readLink": "https://api.cognitive.microsoft.com/api/v5/entities/abc"}],
      "provider": [{"_type": "Organization", "name": "Provider B"}],
      "datePublished": "2017-03-01T10:00:00",
      "category": "ScienceAndTechnology"
    },
    {
      "name": "Article A",
      "url": "https://news.example.com/a",
      "description": "Article A.",
      "provider": [{"_type": "Organization", "name": "Provider A"}],
      "datePublished": "2017-03-02T10:00:00"
    }
  ]
}"#;

#[test]
fn web_payload_round_trips() {
    let result: WebSearchResult = decode(WEB_PAYLOAD.as_bytes()).unwrap();

    let original: Value = serde_json::from_str(WEB_PAYLOAD).unwrap();
    let reencoded = serde_json::to_value(&result).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn news_payload_round_trips() {
    let result: NewsSearchResult = decode(NEWS_PAYLOAD.as_bytes()).unwrap();

    let original: Value = serde_json::from_str(NEWS_PAYLOAD).unwrap();
    let reencoded = serde_json::to_value(&result).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn mainline_order_is_preserved() {
    let result: WebSearchResult = decode(WEB_PAYLOAD.as_bytes()).unwrap();

    let items = result
        .ranking_response
        .and_then(|r| r.mainline)
        .and_then(|m| m.items)
        .unwrap();
    let order: Vec<(&str, Option<u32>)> = items
        .iter()
        .map(|i| (i.answer_type.as_deref().unwrap(), i.result_index))
        .collect();

    assert_eq!(
        order,
        vec![
            ("WebPages", Some(0)),
            ("Images", None),
            ("WebPages", Some(1)),
            ("News", None),
        ]
    );
}

#[test]
fn mainline_items_resolve_to_pages() {
    let result: WebSearchResult = decode(WEB_PAYLOAD.as_bytes()).unwrap();

    let items = result
        .ranking_response
        .as_ref()
        .and_then(|r| r.mainline.as_ref())
        .and_then(|m| m.items.as_ref())
        .unwrap();
    let third = items[2].value.as_ref().and_then(|v| v.id.as_deref()).unwrap();

    let page = result.page_by_id(third).unwrap();
    assert_eq!(page.name.as_deref(), Some("Red Panda Network"));
}

#[test]
fn news_order_is_preserved() {
    let result: NewsSearchResult = decode(NEWS_PAYLOAD.as_bytes()).unwrap();

    let names: Vec<&str> = result
        .articles()
        .iter()
        .map(|a| a.name.as_deref().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Second-ranked by date but first by relevance", "Article A"]
    );

    let sort_ids: Vec<&str> = result
        .sort
        .as_ref()
        .unwrap()
        .iter()
        .map(|s| s.id.as_deref().unwrap())
        .collect();
    assert_eq!(sort_ids, vec!["relevance", "date"]);
}

#[test]
fn news_nested_fields_decode() {
    let result: NewsSearchResult = decode(NEWS_PAYLOAD.as_bytes()).unwrap();
    assert_eq!(result.type_hint, "News");
    assert_eq!(result.total_estimated_matches, Some(82));

    let first = &result.articles()[0];
    let thumbnail = first
        .image
        .as_ref()
        .and_then(|i| i.thumbnail.as_ref())
        .unwrap();
    assert_eq!(thumbnail.width, Some(700));
    assert_eq!(
        first.about.as_ref().unwrap()[0].read_link.as_deref(),
        Some("https://api.cognitive.microsoft.com/api/v5/entities/abc")
    );
    assert_eq!(first.category.as_deref(), Some("ScienceAndTechnology"));

    let second = &result.articles()[1];
    assert!(second.image.is_none());
    assert!(second.category.is_none());
}

#[test]
fn missing_web_pages_is_absent() {
    let result: WebSearchResult =
        decode(br#"{"_type": "SearchResponse", "images": {"value": []}}"#).unwrap();

    assert!(result.web_pages.is_none());
    assert!(result.pages().is_empty());
    assert_eq!(result.images.unwrap().value, Some(vec![]));
}

#[test]
fn non_json_is_decode_error() {
    let result = decode::<WebSearchResult>(b"\x00\x01 not json at all");
    assert!(matches!(result, Err(BingError::Decode(_))));

    let result = decode::<NewsSearchResult>(b"<html></html>");
    assert!(matches!(result, Err(BingError::Decode(_))));
}
