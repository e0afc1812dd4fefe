//! Data models for search queries, articles and parsed search results.
//!
//! This module defines the entities the rest of the application works with:
//! - [`SearchQuery`]: What the user asked for (topic and page size)
//! - [`Article`]: One news item, with required fields guaranteed present
//! - [`SearchResult`]: The parsed response for one query
//!
//! The NewsAPI wire format (camelCase, nested `source` object) is only seen by
//! the private `Raw*` structs. [`SearchResult::from_json`] is the single place
//! where a response body becomes typed data, so a missing field surfaces as a
//! [`FetchError::Malformed`] instead of failing later during rendering.

use crate::error::FetchError;
use serde::Deserialize;

/// A single search request, built fresh from user input each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text topic sent as the `q` parameter.
    pub topic: String,
    /// Page size sent as `pageSize`. Also caps the number of parsed articles.
    pub max_results: u8,
}

impl SearchQuery {
    pub const DEFAULT_MAX_RESULTS: u8 = 5;
    pub const MIN_RESULTS: u8 = 1;
    pub const MAX_RESULTS: u8 = 10;

    pub fn new(topic: impl Into<String>, max_results: u8) -> Self {
        Self {
            topic: topic.into(),
            max_results,
        }
    }
}

/// One news item returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Publication timestamp exactly as the API sent it (ISO 8601).
    pub published_at: String,
    pub source_name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: String,
}

/// Parsed response for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Total matches the API reports, not just the ones on this page.
    pub total_results: u64,
    pub articles: Vec<Article>,
}

impl SearchResult {
    /// Parse a `200 OK` response body.
    ///
    /// At most `max_results` articles are kept, in the order the API returned
    /// them, even if the server ignored `pageSize`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] if the body is not JSON or if any
    /// article lacks `title`, `publishedAt`, `source.name` or `url`.
    pub fn from_json(body: &str, max_results: u8) -> Result<Self, FetchError> {
        let raw: RawSearchResponse = serde_json::from_str(body)?;
        let articles = raw
            .articles
            .into_iter()
            .take(usize::from(max_results))
            .map(Article::from)
            .collect();

        Ok(SearchResult {
            total_results: raw.total_results,
            articles,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Error envelope NewsAPI sends with non-200 responses.
///
/// ```json
/// {"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid..."}
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort parse; `None` when the body is not the NewsAPI envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchResponse {
    total_results: u64,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    source: RawSource,
    author: Option<String>,
    title: String,
    description: Option<String>,
    url: String,
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title,
            published_at: raw.published_at,
            source_name: raw.source.name,
            author: raw.author.filter(|a| !a.trim().is_empty()),
            description: raw.description,
            url: raw.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "ok",
        "totalResults": 100,
        "articles": [
            {
                "source": {"id": "reuters", "name": "Reuters"},
                "author": "Jane Roe",
                "title": "Chipmakers rally",
                "description": "Shares rose sharply.",
                "url": "https://example.com/a",
                "urlToImage": null,
                "publishedAt": "2025-05-06T14:30:00Z",
                "content": "..."
            },
            {
                "source": {"id": null, "name": "BBC News"},
                "author": null,
                "title": "New phone launched",
                "description": null,
                "url": "https://example.com/b",
                "publishedAt": "2025-05-06T12:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample_response() {
        let result = SearchResult::from_json(SAMPLE, 5).unwrap();
        assert_eq!(result.total_results, 100);
        assert_eq!(result.articles.len(), 2);

        let first = &result.articles[0];
        assert_eq!(first.title, "Chipmakers rally");
        assert_eq!(first.source_name, "Reuters");
        assert_eq!(first.author.as_deref(), Some("Jane Roe"));
        assert_eq!(first.published_at, "2025-05-06T14:30:00Z");

        let second = &result.articles[1];
        assert_eq!(second.author, None);
        assert_eq!(second.description, None);
    }

    #[test]
    fn test_parse_truncates_to_max_results() {
        let result = SearchResult::from_json(SAMPLE, 1).unwrap();
        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].source_name, "Reuters");
    }

    #[test]
    fn test_parse_missing_articles_field_is_empty() {
        let result = SearchResult::from_json(r#"{"status":"ok","totalResults":0}"#, 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_missing_title_is_malformed() {
        let body = r#"{
            "totalResults": 1,
            "articles": [{
                "source": {"name": "CNN"},
                "url": "https://example.com",
                "publishedAt": "2025-05-06T12:00:00Z"
            }]
        }"#;
        let err = SearchResult::from_json(body, 5).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_missing_source_name_is_malformed() {
        let body = r#"{
            "totalResults": 1,
            "articles": [{
                "source": {"id": "cnn"},
                "title": "T",
                "url": "https://example.com",
                "publishedAt": "2025-05-06T12:00:00Z"
            }]
        }"#;
        assert!(SearchResult::from_json(body, 5).is_err());
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        let err = SearchResult::from_json("<html>oops</html>", 5).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_blank_author_becomes_none() {
        let body = r#"{
            "totalResults": 1,
            "articles": [{
                "source": {"name": "CNN"},
                "author": "  ",
                "title": "T",
                "description": "D",
                "url": "https://example.com",
                "publishedAt": "2025-05-06T12:00:00Z"
            }]
        }"#;
        let result = SearchResult::from_json(body, 5).unwrap();
        assert_eq!(result.articles[0].author, None);
    }

    #[test]
    fn test_api_error_body_parse() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let parsed = ApiErrorBody::parse(body).unwrap();
        assert_eq!(parsed.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(parsed.message.as_deref(), Some("Your API key is invalid."));

        assert!(ApiErrorBody::parse("Not Found").is_none());
    }

    #[test]
    fn test_search_query_new() {
        let q = SearchQuery::new("cricket", 3);
        assert_eq!(q.topic, "cricket");
        assert_eq!(q.max_results, 3);
    }
}
