//! Wire types for the NewsAPI `everything` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// NewsAPI search response envelope
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: String,
    /// Total matches available server-side
    #[serde(rename = "totalResults", default)]
    pub total_results: usize,
    /// Returned page of articles
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// Publisher attribution block
#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One article as returned by NewsAPI
///
/// Every field except `url` is nullable in practice, so everything is
/// optional here and normalized in [`RawArticle::from`].
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    pub source: Option<NewsApiSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

/// A retrieved candidate article, normalized but not yet cleaned or ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    /// Headline, "No Title" when the feed omitted one
    pub title: String,
    /// Feed-provided description, may be empty
    #[serde(default)]
    pub description: String,
    /// Leading article content, may be empty
    #[serde(default)]
    pub content: String,
    /// Article URL
    #[serde(default)]
    pub url: String,
    /// Publisher name
    #[serde(default)]
    pub source: String,
    /// Publication timestamp when the feed provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RawArticle {
    /// Text blob the relevance ranker embeds for this candidate
    pub fn ranking_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
            .trim()
            .to_string()
    }
}

impl From<NewsApiArticle> for RawArticle {
    fn from(article: NewsApiArticle) -> Self {
        let title = match article.title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => "No Title".to_string(),
        };
        Self {
            title,
            description: article.description.unwrap_or_default(),
            content: article.content.unwrap_or_default(),
            url: article.url.unwrap_or_default(),
            source: article
                .source
                .and_then(|s| s.name)
                .unwrap_or_default(),
            published_at: article.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newsapi_payload() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": "reuters", "name": "Reuters"},
                "author": "Staff",
                "title": "Acme posts record revenue",
                "description": "Quarterly revenue rose 20 percent.",
                "url": "https://example.com/a",
                "urlToImage": null,
                "publishedAt": "2026-08-20T09:30:00Z",
                "content": "Acme Corp reported..."
            }]
        }"#;
        let response: NewsApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.articles.len(), 1);

        let raw = RawArticle::from(response.articles.into_iter().next().unwrap());
        assert_eq!(raw.title, "Acme posts record revenue");
        assert_eq!(raw.source, "Reuters");
        assert!(raw.published_at.is_some());
    }

    #[test]
    fn missing_title_defaults() {
        let article = NewsApiArticle {
            source: None,
            author: None,
            title: Some("   ".to_string()),
            description: None,
            url: None,
            url_to_image: None,
            published_at: None,
            content: None,
        };
        let raw = RawArticle::from(article);
        assert_eq!(raw.title, "No Title");
        assert!(raw.description.is_empty());
    }

    #[test]
    fn ranking_text_joins_title_and_description() {
        let raw = RawArticle {
            title: "Acme rises".to_string(),
            description: "Shares up sharply.".to_string(),
            content: String::new(),
            url: String::new(),
            source: String::new(),
            published_at: None,
        };
        assert_eq!(raw.ranking_text(), "Acme rises. Shares up sharply.");

        let bare = RawArticle {
            description: String::new(),
            ..raw
        };
        assert_eq!(bare.ranking_text(), "Acme rises.");
    }
}
