//! NewsAPI client
//!
//! Queries the `everything` endpoint for recent English coverage of an
//! entity, newest first, over a trailing 30-day window.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use crate::error::NewsError;
use crate::types::{NewsApiResponse, RawArticle};

/// Days of history requested from the API
const SEARCH_WINDOW_DAYS: i64 = 30;

/// Source of raw candidate articles for the analysis pipeline
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `page_size` candidates matching `query`
    async fn fetch(&self, query: &str, page_size: usize) -> Result<Vec<RawArticle>, NewsError>;
}

/// NewsAPI (newsapi.org) client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://newsapi.org/v2")
    }

    /// Create a client against a custom endpoint
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent("NewsPulse/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Search recent English news for `query`
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, page_size: usize) -> Result<Vec<RawArticle>, NewsError> {
        if self.api_key.is_empty() {
            return Err(NewsError::InvalidConfig(
                "NEWS_API_KEY is not set".to_string(),
            ));
        }

        let now = Utc::now();
        let from = (now - Duration::days(SEARCH_WINDOW_DAYS))
            .format("%Y-%m-%d")
            .to_string();
        let to = now.format("%Y-%m-%d").to_string();
        let url = build_search_url(&self.base_url, query, page_size, &from, &to);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError { status, message });
        }

        let body: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        let articles: Vec<RawArticle> = body.articles.into_iter().map(RawArticle::from).collect();

        info!(
            "NewsAPI returned {} of {} candidates for '{}'",
            articles.len(),
            body.total_results,
            query
        );

        Ok(articles)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch(&self, query: &str, page_size: usize) -> Result<Vec<RawArticle>, NewsError> {
        self.search(query, page_size).await
    }
}

/// Build the `everything` search URL
fn build_search_url(
    base_url: &str,
    query: &str,
    page_size: usize,
    from: &str,
    to: &str,
) -> String {
    format!(
        "{}/everything?q={}&language=en&sortBy=publishedAt&pageSize={}&from={}&to={}",
        base_url,
        urlencoding::encode(query),
        page_size,
        from,
        to
    )
}
