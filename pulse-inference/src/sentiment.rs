//! Three-label sentiment classification over a hosted endpoint
//!
//! Posts up to the first 512 characters of a summary to a Hugging Face style
//! text-classification model and maps the top-scored label onto the closed
//! [`Sentiment`] set. Labels outside the known set read as Neutral.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use pulse_core::{text::truncate_chars, Sentiment};

use crate::error::{InferenceError, Result};

/// Default sentiment model
pub const DEFAULT_SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment";

const MAX_CLASSIFIER_CHARS: usize = 512;

/// Assigns a sentiment label to a piece of text
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text`. Empty text is Neutral without a call.
    async fn classify(&self, text: &str) -> Result<Sentiment>;
}

#[derive(Debug, Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoredLabel {
    label: String,
    score: f64,
}

/// Client for a Hugging Face style text-classification endpoint
#[derive(Debug, Clone)]
pub struct HfSentimentClassifier {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    model: String,
}

impl HfSentimentClassifier {
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("NewsPulse/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            api_token,
            model: model.into(),
        }
    }

    #[instrument(skip(self, text))]
    async fn request_labels(&self, text: &str) -> Result<Vec<Vec<ScoredLabel>>> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let mut request = self
            .client
            .post(&url)
            .json(&ClassificationRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            InferenceError::RequestFailed(format!("classification request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiError { status, message });
        }

        // The endpoint wraps each input's labels in a nested array.
        response
            .json()
            .await
            .map_err(|e| InferenceError::ParseError(format!("classification response: {}", e)))
    }
}

#[async_trait]
impl SentimentClassifier for HfSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment> {
        if text.is_empty() {
            return Ok(Sentiment::Neutral);
        }

        let rows = self
            .request_labels(truncate_chars(text, MAX_CLASSIFIER_CHARS))
            .await?;

        let top = top_label(rows).ok_or_else(|| {
            InferenceError::ParseError("empty classification response".to_string())
        })?;
        let sentiment = Sentiment::from_label(&top.label).unwrap_or_default();
        debug!(label = %top.label, %sentiment, "Classified text");
        Ok(sentiment)
    }
}

/// Highest-scored label of the first classified input
fn top_label(rows: Vec<Vec<ScoredLabel>>) -> Option<ScoredLabel> {
    rows.into_iter()
        .next()?
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(label: &str, score: f64) -> ScoredLabel {
        ScoredLabel {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn top_label_picks_highest_score() {
        let rows = vec![vec![
            scored("LABEL_0", 0.1),
            scored("LABEL_2", 0.8),
            scored("LABEL_1", 0.1),
        ]];
        let top = top_label(rows).unwrap();
        assert_eq!(top.label, "LABEL_2");
    }

    #[test]
    fn top_label_requires_at_least_one_row() {
        assert!(top_label(vec![]).is_none());
        assert!(top_label(vec![vec![]]).is_none());
    }

    #[test]
    fn unknown_labels_map_to_neutral() {
        let top = top_label(vec![vec![scored("LABEL_9", 0.9)]]).unwrap();
        assert_eq!(
            Sentiment::from_label(&top.label).unwrap_or_default(),
            Sentiment::Neutral
        );
    }
}
