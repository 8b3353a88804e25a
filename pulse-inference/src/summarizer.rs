//! Abstractive summarization over a hosted inference endpoint
//!
//! Wraps a Hugging Face style `POST /models/{model}` endpoint. Input text is
//! normalized before the call: outlet names are stripped and the title is
//! prepended when the body does not already mention it. The returned summary
//! is polished for display.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use pulse_core::text::truncate_chars;

use crate::error::{InferenceError, Result};

/// Hosted inference API root used when no override is configured
pub const DEFAULT_HF_API_BASE: &str = "https://api-inference.huggingface.co";

/// Default summarization model
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

const MAX_INPUT_CHARS: usize = 1000;
const SUMMARY_MAX_LENGTH: u32 = 100;
const SUMMARY_MIN_LENGTH: u32 = 40;

/// Produces an abstractive summary of an article body
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`, seeding context from `title` when the body does not
    /// already mention it. Empty text yields an empty summary without a call.
    async fn summarize(&self, text: &str, title: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary_text: String,
}

/// Client for a Hugging Face style summarization endpoint
#[derive(Debug, Clone)]
pub struct HfSummarizer {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    model: String,
}

impl HfSummarizer {
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
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
    async fn request_summary(&self, text: &str) -> Result<String> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: SUMMARY_MAX_LENGTH,
                min_length: SUMMARY_MIN_LENGTH,
                do_sample: false,
            },
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            InferenceError::RequestFailed(format!("summarization request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiError { status, message });
        }

        let payload: Vec<SummaryPayload> = response
            .json()
            .await
            .map_err(|e| InferenceError::ParseError(format!("summarization response: {}", e)))?;

        payload
            .into_iter()
            .next()
            .map(|entry| entry.summary_text)
            .ok_or_else(|| InferenceError::ParseError("empty summarization response".to_string()))
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize(&self, text: &str, title: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let input = prepare_input(text, title);
        let raw = self.request_summary(&input).await?;
        let summary = polish_summary(raw.trim());
        debug!(chars = summary.len(), "Generated summary");
        Ok(summary)
    }
}

fn outlet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(Reuters|BBC|NDTV|The Hindu|Economic Times|LiveMint)+")
            .expect("static pattern")
    })
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

fn dangling_punctuation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+([.,!?])").expect("static pattern"))
}

/// Normalize an article body and prepend the title when it adds context
fn prepare_input(text: &str, title: &str) -> String {
    let stripped = outlet_pattern().replace_all(text, "");
    let collapsed = whitespace_pattern().replace_all(&stripped, " ");
    let cleaned = collapsed.trim();

    let seeded = if !title.is_empty() && !cleaned.to_lowercase().contains(&title.to_lowercase()) {
        format!("{}. {}", title, cleaned)
    } else {
        cleaned.to_string()
    };

    truncate_chars(&seeded, MAX_INPUT_CHARS).to_string()
}

/// Tighten punctuation spacing and capitalize the opening letter
fn polish_summary(summary: &str) -> String {
    let tightened = dangling_punctuation_pattern().replace_all(summary, "$1");
    let mut chars = tightened.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_input_strips_outlet_names() {
        let input = prepare_input("Reuters reports that Acme profit rose.", "");
        assert_eq!(input, "reports that Acme profit rose.");
    }

    #[test]
    fn prepare_input_strips_outlets_case_insensitively() {
        let input = prepare_input("According to REUTERS and ndtv, shares fell.", "");
        assert_eq!(input, "According to and , shares fell.");
    }

    #[test]
    fn prepare_input_prepends_missing_title() {
        let input = prepare_input("Profit rose sharply this quarter.", "Acme Q3 results");
        assert_eq!(input, "Acme Q3 results. Profit rose sharply this quarter.");
    }

    #[test]
    fn prepare_input_skips_title_already_in_body() {
        let input = prepare_input("acme q3 results show profit rose.", "Acme Q3 results");
        assert_eq!(input, "acme q3 results show profit rose.");
    }

    #[test]
    fn prepare_input_caps_length() {
        let body = "word ".repeat(400);
        let input = prepare_input(&body, "");
        assert_eq!(input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn polish_summary_tightens_punctuation_and_capitalizes() {
        let polished = polish_summary("the company grew . profits rose , too");
        assert_eq!(polished, "The company grew. profits rose, too");
    }

    #[test]
    fn polish_summary_handles_empty_input() {
        assert_eq!(polish_summary(""), "");
    }
}
