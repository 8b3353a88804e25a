//! Speech synthesis for the localized report summary
//!
//! Fetches MP3 bytes from a translate-style TTS endpoint. Callers decide
//! where the audio lands on disk.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{InferenceError, Result};

/// Public translate TTS endpoint used when no override is configured
pub const DEFAULT_TTS_API_BASE: &str = "https://translate.google.com/translate_tts";

/// Renders text into spoken audio
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language`, returning encoded MP3 bytes
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;
}

/// Client for a translate-style TTS endpoint
#[derive(Debug, Clone)]
pub struct GoogleTts {
    client: Client,
    base_url: String,
}

impl GoogleTts {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("NewsPulse/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleTts {
    fn default() -> Self {
        Self::new(DEFAULT_TTS_API_BASE)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let url = build_tts_url(&self.base_url, text, language);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(format!("TTS request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiError { status, message });
        }

        let audio = response.bytes().await.map_err(|e| {
            InferenceError::RequestFailed(format!("failed to read TTS audio: {}", e))
        })?;

        debug!(bytes = audio.len(), language, "Fetched synthesized audio");
        Ok(audio.to_vec())
    }
}

fn build_tts_url(base: &str, text: &str, language: &str) -> String {
    format!(
        "{}?ie=UTF-8&q={}&tl={}&client=tw-ob",
        base,
        urlencoding::encode(text),
        urlencoding::encode(language),
    )
}
