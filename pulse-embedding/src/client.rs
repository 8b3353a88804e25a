//! OpenAI-compatible embedding client

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::embeddings::{CreateEmbeddingRequest, EmbeddingInput},
};
use async_trait::async_trait;
use tracing::debug;

use crate::error::{EmbeddingError, Result};

/// Anything that can turn text into a vector
///
/// The production implementation is [`OpenAiEmbeddings`]; tests substitute
/// deterministic providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for arbitrary text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Settings for the embedding endpoint
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// API key for the endpoint
    pub api_key: String,
    /// Custom base URL for OpenAI-compatible servers, `None` for api.openai.com
    pub api_base: Option<String>,
    /// Embedding model name
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: None,
            model: "text-embedding-3-small".to_string(),
        }
    }
}

/// Embedding client over the OpenAI `/embeddings` API shape
pub struct OpenAiEmbeddings {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiEmbeddings {
    /// Create a new embedding client
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);
        if let Some(base) = config.api_base {
            openai_config = openai_config.with_api_base(base);
        }
        Self {
            client: Client::with_config(openai_config),
            model: config.model,
        }
    }

    /// Get the embedding model name
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        let request = CreateEmbeddingRequest {
            model: self.model.clone(),
            input: EmbeddingInput::String(text.to_string()),
            encoding_format: None,
            dimensions: None,
            user: None,
        };

        let response = self.client.embeddings().create(request).await?;

        if response.data.is_empty() {
            return Err(EmbeddingError::Config(
                "No embeddings returned from API".to_string(),
            ));
        }

        let embedding = response.data[0].embedding.clone();
        debug!(
            "Generated embedding: dimension={}, model={}",
            embedding.len(),
            self.model
        );

        Ok(embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.generate_embedding(text).await
    }
}
