//! Embeddings and semantic relevance ranking for News Pulse
//!
//! This crate scores retrieved articles against the queried entity using
//! vector embeddings from an OpenAI-compatible endpoint.
//!
//! ## Features
//! - Generate embeddings for entity names and article text
//! - Calculate cosine similarity between embeddings
//! - Rank article batches by relevance with an explicit fallback marker

pub mod client;
pub mod error;
pub mod ranker;
pub mod similarity;

pub use client::{EmbeddingConfig, EmbeddingProvider, OpenAiEmbeddings};
pub use error::{EmbeddingError, Result};
pub use ranker::{RankOutcome, RankedBatch, RelevanceRanker};
pub use similarity::cosine_similarity;
