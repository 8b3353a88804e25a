//! Model collaborator clients for News Pulse
//!
//! Hosted summarization and sentiment endpoints, in-process keyphrase
//! extraction and speech synthesis, each behind a trait so the orchestration
//! layer can run against fixtures.
//!
//! # Features
//!
//! - **Summarization**: Hugging Face style endpoint with input normalization
//!   and summary polish
//! - **Sentiment**: three-label classification mapped onto the closed
//!   [`pulse_core::Sentiment`] set
//! - **Keyphrases**: local YAKE extraction backing the topic pipeline
//! - **Speech**: translate-style TTS returning MP3 bytes

pub mod error;
pub mod keyphrases;
pub mod sentiment;
pub mod summarizer;
pub mod tts;

pub use error::{InferenceError, Result};
pub use keyphrases::YakeKeyphrases;
pub use sentiment::{HfSentimentClassifier, SentimentClassifier, DEFAULT_SENTIMENT_MODEL};
pub use summarizer::{
    HfSummarizer, Summarizer, DEFAULT_HF_API_BASE, DEFAULT_SUMMARIZATION_MODEL,
};
pub use tts::{GoogleTts, SpeechSynthesizer, DEFAULT_TTS_API_BASE};
