//! News retrieval for the News Pulse terminal
//!
//! Features:
//! - NewsAPI `everything` search over a trailing 30-day window
//! - Normalized candidate articles with title/description fallbacks
//! - Description cleanup shared by summarization and topic extraction

pub mod clean;
pub mod client;
pub mod error;
pub mod types;

pub use clean::clean_description;
pub use client::{NewsApiClient, NewsProvider};
pub use error::NewsError;
pub use types::{NewsApiArticle, NewsApiResponse, RawArticle};
