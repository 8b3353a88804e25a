//! Core types for the News Pulse terminal
//!
//! This crate defines the shared data structures used across the pipeline:
//! the closed sentiment label set, annotated articles, and the comparative
//! report returned to API callers.

pub mod article;
pub mod report;
pub mod sentiment;
pub mod text;

pub use article::Article;
pub use report::{
    CompanyReport, ComparativeReport, ComparativeScore, CoverageDifference, TopicOverlap,
};
pub use sentiment::{Sentiment, SentimentDistribution};
pub use text::{title_case, truncate_chars};
