//! Annotated article structures

use serde::{Deserialize, Serialize};

use crate::Sentiment;

/// A fully annotated news article, ready for comparative analysis
///
/// Produced by the enrichment pipeline (summarization, sentiment
/// classification, topic extraction) and owned transiently per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline
    #[serde(rename = "Title")]
    pub title: String,
    /// Cleaned, possibly model-generated summary
    #[serde(rename = "Summary")]
    pub summary: String,
    /// Sentiment label for the summary
    #[serde(rename = "Sentiment", default)]
    pub sentiment: Sentiment,
    /// Ordered topic phrases, first entry is the article's primary focus
    #[serde(rename = "Topics", default)]
    pub topics: Vec<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            sentiment: Sentiment::default(),
            topics: Vec::new(),
        }
    }
}
