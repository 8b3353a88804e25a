//! Comparative report structures
//!
//! Field names serialize to the human-readable keys consumed by the UI
//! (`"Sentiment Distribution"`, `"Coverage Differences"`, ...), while Rust
//! code keeps conventional snake_case access.

use serde::{Deserialize, Serialize};

use crate::{Article, SentimentDistribution};

/// One adjacent-article contrast: what each article focuses on, and what the
/// sentiment transition between them implies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

/// Partition of all topics into shared vs. per-article-exclusive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicOverlap {
    /// Topics appearing in at least two distinct articles, title-cased
    #[serde(rename = "Common Topics")]
    pub common_topics: Vec<String>,
    /// Per-article topics not shared with any other article, original order,
    /// indexed like the input article list
    #[serde(rename = "Unique Topics Per Article")]
    pub unique_topics_per_article: Vec<Vec<String>>,
}

/// Distribution, coverage narratives and topic overlap for one batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativeScore {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlap,
}

/// Output of the comparative-analysis core for one article batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparativeReport {
    /// Sentiment tally over the batch
    pub distribution: SentimentDistribution,
    /// Adjacent-pair narratives, `max(0, n-1)` entries
    pub coverage_differences: Vec<CoverageDifference>,
    /// Common vs. unique topic partition
    pub topic_overlap: TopicOverlap,
    /// Rule-based English verdict
    pub final_sentiment_analysis: String,
    /// Hindi count summary, input to speech synthesis
    pub localized_summary: String,
}

impl ComparativeReport {
    /// Split into the score block and the two narrative strings
    pub fn into_parts(self) -> (ComparativeScore, String, String) {
        let score = ComparativeScore {
            sentiment_distribution: self.distribution,
            coverage_differences: self.coverage_differences,
            topic_overlap: self.topic_overlap,
        };
        (score, self.final_sentiment_analysis, self.localized_summary)
    }
}

/// Complete API response for one analyzed entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    /// Title-cased entity name
    #[serde(rename = "Company")]
    pub company: String,
    /// Annotated articles, most relevant first
    #[serde(rename = "Articles")]
    pub articles: Vec<Article>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative_sentiment_score: ComparativeScore,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment_analysis: String,
    /// Path of the synthesized Hindi audio, empty when synthesis failed
    #[serde(rename = "Audio")]
    pub audio: String,
    /// How many articles backed this report
    #[serde(rename = "Note")]
    pub note: String,
}
