//! Sentiment aggregation and the final verdict
//!
//! Both stages are total functions over the article batch: an empty batch
//! produces an all-zero distribution and the verdict falls back to a generic
//! subject, never an error.

use pulse_core::{Article, SentimentDistribution};

/// Tally sentiment labels across the batch, one increment per article
pub fn aggregate_sentiment(articles: &[Article]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for article in articles {
        distribution.record(article.sentiment);
    }
    distribution
}

/// Subject used in the verdict sentences
///
/// Prefers the queried entity, then the first word of the first article's
/// title, then a generic fallback.
pub fn display_name(entity: &str, articles: &[Article]) -> String {
    if !entity.is_empty() {
        return entity.to_string();
    }
    articles
        .first()
        .and_then(|article| article.title.split_whitespace().next())
        .unwrap_or("The company")
        .to_string()
}

/// Rule-based English verdict over the distribution
///
/// Branches are checked in order; the final branch is the default for every
/// distribution the first four do not claim.
pub fn final_verdict(distribution: &SentimentDistribution, name: &str) -> String {
    let total = distribution.total().max(1);
    let pos_ratio = distribution.positive as f64 / total as f64;
    let neg_ratio = distribution.negative as f64 / total as f64;

    if pos_ratio > 0.6 {
        format!(
            "Most news about {} is positive. Overall public perception seems optimistic.",
            name
        )
    } else if neg_ratio > 0.6 {
        format!(
            "Most news about {} is negative. There are notable concerns or challenges being reported.",
            name
        )
    } else if distribution.neutral > distribution.positive.max(distribution.negative) {
        format!(
            "The news about {} is mostly neutral. Public sentiment is calm and factual.",
            name
        )
    } else if distribution.positive.abs_diff(distribution.negative) <= 1 {
        format!(
            "The news about {} is mixed. Opinions are divided, and the situation is evolving.",
            name
        )
    } else {
        format!(
            "The news about {} is slightly positive. While some issues are mentioned, overall perception is optimistic.",
            name
        )
    }
}

/// Hindi count summary over the same distribution
pub fn localized_summary(distribution: &SentimentDistribution) -> String {
    let total = distribution.total().max(1);
    format!(
        "कुल {} समाचारों का विश्लेषण: सकारात्मक {}, नकारात्मक {}, तटस्थ {}।",
        total, distribution.positive, distribution.negative, distribution.neutral
    )
}
