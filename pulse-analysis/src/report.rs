//! Comparative report assembly
//!
//! Ties the aggregation stages together into the structure the service layer
//! serializes.

use pulse_core::{Article, ComparativeReport};

use crate::coverage::coverage_differences;
use crate::overlap::topic_overlap;
use crate::sentiment::{aggregate_sentiment, display_name, final_verdict, localized_summary};

/// Run every comparative stage over the analyzed batch
pub fn build_comparative_report(articles: &[Article], entity: &str) -> ComparativeReport {
    let distribution = aggregate_sentiment(articles);
    let name = display_name(entity, articles);
    let final_sentiment_analysis = final_verdict(&distribution, &name);
    let localized = localized_summary(&distribution);

    ComparativeReport {
        distribution,
        coverage_differences: coverage_differences(articles),
        topic_overlap: topic_overlap(articles),
        final_sentiment_analysis,
        localized_summary: localized,
    }
}
