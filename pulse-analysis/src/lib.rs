//! Comparative analysis over classified news articles
//!
//! Pure aggregation stages plus the keyphrase-driven topic extractor. The
//! stages consume [`pulse_core::Article`] batches and produce the comparative
//! structures the report endpoint serializes.
//!
//! # Features
//!
//! - **Topic extraction**: keyphrase service results filtered, entity-anchored
//!   and padded from the source text
//! - **Sentiment aggregation**: fixed three-label distribution over a batch
//! - **Topic overlap**: case-insensitive common/unique split across articles
//! - **Coverage differences**: pairwise narrative lines with sentiment impact
//! - **Final verdict**: rule-based English synthesis plus a Hindi count
//!   summary

pub mod coverage;
pub mod overlap;
pub mod report;
pub mod sentiment;
pub mod topics;

pub use coverage::{coverage_differences, detect_focus, sentiment_shift, FocusCategory};
pub use overlap::topic_overlap;
pub use report::build_comparative_report;
pub use sentiment::{aggregate_sentiment, display_name, final_verdict, localized_summary};
pub use topics::{ExtractedTopics, KeyphraseService, TopicExtractor, TopicSource, DEFAULT_TOP_N};
