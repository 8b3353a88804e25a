//! Sentiment labels and their aggregate distribution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label attached to an article
///
/// The label set is closed: upstream classifiers emit arbitrary strings,
/// which are mapped onto these three variants at the boundary via
/// [`Sentiment::from_label`]. Anything unrecognized becomes [`Sentiment::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    /// Favorable coverage
    Positive,
    /// Unfavorable coverage
    Negative,
    /// Factual or indeterminate coverage
    #[default]
    Neutral,
}

impl Sentiment {
    /// Parse a classifier output label
    ///
    /// Accepts both human-readable labels and the raw `label_N` ids emitted
    /// by sentiment models. Returns `None` for anything unrecognized so the
    /// caller decides the default.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "label_0" | "negative" => Some(Sentiment::Negative),
            "label_1" | "neutral" => Some(Sentiment::Neutral),
            "label_2" | "positive" => Some(Sentiment::Positive),
            _ => None,
        }
    }

    /// Display name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-shape tally of sentiment labels across a batch of articles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// Number of positive articles
    #[serde(rename = "Positive")]
    pub positive: usize,
    /// Number of negative articles
    #[serde(rename = "Negative")]
    pub negative: usize,
    /// Number of neutral articles
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentDistribution {
    /// Increment the count for one label
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Total number of articles counted
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_maps_model_ids() {
        assert_eq!(Sentiment::from_label("label_0"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("label_1"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("label_2"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("LABEL_2"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label(" Positive "), Some(Sentiment::Positive));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(Sentiment::from_label("5 stars"), None);
        assert_eq!(Sentiment::from_label(""), None);
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn distribution_records_and_totals() {
        let mut dist = SentimentDistribution::default();
        dist.record(Sentiment::Positive);
        dist.record(Sentiment::Positive);
        dist.record(Sentiment::Negative);
        dist.record(Sentiment::Neutral);
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn distribution_serializes_with_report_keys() {
        let dist = SentimentDistribution {
            positive: 1,
            negative: 2,
            neutral: 3,
        };
        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["Positive"], 1);
        assert_eq!(json["Negative"], 2);
        assert_eq!(json["Neutral"], 3);
    }
}
