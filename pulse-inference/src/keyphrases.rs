//! In-process keyphrase extraction
//!
//! Statistical extraction via YAKE, using one and two word phrases with
//! English stop-words and near-duplicate removal. Runs locally, so topic
//! extraction keeps working when every remote model is unreachable.

use std::collections::HashSet;

use async_trait::async_trait;
use yake_rust::{get_n_best, Config, StopWords};

use pulse_analysis::KeyphraseService;

const KEYPHRASE_NGRAMS: usize = 2;
const DEDUPLICATION_THRESHOLD: f64 = 0.9;
const MINIMUM_PHRASE_CHARS: usize = 3;

/// YAKE-backed [`KeyphraseService`]
pub struct YakeKeyphrases {
    stopwords: StopWords,
}

impl YakeKeyphrases {
    pub fn new() -> Self {
        let stopwords =
            StopWords::predefined("en").unwrap_or_else(|| StopWords::custom(HashSet::new()));
        Self { stopwords }
    }
}

impl Default for YakeKeyphrases {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyphraseService for YakeKeyphrases {
    async fn extract(&self, text: &str, top_n: usize) -> anyhow::Result<Vec<(String, f64)>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let config = Config {
            ngrams: KEYPHRASE_NGRAMS,
            remove_duplicates: true,
            deduplication_threshold: DEDUPLICATION_THRESHOLD,
            minimum_chars: MINIMUM_PHRASE_CHARS,
            ..Config::default()
        };

        let results = get_n_best(top_n, text, &self.stopwords, &config);

        // YAKE scores are lower-is-better; invert so higher means more
        // relevant while keeping the extraction order.
        Ok(results
            .into_iter()
            .map(|item| {
                let relevance = 1.0 / (1.0 + item.score);
                (item.keyword, relevance)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_lowercased_short_phrases() {
        let service = YakeKeyphrases::new();
        let phrases = service
            .extract(
                "Acme Corporation launched a new artificial intelligence product for the global market.",
                5,
            )
            .await
            .unwrap();

        assert!(!phrases.is_empty());
        assert!(phrases.len() <= 5);
        for (phrase, relevance) in &phrases {
            assert!(phrase.split_whitespace().count() <= KEYPHRASE_NGRAMS);
            assert_eq!(phrase.to_lowercase(), *phrase);
            assert!(*relevance > 0.0 && *relevance <= 1.0);
        }
    }

    #[tokio::test]
    async fn phrases_arrive_most_relevant_first() {
        let service = YakeKeyphrases::new();
        let phrases = service
            .extract(
                "Solar energy adoption accelerated in India as panel prices fell and storage technology improved.",
                5,
            )
            .await
            .unwrap();

        for pair in phrases.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[tokio::test]
    async fn respects_requested_count() {
        let service = YakeKeyphrases::new();
        let phrases = service
            .extract("Regulators approved the merger after a lengthy antitrust review.", 2)
            .await
            .unwrap();
        assert!(phrases.len() <= 2);
    }

    #[tokio::test]
    async fn blank_text_yields_no_phrases() {
        let service = YakeKeyphrases::new();
        let phrases = service.extract("   ", 5).await.unwrap();
        assert!(phrases.is_empty());
    }
}
