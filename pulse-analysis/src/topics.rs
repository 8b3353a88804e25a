//! Bounded topic extraction with deterministic fallback
//!
//! Topics come from a keyphrase service when it is available, cleaned of
//! navigation noise and anchored on the queried entity. When the service
//! fails, or returns too little, topics are drawn from a plain token scan of
//! the article text, so an article never loses its topic list to a flaky
//! collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use pulse_core::title_case;

/// Phrases that are navigation debris rather than topics
const NAV_NOISE: [&str; 10] = [
    "href", "rss", "http", "amp", "www", "cbm", "ol", "read", "click", "article",
];

/// Default number of topics kept per article
pub const DEFAULT_TOP_N: usize = 3;

/// Candidate keyphrase extraction, ordered most important first
#[async_trait]
pub trait KeyphraseService: Send + Sync {
    /// Extract up to `top_n` scored 1-2 word phrases from `text`
    async fn extract(&self, text: &str, top_n: usize) -> anyhow::Result<Vec<(String, f64)>>;
}

/// Which path produced a topic list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSource {
    /// Keyphrase service candidates, possibly padded from the text
    Keyphrase,
    /// Token scan of the text after a service failure
    TokenScan,
}

/// A topic list together with the path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTopics {
    pub topics: Vec<String>,
    pub source: TopicSource,
}

/// Derives a bounded, title-cased topic list per article
pub struct TopicExtractor {
    keyphrases: Arc<dyn KeyphraseService>,
}

impl TopicExtractor {
    pub fn new(keyphrases: Arc<dyn KeyphraseService>) -> Self {
        Self { keyphrases }
    }

    /// Extract up to `top_n` topics for one article
    ///
    /// `entity` tokens found in the text are pushed to the front of the list
    /// so the queried name stays visible in the report. Empty input yields an
    /// empty list without calling the service.
    pub async fn extract(&self, text: &str, entity: &str, top_n: usize) -> ExtractedTopics {
        if text.is_empty() {
            return ExtractedTopics {
                topics: Vec::new(),
                source: TopicSource::Keyphrase,
            };
        }

        match self.keyphrases.extract(text, top_n).await {
            Ok(candidates) => {
                let mut topics: Vec<String> = candidates
                    .iter()
                    .filter(|(phrase, _)| !is_nav_noise(phrase))
                    .map(|(phrase, _)| title_case(phrase))
                    .collect();
                anchor_entity(&mut topics, entity, text);
                pad_from_text(&mut topics, text, top_n);
                topics.truncate(top_n);
                ExtractedTopics {
                    topics,
                    source: TopicSource::Keyphrase,
                }
            }
            Err(e) => {
                warn!("Keyphrase extraction failed, scanning tokens: {}", e);
                let mut topics = Vec::new();
                pad_from_text(&mut topics, text, top_n);
                ExtractedTopics {
                    topics,
                    source: TopicSource::TokenScan,
                }
            }
        }
    }
}

/// Exact lowercase match against the navigation-noise blocklist
fn is_nav_noise(phrase: &str) -> bool {
    let lower = phrase.to_lowercase();
    NAV_NOISE.iter().any(|noise| *noise == lower)
}

/// Push entity-name tokens found in the text to the front of the topic list
fn anchor_entity(topics: &mut Vec<String>, entity: &str, text: &str) {
    let text_lower = text.to_lowercase();
    for token in entity.split_whitespace() {
        if text_lower.contains(&token.to_lowercase()) {
            let titled = title_case(token);
            if !topics.contains(&titled) {
                topics.insert(0, titled);
            }
        }
    }
}

/// Append title-cased alphabetic tokens (length >= 3) from the text until the
/// list reaches `top_n` or tokens run out, skipping entries already present
fn pad_from_text(topics: &mut Vec<String>, text: &str, top_n: usize) {
    if topics.len() >= top_n {
        return;
    }
    for token in alphabetic_tokens(text) {
        let titled = title_case(token);
        if !topics.contains(&titled) {
            topics.push(titled);
        }
        if topics.len() >= top_n {
            break;
        }
    }
}

/// Runs of ASCII letters of length >= 3, in order of appearance
fn alphabetic_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= 3)
}
