//! Report Service
//!
//! Orchestrates the full company analysis pipeline: fetch candidates, rank
//! them by relevance, enrich the survivors (summary, sentiment, topics),
//! build the comparative report and synthesize the Hindi audio summary.
//! Finished reports are cached per company and limit.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use pulse_analysis::{build_comparative_report, TopicExtractor, DEFAULT_TOP_N};
use pulse_core::{title_case, truncate_chars, Article, CompanyReport, Sentiment};
use pulse_embedding::RelevanceRanker;
use pulse_inference::{SentimentClassifier, SpeechSynthesizer, Summarizer};
use pulse_news::{clean_description, NewsError, NewsProvider, RawArticle};

/// Language the localized audio summary is spoken in
const AUDIO_LANGUAGE: &str = "hi";

/// Characters of cleaned source text kept when summarization fails
const FALLBACK_SUMMARY_CHARS: usize = 150;

/// Cache entry with expiration
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Configuration for ReportService
#[derive(Debug, Clone)]
pub struct ReportServiceConfig {
    /// Directory the synthesized MP3 reports are written to
    pub audio_dir: PathBuf,
    /// Cache TTL for finished reports (in seconds)
    pub report_cache_ttl_secs: u64,
    /// Maximum cached entries
    pub max_cache_entries: usize,
}

impl Default for ReportServiceConfig {
    fn default() -> Self {
        Self {
            audio_dir: PathBuf::from("outputs/audio"),
            report_cache_ttl_secs: 300, // News coverage doesn't shift faster than this
            max_cache_entries: 100,
        }
    }
}

/// Service producing complete company news reports
pub struct ReportService {
    news: Arc<dyn NewsProvider>,
    /// Relevance ranker ordering candidates against the company query
    ranker: RelevanceRanker,
    summarizer: Arc<dyn Summarizer>,
    classifier: Arc<dyn SentimentClassifier>,
    topics: TopicExtractor,
    speech: Arc<dyn SpeechSynthesizer>,
    config: ReportServiceConfig,
    /// Cache for finished reports, keyed by lowercased company and limit
    report_cache: RwLock<HashMap<String, CacheEntry<CompanyReport>>>,
}

impl ReportService {
    /// Create a new ReportService
    pub fn new(
        news: Arc<dyn NewsProvider>,
        ranker: RelevanceRanker,
        summarizer: Arc<dyn Summarizer>,
        classifier: Arc<dyn SentimentClassifier>,
        topics: TopicExtractor,
        speech: Arc<dyn SpeechSynthesizer>,
        config: ReportServiceConfig,
    ) -> Self {
        info!(
            "Initializing ReportService (audio dir: {}, report TTL: {}s)",
            config.audio_dir.display(),
            config.report_cache_ttl_secs
        );
        Self {
            news,
            ranker,
            summarizer,
            classifier,
            topics,
            speech,
            config,
            report_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Build the full report for `company`, keeping at most `limit` articles
    ///
    /// Fetches a wider candidate pool than requested so the relevance ranking
    /// has something to discard, then analyzes only the best `limit` articles.
    #[instrument(skip(self))]
    pub async fn analyze(
        &self,
        company: &str,
        limit: usize,
    ) -> Result<CompanyReport, ReportServiceError> {
        let cache_key = format!("{}:{}", company.to_lowercase(), limit);

        // Check cache first
        {
            let cache = self.report_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if !entry.is_expired() {
                    debug!("Returning cached report for '{}'", company);
                    return Ok(entry.data.clone());
                }
            }
        }

        let raw = self
            .news
            .fetch(company, limit.saturating_mul(3))
            .await?;
        if raw.is_empty() {
            return Err(ReportServiceError::NoArticles {
                company: company.to_string(),
            });
        }

        let candidates = raw.len();
        let ranked = self
            .ranker
            .rank(company, raw, RawArticle::ranking_text)
            .await;
        let mut kept = ranked.items;
        kept.truncate(limit);
        info!(
            "Keeping {} of {} candidates for '{}' ({:?} ranking)",
            kept.len(),
            candidates,
            company,
            ranked.outcome
        );

        let note = if kept.len() < limit {
            format!(
                "Only {} relevant articles found for '{}'.",
                kept.len(),
                company
            )
        } else {
            format!("{} articles fetched for '{}'.", kept.len(), company)
        };

        let mut articles = Vec::with_capacity(kept.len());
        for candidate in kept {
            articles.push(self.analyze_article(candidate, company).await);
        }

        let comparative = build_comparative_report(&articles, company);
        let (comparative_sentiment_score, final_sentiment_analysis, localized_summary) =
            comparative.into_parts();

        let audio = self.synthesize_audio(company, &localized_summary).await;

        let report = CompanyReport {
            company: title_case(company),
            articles,
            comparative_sentiment_score,
            final_sentiment_analysis,
            audio,
            note,
        };

        // Cache the finished report
        {
            let mut cache = self.report_cache.write().await;
            if cache.len() >= self.config.max_cache_entries {
                cache.retain(|_, entry| !entry.is_expired());
            }
            cache.insert(
                cache_key,
                CacheEntry::new(
                    report.clone(),
                    Duration::from_secs(self.config.report_cache_ttl_secs),
                ),
            );
        }

        Ok(report)
    }

    /// Run one ranked candidate through the enrichment stages
    ///
    /// Stage failures degrade instead of aborting the report: a failed
    /// summary falls back to truncated source text, a failed classification
    /// reads as neutral, and topic extraction falls back internally.
    async fn analyze_article(&self, candidate: RawArticle, company: &str) -> Article {
        let text = clean_description(&candidate);

        let summary = match self.summarizer.summarize(&text, &candidate.title).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summarization failed for '{}': {}", candidate.title, e);
                format!("{}...", truncate_chars(&text, FALLBACK_SUMMARY_CHARS))
            }
        };

        let sentiment = match self.classifier.classify(&summary).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                warn!("Classification failed for '{}': {}", candidate.title, e);
                Sentiment::Neutral
            }
        };

        let extracted = self.topics.extract(&summary, company, DEFAULT_TOP_N).await;
        debug!(
            "Topics for '{}' ({:?}): {:?}",
            candidate.title, extracted.source, extracted.topics
        );

        let mut article = Article::new(candidate.title, summary);
        article.sentiment = sentiment;
        article.topics = extracted.topics;
        article
    }

    /// Render the localized summary to an MP3 under the configured audio dir
    ///
    /// Audio is a best-effort extra: any failure logs a warning and yields an
    /// empty path instead of failing the report.
    async fn synthesize_audio(&self, company: &str, localized_summary: &str) -> String {
        let filename = format!("{}_report.mp3", company.to_lowercase().replace(' ', "_"));
        let path = self.config.audio_dir.join(filename);

        let audio = match self
            .speech
            .synthesize(localized_summary, AUDIO_LANGUAGE)
            .await
        {
            Ok(audio) => audio,
            Err(e) => {
                warn!("Speech synthesis failed for '{}': {}", company, e);
                return String::new();
            }
        };

        if let Err(e) = write_audio(&path, &audio).await {
            warn!("Could not write audio to {}: {}", path.display(), e);
            return String::new();
        }

        info!("Wrote {} byte audio report to {}", audio.len(), path.display());
        path.display().to_string()
    }

    /// Drop expired reports from the cache
    pub async fn cleanup_cache(&self) {
        let mut cache = self.report_cache.write().await;
        cache.retain(|_, entry| !entry.is_expired());
    }
}

async fn write_audio(path: &Path, audio: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, audio).await
}

/// Errors surfaced by [`ReportService::analyze`]
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    /// Candidate retrieval failed outright
    #[error("news fetch failed: {0}")]
    News(#[from] NewsError),

    /// The query matched nothing at the news provider
    #[error("no articles found for '{company}'")]
    NoArticles {
        /// Company the caller asked about
        company: String,
    },
}
