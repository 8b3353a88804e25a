//! Semantic relevance ranking for retrieved articles
//!
//! Reorders a candidate batch by cosine similarity between the query entity
//! and each candidate's text. The sort is stable, so candidates with equal
//! scores keep their retrieval order, and the full batch is returned; callers
//! truncate to their own limit afterwards.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::EmbeddingProvider;
use crate::similarity::cosine_similarity;

/// Which path produced a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOutcome {
    /// Candidates were reordered by embedding similarity
    Semantic,
    /// Embedding was unavailable, retrieval order kept as-is
    RetrievalOrder,
}

/// A ranked batch together with the path that produced it
#[derive(Debug)]
pub struct RankedBatch<T> {
    pub items: Vec<T>,
    pub outcome: RankOutcome,
}

/// Orders candidates by semantic closeness to a query entity
pub struct RelevanceRanker {
    provider: Arc<dyn EmbeddingProvider>,
}

impl RelevanceRanker {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Rank `items` by similarity of `text_of(item)` to `query`, best first
    ///
    /// Never fails: if any embedding call errors, the batch comes back in
    /// retrieval order with [`RankOutcome::RetrievalOrder`] so the caller can
    /// tell the two paths apart.
    pub async fn rank<T>(
        &self,
        query: &str,
        items: Vec<T>,
        text_of: impl Fn(&T) -> String,
    ) -> RankedBatch<T> {
        if items.is_empty() {
            return RankedBatch {
                items,
                outcome: RankOutcome::Semantic,
            };
        }

        let query_embedding = match self.provider.embed(query).await {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!("Query embedding failed, keeping retrieval order: {}", e);
                return RankedBatch {
                    items,
                    outcome: RankOutcome::RetrievalOrder,
                };
            }
        };

        let mut scores = Vec::with_capacity(items.len());
        for item in &items {
            match self.provider.embed(&text_of(item)).await {
                Ok(embedding) => scores.push(cosine_similarity(&query_embedding, &embedding)),
                Err(e) => {
                    warn!("Candidate embedding failed, keeping retrieval order: {}", e);
                    return RankedBatch {
                        items,
                        outcome: RankOutcome::RetrievalOrder,
                    };
                }
            }
        }

        let mut pairs: Vec<(f64, T)> = scores.into_iter().zip(items).collect();
        // Vec::sort_by is stable: equal scores preserve retrieval order.
        pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        if let Some((top, _)) = pairs.first() {
            debug!("Ranked {} candidates, top score {:.3}", pairs.len(), top);
        }

        RankedBatch {
            items: pairs.into_iter().map(|(_, item)| item).collect(),
            outcome: RankOutcome::Semantic,
        }
    }
}
