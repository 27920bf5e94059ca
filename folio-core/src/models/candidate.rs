use serde::{Deserialize, Serialize};

use super::chunk::Chunk;

/// A retrieval candidate, scoped to one pipeline run and never persisted
/// as-is.
///
/// Carries the chunk it refers to plus every score the pipeline computes
/// for it. `text` starts as a copy of `chunk.text` and may be widened by
/// the enricher; the chunk itself stays untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub chunk: Chunk,
    /// Working text used for scoring and display (possibly enriched).
    pub text: String,
    /// Best 1-based rank in any dense result list, if found by dense search.
    pub dense_rank: Option<usize>,
    /// Best 1-based rank in any lexical result list, if found by lexical search.
    pub lexical_rank: Option<usize>,
    /// Number of ranked lists (across modalities and query variants) that
    /// contained this chunk.
    pub list_hits: usize,
    /// RRF score from fusion.
    pub fused_score: f64,
    /// Fused score after entity boosting.
    pub boosted_score: f64,
    /// Cross-encoder relevance score; `None` until the reranker has run.
    /// A scored 0.0 (or a negative score) is a real relevance value, not
    /// an unset marker.
    pub rerank_score: Option<f64>,
}

impl Candidate {
    pub fn from_chunk(chunk: Chunk) -> Self {
        let text = chunk.text.clone();
        Self {
            chunk,
            text,
            dense_rank: None,
            lexical_rank: None,
            list_hits: 0,
            fused_score: 0.0,
            boosted_score: 0.0,
            rerank_score: None,
        }
    }

    /// Best rank this chunk achieved in any single result list.
    pub fn best_rank(&self) -> usize {
        match (self.dense_rank, self.lexical_rank) {
            (Some(d), Some(l)) => d.min(l),
            (Some(d), None) => d,
            (None, Some(l)) => l,
            (None, None) => usize::MAX,
        }
    }

    /// The most refined relevance signal available for this candidate:
    /// the rerank score once the reranker has run, otherwise the boosted
    /// fusion score. Consolidation orders contexts by this value.
    pub fn relevance(&self) -> f64 {
        self.rerank_score.unwrap_or(self.boosted_score)
    }
}
