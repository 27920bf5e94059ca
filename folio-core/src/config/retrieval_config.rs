use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Per-variant result limit for dense (vector) search.
    pub dense_limit: usize,
    /// Per-variant result limit for lexical (BM25-style) search.
    pub lexical_limit: usize,
    /// RRF smoothing constant k in `1/(k + rank)`.
    pub rrf_k: u32,
    /// Fused list length after RRF.
    pub top_k_rrf: usize,
    /// Additive bonus per distinct matched query entity.
    pub entity_boost: f64,
    /// Minimum word count for a candidate to survive filtering; 0 disables.
    pub min_word_count: usize,
    /// Minimum character count for a candidate to survive filtering; 0 disables.
    pub min_char_count: usize,
    /// Candidates shorter than this (chars) get their window enriched.
    pub min_content_length: usize,
    /// Lines to read above the chunk when enriching.
    pub enrich_lines_above: u32,
    /// Lines to read below the chunk when enriching.
    pub enrich_lines_below: u32,
    /// Cross-encoder batch size.
    pub reranker_batch_size: usize,
    /// Cross-encoder input truncation length.
    pub reranker_max_length: usize,
    /// MMR relevance/diversity trade-off in [0, 1].
    pub mmr_lambda: f64,
    /// Final candidate count after MMR selection.
    pub top_n_final: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            dense_limit: defaults::DEFAULT_DENSE_LIMIT,
            lexical_limit: defaults::DEFAULT_LEXICAL_LIMIT,
            rrf_k: defaults::DEFAULT_RRF_K,
            top_k_rrf: defaults::DEFAULT_TOP_K_RRF,
            entity_boost: defaults::DEFAULT_ENTITY_BOOST,
            min_word_count: defaults::DEFAULT_MIN_WORD_COUNT,
            min_char_count: defaults::DEFAULT_MIN_CHAR_COUNT,
            min_content_length: defaults::DEFAULT_MIN_CONTENT_LENGTH,
            enrich_lines_above: defaults::DEFAULT_ENRICH_LINES_ABOVE,
            enrich_lines_below: defaults::DEFAULT_ENRICH_LINES_BELOW,
            reranker_batch_size: defaults::DEFAULT_RERANKER_BATCH_SIZE,
            reranker_max_length: defaults::DEFAULT_RERANKER_MAX_LENGTH,
            mmr_lambda: defaults::DEFAULT_MMR_LAMBDA,
            top_n_final: defaults::DEFAULT_TOP_N_FINAL,
        }
    }
}
