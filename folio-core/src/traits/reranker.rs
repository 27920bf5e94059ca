use crate::errors::FolioResult;

/// Cross-encoder-style relevance scorer, treated as an opaque scoring
/// function.
///
/// Scores `(query, passage)` pairs; higher means more relevant. Batching
/// and input truncation are driven by the retrieval config, not by the
/// implementation.
pub trait IReranker: Send + Sync {
    /// Score one batch of passages against the query. Must return exactly
    /// one score per passage, in input order.
    fn score_batch(&self, query: &str, passages: &[String]) -> FolioResult<Vec<f64>>;
}
