//! Cross-encoder re-scoring in fixed-size batches.
//!
//! Batches are dispatched concurrently, but scores are reassembled in the
//! original candidate order — MMR tie-breaking is order-sensitive.
//! Reranker failure is fatal for the run: there is no safe relevance
//! fallback for the selection stage.

use rayon::prelude::*;
use tracing::debug;

use folio_core::errors::{FolioResult, RetrievalError};
use folio_core::models::Candidate;
use folio_core::traits::IReranker;

/// Score every candidate's `(query, text)` pair and store the result in
/// `rerank_score`. The candidate order is preserved.
pub fn rerank(
    mut candidates: Vec<Candidate>,
    query_text: &str,
    scorer: &dyn IReranker,
    batch_size: usize,
    max_length: usize,
) -> FolioResult<Vec<Candidate>> {
    if candidates.is_empty() {
        return Ok(candidates);
    }

    let passages: Vec<String> = candidates
        .iter()
        .map(|c| truncate_chars(&c.text, max_length))
        .collect();

    let batch_results: Vec<Vec<f64>> = passages
        .par_chunks(batch_size.max(1))
        .map(|batch| scorer.score_batch(query_text, batch))
        .collect::<FolioResult<Vec<_>>>()?;

    let scores: Vec<f64> = batch_results.into_iter().flatten().collect();
    if scores.len() != candidates.len() {
        return Err(RetrievalError::RerankFailed {
            reason: format!(
                "reranker returned {} scores for {} passages",
                scores.len(),
                candidates.len()
            ),
        }
        .into());
    }

    for (candidate, score) in candidates.iter_mut().zip(scores) {
        candidate.rerank_score = Some(score);
    }
    debug!(candidates = candidates.len(), "rerank complete");
    Ok(candidates)
}

/// Truncate to at most `max_chars` characters (a character-count proxy for
/// the model's token limit). 0 means no truncation.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
