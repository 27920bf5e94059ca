//! Maximal Marginal Relevance selection.
//!
//! Iteratively picks the candidate maximizing
//! `λ·relevance(c) − (1−λ)·max_sim(c, selected)`, where relevance is the
//! rerank score and max_sim is the highest embedding cosine similarity to
//! any already-selected candidate. Without this stage, highly relevant but
//! near-duplicate chunks (adjacent slices of one paragraph) crowd out
//! diverse coverage.

use folio_core::models::Candidate;

use super::similarity::cosine_similarity;

/// Select up to `top_n` candidates by iterative MMR.
///
/// `lambda = 1.0` degenerates to greedy top-N by rerank score;
/// `lambda = 0.0` maximizes novelty after the first pick. The first pick
/// is always the most relevant candidate. Ties keep the earlier candidate
/// in the (deterministically ordered) input.
pub fn select(candidates: Vec<Candidate>, lambda: f64, top_n: usize) -> Vec<Candidate> {
    if top_n == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let mut remaining = candidates;
    let mut selected: Vec<Candidate> = Vec::with_capacity(top_n.min(remaining.len()));

    while selected.len() < top_n && !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (idx, candidate) in remaining.iter().enumerate() {
            let score = if selected.is_empty() {
                candidate.relevance()
            } else {
                let redundancy = selected
                    .iter()
                    .map(|s| cosine_similarity(&candidate.chunk.embedding, &s.chunk.embedding))
                    .fold(0.0f64, f64::max);
                lambda * candidate.relevance() - (1.0 - lambda) * redundancy
            };
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        selected.push(remaining.remove(best_idx));
    }

    selected
}
