//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines the per-variant dense and lexical lists into a single fused
//! ranking without requiring score normalization across retrieval methods.
//! A chunk found independently by several lists accumulates a strictly
//! higher score than one found by a single list at the same ranks.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use folio_core::errors::FolioResult;
use folio_core::models::Candidate;
use folio_core::traits::IChunkStore;

use super::hybrid::{Modality, RankedList};

#[derive(Debug, Default)]
struct Accum {
    fused: f64,
    list_hits: usize,
    dense_rank: Option<usize>,
    lexical_rank: Option<usize>,
}

/// Fuse ranked lists into at most `top_k` candidates.
///
/// `rrf_k` is the smoothing constant; higher values reduce the influence
/// of top-ranked items from any single list. Ties are broken by presence
/// in more lists, then lower best original rank, then ascending chunk id,
/// so the output is fully deterministic.
pub fn fuse(
    lists: &[RankedList],
    store: &dyn IChunkStore,
    rrf_k: u32,
    top_k: usize,
) -> FolioResult<Vec<Candidate>> {
    let mut accum: HashMap<String, Accum> = HashMap::new();

    for list in lists {
        for (pos, (chunk_id, _backend_score)) in list.hits.iter().enumerate() {
            let rank = pos + 1;
            let entry = accum.entry(chunk_id.clone()).or_default();
            entry.fused += 1.0 / (rrf_k as f64 + rank as f64);
            entry.list_hits += 1;
            let slot = match list.modality {
                Modality::Dense => &mut entry.dense_rank,
                Modality::Lexical => &mut entry.lexical_rank,
            };
            *slot = Some(slot.map_or(rank, |r| r.min(rank)));
        }
    }

    let ids: Vec<String> = accum.keys().cloned().collect();
    let chunks = store.get_bulk(&ids)?;
    if chunks.len() < ids.len() {
        debug!(
            missing = ids.len() - chunks.len(),
            "fused chunk ids not present in store; skipped"
        );
    }

    let mut candidates: Vec<Candidate> = chunks
        .into_iter()
        .map(|chunk| {
            let acc = &accum[&chunk.id];
            let mut candidate = Candidate::from_chunk(chunk);
            candidate.fused_score = acc.fused;
            candidate.boosted_score = acc.fused;
            candidate.list_hits = acc.list_hits;
            candidate.dense_rank = acc.dense_rank;
            candidate.lexical_rank = acc.lexical_rank;
            candidate
        })
        .collect();

    sort_deterministic(&mut candidates, |c| c.fused_score);
    candidates.truncate(top_k);
    Ok(candidates)
}

/// Sort candidates by a score descending with the fusion tie-break chain:
/// more contributing lists, lower best rank, ascending chunk id.
pub fn sort_deterministic<F>(candidates: &mut [Candidate], score_of: F)
where
    F: Fn(&Candidate) -> f64,
{
    candidates.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.list_hits.cmp(&a.list_hits))
            .then_with(|| a.best_rank().cmp(&b.best_rank()))
            .then_with(|| a.chunk.id.cmp(&b.chunk.id))
    });
}
