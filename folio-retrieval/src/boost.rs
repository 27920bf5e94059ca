//! Entity boosting: promote candidates whose text mentions query entities.
//!
//! Entities are high-precision signals — a chunk naming the asked-about
//! person or place should rise even if fusion rank alone did not place it
//! highly. The bonus is additive and stacks per distinct matched entity.

use std::collections::HashSet;

use tracing::debug;

use folio_core::models::Candidate;

use crate::search::rrf_fusion::sort_deterministic;

/// Apply the entity boost and re-sort.
///
/// Matching is a case-insensitive substring scan of the candidate's
/// pre-enrichment text. Each distinct entity matched adds `entity_boost`
/// to the fused score.
pub fn boost_entities(
    mut candidates: Vec<Candidate>,
    entities: &[String],
    entity_boost: f64,
) -> Vec<Candidate> {
    let needles: HashSet<String> = entities
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    if needles.is_empty() || entity_boost == 0.0 {
        return candidates;
    }

    let mut boosted_count = 0usize;
    for candidate in candidates.iter_mut() {
        let haystack = candidate.text.to_lowercase();
        let matched = needles.iter().filter(|n| haystack.contains(n.as_str())).count();
        candidate.boosted_score = candidate.fused_score + matched as f64 * entity_boost;
        if matched > 0 {
            boosted_count += 1;
        }
    }
    debug!(boosted = boosted_count, entities = needles.len(), "entity boost applied");

    sort_deterministic(&mut candidates, |c| c.boosted_score);
    candidates
}
