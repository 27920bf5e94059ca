//! 3-phase consolidation pipeline orchestrator.
//!
//! Phase 1: parent-coverage replacement → Phase 2: adjacency merge →
//! Phase 3: content floor. Output is ordered by descending score, then
//! ascending work id, then ascending start line.

pub mod phase1_parent_coverage;
pub mod phase2_adjacency;
pub mod phase3_content_floor;

use std::cmp::Ordering;

use tracing::info;

use folio_core::config::ConsolidationConfig;
use folio_core::errors::FolioResult;
use folio_core::models::{Candidate, ConsolidatedContext};
use folio_core::traits::{IChunkStore, ISourceReader};

/// Run the full consolidation pipeline over the selected candidates.
pub fn run_pipeline(
    selected: &[Candidate],
    store: &dyn IChunkStore,
    source: &dyn ISourceReader,
    config: &ConsolidationConfig,
) -> FolioResult<Vec<ConsolidatedContext>> {
    let contexts =
        phase1_parent_coverage::replace_by_parent_coverage(selected, store, source, config)?;
    info!(contexts = contexts.len(), "phase 1: parent-coverage replacement complete");

    let merged = phase2_adjacency::merge_adjacent(contexts, source, config);
    info!(contexts = merged.len(), "phase 2: adjacency merge complete");

    let mut surviving = phase3_content_floor::apply_content_floor(merged, config.min_content_length);
    info!(contexts = surviving.len(), "phase 3: content floor applied");

    sort_contexts(&mut surviving);
    Ok(surviving)
}

/// Final ordering: score descending, then work id ascending, then start
/// line ascending.
pub fn sort_contexts(contexts: &mut [ConsolidatedContext]) {
    contexts.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.work_id.cmp(&b.work_id))
            .then_with(|| a.start_line.cmp(&b.start_line))
    });
}
