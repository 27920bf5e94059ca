//! Phase 3: content floor.
//!
//! Drops consolidated contexts whose merged text is still too short to be
//! worth a citation slot. This floor is distinct from the retrieval-stage
//! threshold — it applies after merging.

use tracing::debug;

use folio_core::models::ConsolidatedContext;

/// Drop contexts with merged text shorter than `min_content_length`
/// characters. 0 disables the floor.
pub fn apply_content_floor(
    contexts: Vec<ConsolidatedContext>,
    min_content_length: usize,
) -> Vec<ConsolidatedContext> {
    if min_content_length == 0 {
        return contexts;
    }

    let before = contexts.len();
    let surviving: Vec<ConsolidatedContext> = contexts
        .into_iter()
        .filter(|c| c.merged_text.chars().count() >= min_content_length)
        .collect();

    if surviving.len() < before {
        debug!(dropped = before - surviving.len(), "content floor dropped contexts");
    }
    surviving
}
