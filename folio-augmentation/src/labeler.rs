//! Citation labelling.

use folio_core::constants::CITATION_LABEL_PREFIX;
use folio_core::models::ConsolidatedContext;

/// Take the `top_n` highest-scoring contexts and assign citation labels
/// `S1..Sk` in descending score order (k = min(top_n, len)).
///
/// Input is expected pre-sorted by the consolidator; order is re-imposed
/// here so labels stay correct even for a caller-assembled list.
pub fn label_contexts(contexts: &[ConsolidatedContext], top_n: usize) -> Vec<ConsolidatedContext> {
    let mut ordered: Vec<ConsolidatedContext> = contexts.to_vec();
    ordered.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.work_id.cmp(&b.work_id))
            .then_with(|| a.start_line.cmp(&b.start_line))
    });
    ordered.truncate(top_n);

    for (i, context) in ordered.iter_mut().enumerate() {
        context.citation_label = Some(format!("{}{}", CITATION_LABEL_PREFIX, i + 1));
    }
    ordered
}
