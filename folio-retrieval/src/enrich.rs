//! Window enrichment: widen very short candidates with surrounding lines.
//!
//! Short chunks lack enough context for the reranker or for human reading.
//! Widening the text window recovers surrounding discourse without touching
//! `start_line`/`end_line` — citation provenance always maps to the
//! original span.

use tracing::warn;

use folio_core::config::RetrievalConfig;
use folio_core::models::Candidate;
use folio_core::traits::ISourceReader;

/// Replace the working text of short candidates with an expanded window
/// read from the canonical source document.
///
/// A failed source read keeps the original text; enrichment is never
/// fatal.
pub fn enrich_short_candidates(
    mut candidates: Vec<Candidate>,
    source: &dyn ISourceReader,
    config: &RetrievalConfig,
) -> Vec<Candidate> {
    if config.min_content_length == 0 {
        return candidates;
    }

    for candidate in candidates.iter_mut() {
        if candidate.text.chars().count() >= config.min_content_length {
            continue;
        }
        let start = candidate
            .chunk
            .start_line
            .saturating_sub(config.enrich_lines_above)
            .max(1);
        let end = candidate
            .chunk
            .end_line
            .saturating_add(config.enrich_lines_below);

        match source.read_lines(&candidate.chunk.work_id, start, end) {
            Ok(text) if !text.is_empty() => candidate.text = text,
            Ok(_) => {}
            Err(e) => {
                warn!(
                    chunk = %candidate.chunk.id,
                    work = %candidate.chunk.work_id,
                    error = %e,
                    "enrichment read failed; keeping original text"
                );
            }
        }
    }

    candidates
}
