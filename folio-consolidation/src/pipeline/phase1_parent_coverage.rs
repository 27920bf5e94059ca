//! Phase 1: parent-coverage replacement.
//!
//! When the selected chunks sharing a parent collectively cover enough of
//! the parent's line range, all of them are replaced by a single context
//! backed by the parent's full text. A dangling parent reference falls
//! back to individual contexts — a chunk's content is never dropped
//! silently.

use std::collections::BTreeMap;

use tracing::warn;

use folio_core::config::ConsolidationConfig;
use folio_core::errors::FolioResult;
use folio_core::models::{Candidate, Chunk, ConsolidatedContext};
use folio_core::traits::{IChunkStore, ISourceReader};

/// Build one context per candidate, replacing sibling groups that cover
/// at least `coverage_threshold` of their parent.
pub fn replace_by_parent_coverage(
    selected: &[Candidate],
    store: &dyn IChunkStore,
    source: &dyn ISourceReader,
    config: &ConsolidationConfig,
) -> FolioResult<Vec<ConsolidatedContext>> {
    let mut contexts = Vec::with_capacity(selected.len());
    // BTreeMap keeps group iteration deterministic.
    let mut groups: BTreeMap<String, Vec<&Candidate>> = BTreeMap::new();

    for candidate in selected {
        match candidate.chunk.parent_id.as_deref() {
            Some(parent_id) => groups.entry(parent_id.to_string()).or_default().push(candidate),
            None => contexts.push(individual_context(candidate)),
        }
    }

    for (parent_id, mut siblings) in groups {
        siblings.sort_by_key(|c| (c.chunk.start_line, c.chunk.end_line));

        let parent = match store.get(&parent_id)? {
            Some(parent) => parent,
            None => {
                warn!(
                    parent = %parent_id,
                    children = siblings.len(),
                    "chunk references missing parent; keeping individual contexts"
                );
                contexts.extend(siblings.iter().map(|c| individual_context(c)));
                continue;
            }
        };

        let coverage = covered_fraction(&parent, &siblings);
        if coverage >= config.coverage_threshold {
            contexts.push(parent_context(&parent, &siblings, source, config));
        } else {
            contexts.extend(siblings.iter().map(|c| individual_context(c)));
        }
    }

    Ok(contexts)
}

fn individual_context(candidate: &Candidate) -> ConsolidatedContext {
    ConsolidatedContext {
        citation_label: None,
        source_chunk_ids: vec![candidate.chunk.id.clone()],
        merged_text: candidate.text.clone(),
        score: candidate.relevance(),
        work_id: candidate.chunk.work_id.clone(),
        start_line: candidate.chunk.start_line,
        end_line: candidate.chunk.end_line,
    }
}

fn parent_context(
    parent: &Chunk,
    siblings: &[&Candidate],
    source: &dyn ISourceReader,
    config: &ConsolidationConfig,
) -> ConsolidatedContext {
    let text = if config.enrich_from_md {
        match source.read_lines(&parent.work_id, parent.start_line, parent.end_line) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => parent.text.clone(),
            Err(e) => {
                warn!(
                    work = %parent.work_id,
                    error = %e,
                    "source re-read failed for parent; using stored parent text"
                );
                parent.text.clone()
            }
        }
    } else {
        parent.text.clone()
    };

    let mut source_chunk_ids = vec![parent.id.clone()];
    source_chunk_ids.extend(siblings.iter().map(|c| c.chunk.id.clone()));

    let score = siblings
        .iter()
        .map(|c| c.relevance())
        .fold(f64::NEG_INFINITY, f64::max);

    ConsolidatedContext {
        citation_label: None,
        source_chunk_ids,
        merged_text: text,
        score,
        work_id: parent.work_id.clone(),
        start_line: parent.start_line,
        end_line: parent.end_line,
    }
}

/// Fraction of the parent's line range covered by the union of the
/// sibling spans (clamped to the parent range). Siblings must be sorted
/// by start line.
fn covered_fraction(parent: &Chunk, siblings: &[&Candidate]) -> f64 {
    let mut covered = 0u64;
    let mut cursor = parent.start_line;

    for candidate in siblings {
        let start = candidate.chunk.start_line.max(cursor).max(parent.start_line);
        let end = candidate.chunk.end_line.min(parent.end_line);
        if end >= start {
            covered += (end - start + 1) as u64;
            cursor = end + 1;
        }
    }

    covered as f64 / parent.line_span() as f64
}
