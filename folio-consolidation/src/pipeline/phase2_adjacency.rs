//! Phase 2: adjacency merge.
//!
//! Contexts of the same work whose line ranges overlap or sit within
//! `line_gap` lines of each other become one context spanning the union
//! of their ranges. With `enrich_from_md` the merged text is re-read from
//! the canonical source by line range, so overlapping fragments can never
//! duplicate text at merge boundaries.

use std::collections::BTreeMap;

use tracing::warn;

use folio_core::config::ConsolidationConfig;
use folio_core::models::ConsolidatedContext;
use folio_core::traits::ISourceReader;

/// Merge line-adjacent contexts per work.
pub fn merge_adjacent(
    contexts: Vec<ConsolidatedContext>,
    source: &dyn ISourceReader,
    config: &ConsolidationConfig,
) -> Vec<ConsolidatedContext> {
    let mut by_work: BTreeMap<String, Vec<ConsolidatedContext>> = BTreeMap::new();
    for context in contexts {
        by_work.entry(context.work_id.clone()).or_default().push(context);
    }

    let mut merged = Vec::new();
    for (_, mut group) in by_work {
        group.sort_by_key(|c| (c.start_line, c.end_line));

        let mut run: Vec<ConsolidatedContext> = Vec::new();
        // Track the run's furthest end line, not the previous context's:
        // an early long span may reach past several later contexts.
        let mut run_end = 0u32;
        for context in group {
            if run.is_empty() || gap_between(run_end, context.start_line) <= config.line_gap {
                run_end = run_end.max(context.end_line);
                run.push(context);
            } else {
                merged.push(flush_run(std::mem::take(&mut run), source, config));
                run_end = context.end_line;
                run.push(context);
            }
        }
        if !run.is_empty() {
            merged.push(flush_run(run, source, config));
        }
    }

    merged
}

/// Lines strictly between a run ending at `run_end` and a context
/// starting at `next_start`. Overlapping or touching ranges gap 0.
fn gap_between(run_end: u32, next_start: u32) -> u32 {
    if next_start <= run_end + 1 {
        0
    } else {
        next_start - run_end - 1
    }
}

/// Collapse a run of adjacent contexts into one. A single-context run is
/// returned unchanged, which keeps the phase idempotent.
fn flush_run(
    mut run: Vec<ConsolidatedContext>,
    source: &dyn ISourceReader,
    config: &ConsolidationConfig,
) -> ConsolidatedContext {
    if run.len() == 1 {
        return run.pop().expect("non-empty run");
    }

    let work_id = run[0].work_id.clone();
    let start_line = run[0].start_line;
    let end_line = run.iter().map(|c| c.end_line).max().expect("non-empty run");
    let score = run.iter().map(|c| c.score).fold(f64::NEG_INFINITY, f64::max);
    let source_chunk_ids: Vec<String> =
        run.iter().flat_map(|c| c.source_chunk_ids.iter().cloned()).collect();

    let merged_text = if config.enrich_from_md {
        match source.read_lines(&work_id, start_line, end_line) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => concatenate(&run),
            Err(e) => {
                warn!(
                    work = %work_id,
                    error = %e,
                    "source re-read failed for merge; concatenating fragments"
                );
                concatenate(&run)
            }
        }
    } else {
        concatenate(&run)
    };

    ConsolidatedContext {
        citation_label: None,
        source_chunk_ids,
        merged_text,
        score,
        work_id,
        start_line,
        end_line,
    }
}

/// Fragment texts joined in line order. Faster than a source re-read but
/// can duplicate overlap text at the boundaries.
fn concatenate(run: &[ConsolidatedContext]) -> String {
    run.iter().map(|c| c.merged_text.as_str()).collect::<Vec<_>>().join("\n")
}
