//! Property tests for the consolidation pipeline.

use proptest::prelude::*;

use folio_consolidation::pipeline;
use folio_core::config::ConsolidationConfig;
use folio_core::models::{Candidate, ChunkArena, ConsolidatedContext};
use test_fixtures::{make_chunk, InMemorySource};

const DOC_LINES: u32 = 200;

fn doc_source() -> InMemorySource {
    let text = (1..=DOC_LINES)
        .map(|i| format!("canonical line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    InMemorySource::new().with_work("w1", &text)
}

fn candidates_from(spans: &[(u32, u32, f64)]) -> Vec<Candidate> {
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, len, score))| {
            let start = start % DOC_LINES + 1;
            let end = (start + len % 10).min(DOC_LINES);
            let chunk = make_chunk(
                &format!("c{i}"),
                "w1",
                None,
                start,
                end,
                &format!("fragment {i} spanning {start}..{end}"),
            );
            let mut cand = Candidate::from_chunk(chunk);
            cand.rerank_score = Some(score.abs() + 0.01);
            cand
        })
        .collect()
}

fn contexts_as_candidates(contexts: &[ConsolidatedContext]) -> Vec<Candidate> {
    contexts
        .iter()
        .enumerate()
        .map(|(i, ctx)| {
            let chunk = make_chunk(
                &format!("ctx{i}"),
                &ctx.work_id,
                None,
                ctx.start_line,
                ctx.end_line,
                &ctx.merged_text,
            );
            let mut cand = Candidate::from_chunk(chunk);
            cand.rerank_score = Some(ctx.score);
            cand
        })
        .collect()
}

fn span_strategy() -> impl Strategy<Value = Vec<(u32, u32, f64)>> {
    prop::collection::vec((0u32..DOC_LINES, 0u32..20, 0.0f64..1.0), 1..15)
}

proptest! {
    /// Running the pipeline on its own output changes nothing.
    #[test]
    fn pipeline_is_idempotent(spans in span_strategy(), line_gap in 0u32..10) {
        let store = ChunkArena::new();
        let source = doc_source();
        let config = ConsolidationConfig {
            line_gap,
            min_content_length: 0,
            enrich_from_md: true,
            ..Default::default()
        };

        let selected = candidates_from(&spans);
        let first = pipeline::run_pipeline(&selected, &store, &source, &config).unwrap();
        let rerun_input = contexts_as_candidates(&first);
        let second = pipeline::run_pipeline(&rerun_input, &store, &source, &config).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.merged_text, &b.merged_text);
            prop_assert_eq!((a.start_line, a.end_line), (b.start_line, b.end_line));
        }
    }

    /// With the content floor disabled, every selected chunk id survives
    /// into some context's provenance list.
    #[test]
    fn no_chunk_id_is_lost_without_the_floor(spans in span_strategy(), line_gap in 0u32..10) {
        let store = ChunkArena::new();
        let source = doc_source();
        let config = ConsolidationConfig {
            line_gap,
            min_content_length: 0,
            enrich_from_md: true,
            ..Default::default()
        };

        let selected = candidates_from(&spans);
        let contexts = pipeline::run_pipeline(&selected, &store, &source, &config).unwrap();

        for cand in &selected {
            prop_assert!(
                contexts.iter().any(|c| c.source_chunk_ids.contains(&cand.chunk.id)),
                "chunk {} lost",
                cand.chunk.id
            );
        }
    }

    /// Output contexts come back in descending score order.
    #[test]
    fn output_is_sorted_by_descending_score(spans in span_strategy()) {
        let store = ChunkArena::new();
        let source = doc_source();
        let config = ConsolidationConfig {
            min_content_length: 0,
            enrich_from_md: true,
            ..Default::default()
        };

        let selected = candidates_from(&spans);
        let contexts = pipeline::run_pipeline(&selected, &store, &source, &config).unwrap();

        for pair in contexts.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Each context's span contains the span of every chunk it absorbed.
    #[test]
    fn context_spans_contain_their_source_chunks(spans in span_strategy(), line_gap in 0u32..10) {
        let store = ChunkArena::new();
        let source = doc_source();
        let config = ConsolidationConfig {
            line_gap,
            min_content_length: 0,
            enrich_from_md: true,
            ..Default::default()
        };

        let selected = candidates_from(&spans);
        let contexts = pipeline::run_pipeline(&selected, &store, &source, &config).unwrap();

        for ctx in &contexts {
            for id in &ctx.source_chunk_ids {
                let cand = selected.iter().find(|c| &c.chunk.id == id).unwrap();
                prop_assert!(ctx.start_line <= cand.chunk.start_line);
                prop_assert!(ctx.end_line >= cand.chunk.end_line);
            }
        }
    }
}
