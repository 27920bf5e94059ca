//! End-to-end augmentation tests: labelling, block formatting, and
//! prompt assembly over a small cited corpus.

use folio_augmentation::{AugmentationEngine, PromptTemplate};
use folio_core::config::RagConfig;
use folio_core::models::{ChunkArena, ConsolidatedContext, IntentLabel, WorkInfo};
use test_fixtures::make_query;

fn ctx(work: &str, start: u32, score: f64, text: &str) -> ConsolidatedContext {
    ConsolidatedContext {
        citation_label: None,
        source_chunk_ids: vec![format!("{work}:{start}")],
        merged_text: text.to_string(),
        score,
        work_id: work.to_string(),
        start_line: start,
        end_line: start + 9,
    }
}

fn arena() -> ChunkArena {
    let mut arena = ChunkArena::new();
    arena.insert_work(WorkInfo {
        id: "moby".to_string(),
        title: Some("Moby-Dick".to_string()),
        section: Some("Chapter 36".to_string()),
    });
    arena.insert_work(WorkInfo {
        id: "gatsby".to_string(),
        title: Some("The Great Gatsby".to_string()),
        section: None,
    });
    arena
}

#[test]
fn top_n_contexts_limits_the_cited_blocks_to_the_highest_scores() {
    let arena = arena();
    let contexts = vec![
        ctx("moby", 1, 0.9, "the doubloon"),
        ctx("moby", 50, 0.8, "the quarter-deck"),
        ctx("gatsby", 1, 0.7, "the green light"),
        ctx("moby", 200, 0.6, "the chase"),
        ctx("gatsby", 90, 0.5, "the valley of ashes"),
    ];

    let mut config = RagConfig::default();
    config.augmentation.top_n_contexts = 3;
    let query = make_query("what does the doubloon mean", &[], &[]);

    let engine = AugmentationEngine::new(&arena);
    let prompt = engine
        .augment(&contexts, &query, &PromptTemplate::default(), None, &config)
        .unwrap();

    assert!(prompt.contains("[S1] Moby-Dick, Chapter 36 (lines 1-10)\nthe doubloon"));
    assert!(prompt.contains("[S2]"));
    assert!(prompt.contains("[S3] The Great Gatsby (lines 1-10)\nthe green light"));
    assert!(!prompt.contains("[S4]"));
    assert!(!prompt.contains("the chase"));
    assert!(!prompt.contains("the valley of ashes"));
}

#[test]
fn top_n_override_replaces_the_configured_limit() {
    let arena = arena();
    let contexts = vec![
        ctx("moby", 1, 0.9, "first"),
        ctx("moby", 50, 0.8, "second"),
        ctx("moby", 100, 0.7, "third"),
    ];
    let config = RagConfig::default();
    let query = make_query("q", &[], &[]);

    let engine = AugmentationEngine::new(&arena);
    let prompt = engine
        .augment(&contexts, &query, &PromptTemplate::default(), Some(1), &config)
        .unwrap();

    assert!(prompt.contains("[S1]"));
    assert!(!prompt.contains("[S2]"));
}

#[test]
fn guidance_reflects_intent_and_entities() {
    let arena = arena();
    let contexts = vec![ctx("moby", 1, 0.9, "Ahab nailed the doubloon to the mast.")];
    let config = RagConfig::default();
    let mut query = make_query("compare Ahab and Gatsby", &[], &["Ahab", "Gatsby"]);
    query.intent = IntentLabel::Comparative;

    let engine = AugmentationEngine::new(&arena);
    let prompt = engine
        .augment(&contexts, &query, &PromptTemplate::default(), None, &config)
        .unwrap();

    assert!(prompt.contains(IntentLabel::Comparative.as_guidance()));
    assert!(prompt.contains("Pay attention to: Ahab, Gatsby."));
    assert!(prompt.ends_with("Question: compare Ahab and Gatsby"));
}

#[test]
fn empty_context_list_still_produces_a_prompt() {
    let arena = arena();
    let config = RagConfig::default();
    let query = make_query("who is Queequeg", &[], &[]);

    let engine = AugmentationEngine::new(&arena);
    let prompt = engine
        .augment(&[], &query, &PromptTemplate::default(), None, &config)
        .unwrap();

    assert!(!prompt.contains("Sources:"));
    assert!(prompt.contains("Question: who is Queequeg"));
}

#[test]
fn unknown_work_falls_back_to_its_id_in_the_header() {
    let arena = ChunkArena::new();
    let contexts = vec![ctx("obscure-manuscript", 5, 0.9, "marginalia")];
    let config = RagConfig::default();
    let query = make_query("q", &[], &[]);

    let engine = AugmentationEngine::new(&arena);
    let prompt = engine
        .augment(&contexts, &query, &PromptTemplate::default(), None, &config)
        .unwrap();

    assert!(prompt.contains("[S1] obscure-manuscript (lines 5-14)"));
}
