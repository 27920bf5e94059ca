//! Shared test doubles and corpus builders for the Folio workspace.
//!
//! Provides scripted retrievers, a scripted reranker, an in-memory source
//! reader, and small builders for chunks and queries, so integration and
//! property tests across crates do not each reinvent them.

use std::collections::HashMap;

use folio_core::errors::{FolioError, FolioResult, RetrievalError};
use folio_core::models::{Chunk, Query};
use folio_core::traits::{IDenseRetriever, ILexicalRetriever, IReranker, ISourceReader};

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build a chunk with a deterministic embedding derived from its text.
pub fn make_chunk(
    id: &str,
    work_id: &str,
    parent_id: Option<&str>,
    start_line: u32,
    end_line: u32,
    text: &str,
) -> Chunk {
    Chunk {
        id: id.to_string(),
        work_id: work_id.to_string(),
        parent_id: parent_id.map(String::from),
        start_line,
        end_line,
        text: text.to_string(),
        embedding: embed_text(text),
    }
}

/// Build a query with expansions and entities.
pub fn make_query(original: &str, expansions: &[&str], entities: &[&str]) -> Query {
    let mut query = Query::new(original);
    query.expanded_texts = expansions.iter().map(|s| s.to_string()).collect();
    query.entities = entities.iter().map(|s| s.to_string()).collect();
    query
}

/// Deterministic 26-dim letter-frequency embedding.
///
/// Texts sharing vocabulary get high cosine similarity, which makes MMR
/// diversity behavior observable without a real embedding model.
pub fn embed_text(text: &str) -> Vec<f32> {
    let mut counts = [0f32; 26];
    let mut total = 0f32;
    for c in text.chars().filter(|c| c.is_ascii_alphabetic()) {
        let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        counts[idx] += 1.0;
        total += 1.0;
    }
    if total > 0.0 {
        for c in counts.iter_mut() {
            *c /= total;
        }
    }
    counts.to_vec()
}

// ---------------------------------------------------------------------------
// Retrievers
// ---------------------------------------------------------------------------

/// Retriever returning scripted `(chunk_id, score)` lists per query string.
/// Implements both retrieval modalities; unknown queries return empty.
#[derive(Debug, Default)]
pub struct StaticRetriever {
    results: HashMap<String, Vec<(String, f64)>>,
}

impl StaticRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, query: &str, hits: &[(&str, f64)]) -> Self {
        self.results.insert(
            query.to_string(),
            hits.iter().map(|(id, s)| (id.to_string(), *s)).collect(),
        );
        self
    }

    fn lookup(&self, query: &str, limit: usize) -> Vec<(String, f64)> {
        let mut hits = self.results.get(query).cloned().unwrap_or_default();
        hits.truncate(limit);
        hits
    }
}

impl IDenseRetriever for StaticRetriever {
    fn search(&self, query: &str, limit: usize) -> FolioResult<Vec<(String, f64)>> {
        Ok(self.lookup(query, limit))
    }
}

impl ILexicalRetriever for StaticRetriever {
    fn search(&self, query: &str, limit: usize) -> FolioResult<Vec<(String, f64)>> {
        Ok(self.lookup(query, limit))
    }
}

/// Retriever that always fails, for degradation tests.
#[derive(Debug, Default)]
pub struct FailingRetriever;

impl IDenseRetriever for FailingRetriever {
    fn search(&self, _query: &str, _limit: usize) -> FolioResult<Vec<(String, f64)>> {
        Err(RetrievalError::SearchFailed {
            reason: "scripted failure".to_string(),
        }
        .into())
    }
}

impl ILexicalRetriever for FailingRetriever {
    fn search(&self, _query: &str, _limit: usize) -> FolioResult<Vec<(String, f64)>> {
        Err(RetrievalError::SearchFailed {
            reason: "scripted failure".to_string(),
        }
        .into())
    }
}

// ---------------------------------------------------------------------------
// Rerankers
// ---------------------------------------------------------------------------

/// Reranker with scripted scores keyed by passage text.
///
/// Lookup is exact first, then by substring (so enriched passages still
/// match the score scripted for the original chunk text). Unscripted
/// passages score 0.0.
#[derive(Debug, Default)]
pub struct ScriptedReranker {
    scores: Vec<(String, f64)>,
}

impl ScriptedReranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, passage: &str, score: f64) -> Self {
        self.scores.push((passage.to_string(), score));
        self
    }

    fn score_of(&self, passage: &str) -> f64 {
        if let Some((_, s)) = self.scores.iter().find(|(p, _)| p == passage) {
            return *s;
        }
        self.scores
            .iter()
            .find(|(p, _)| passage.contains(p.as_str()))
            .map(|(_, s)| *s)
            .unwrap_or(0.0)
    }
}

impl IReranker for ScriptedReranker {
    fn score_batch(&self, _query: &str, passages: &[String]) -> FolioResult<Vec<f64>> {
        Ok(passages.iter().map(|p| self.score_of(p)).collect())
    }
}

/// Reranker that always fails, for fatal-error tests.
#[derive(Debug, Default)]
pub struct FailingReranker;

impl IReranker for FailingReranker {
    fn score_batch(&self, _query: &str, _passages: &[String]) -> FolioResult<Vec<f64>> {
        Err(RetrievalError::RerankFailed {
            reason: "scripted failure".to_string(),
        }
        .into())
    }
}

// ---------------------------------------------------------------------------
// Source reader
// ---------------------------------------------------------------------------

/// In-memory canonical source documents, addressed by 1-based line range.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    docs: HashMap<String, Vec<String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_work(&mut self, work_id: &str, text: &str) {
        self.docs
            .insert(work_id.to_string(), text.lines().map(String::from).collect());
    }

    pub fn with_work(mut self, work_id: &str, text: &str) -> Self {
        self.add_work(work_id, text);
        self
    }
}

impl ISourceReader for InMemorySource {
    fn read_lines(&self, work_id: &str, start_line: u32, end_line: u32) -> FolioResult<String> {
        let lines = self.docs.get(work_id).ok_or_else(|| FolioError::SourceRead {
            work_id: work_id.to_string(),
            reason: "unknown work".to_string(),
        })?;
        if lines.is_empty() || end_line < start_line {
            return Ok(String::new());
        }
        let start = (start_line.max(1) as usize) - 1;
        let end = (end_line as usize).min(lines.len());
        if start >= end {
            return Ok(String::new());
        }
        Ok(lines[start..end].join("\n"))
    }
}
