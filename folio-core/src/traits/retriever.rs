use crate::errors::FolioResult;

/// Vector-similarity search over chunk embeddings.
///
/// Returns up to `limit` `(chunk_id, similarity)` pairs, best first. An
/// empty corpus yields an empty list, not an error.
pub trait IDenseRetriever: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> FolioResult<Vec<(String, f64)>>;
}

/// Keyword / BM25-style search over chunk text.
///
/// Same contract as [`IDenseRetriever`]: up to `limit` `(chunk_id, score)`
/// pairs, best first.
pub trait ILexicalRetriever: Send + Sync {
    fn search(&self, query: &str, limit: usize) -> FolioResult<Vec<(String, f64)>>;
}
