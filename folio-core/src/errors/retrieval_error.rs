/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retrieval failed: {reason}")]
    RetrievalFailed { reason: String },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("reranker failed: {reason}")]
    RerankFailed { reason: String },
}
