//! Ranking: cross-encoder re-scoring followed by MMR diversification.

pub mod mmr;
pub mod reranker;
pub mod similarity;

use folio_core::config::RetrievalConfig;
use folio_core::errors::FolioResult;
use folio_core::models::Candidate;
use folio_core::traits::IReranker;

/// Run the full ranking stage: rerank every surviving candidate against
/// the original query text, then select up to `top_n_final` by MMR.
pub fn rank(
    candidates: Vec<Candidate>,
    query_text: &str,
    scorer: &dyn IReranker,
    config: &RetrievalConfig,
) -> FolioResult<Vec<Candidate>> {
    let reranked = reranker::rerank(
        candidates,
        query_text,
        scorer,
        config.reranker_batch_size,
        config.reranker_max_length,
    )?;
    Ok(mmr::select(reranked, config.mmr_lambda, config.top_n_final))
}
