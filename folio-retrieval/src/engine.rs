//! RetrievalEngine: orchestrates the full retrieval pipeline.
//!
//! query variants → hybrid search → RRF fusion → entity boost → content
//! filter → enrichment → rerank → MMR → final candidate set.

use tracing::{debug, info};

use folio_core::config::RagConfig;
use folio_core::errors::FolioResult;
use folio_core::models::{Candidate, Query};
use folio_core::traits::{
    IChunkStore, IDenseRetriever, ILexicalRetriever, IReranker, ISourceReader,
};

use crate::search::HybridSearcher;
use crate::{boost, enrich, filter, ranking, search};

/// The main retrieval engine. Holds references to the external
/// collaborators; all per-run state lives in the candidate list threaded
/// through the stages.
pub struct RetrievalEngine<'a> {
    dense: &'a dyn IDenseRetriever,
    lexical: &'a dyn ILexicalRetriever,
    reranker: &'a dyn IReranker,
    store: &'a dyn IChunkStore,
    source: &'a dyn ISourceReader,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        dense: &'a dyn IDenseRetriever,
        lexical: &'a dyn ILexicalRetriever,
        reranker: &'a dyn IReranker,
        store: &'a dyn IChunkStore,
        source: &'a dyn ISourceReader,
    ) -> Self {
        Self {
            dense,
            lexical,
            reranker,
            store,
            source,
        }
    }

    /// Run the full pipeline for one query. The result is the final
    /// selected candidate set, ready for consolidation; persisting it is
    /// the caller's concern.
    pub fn retrieve(&self, query: &Query, config: &RagConfig) -> FolioResult<Vec<Candidate>> {
        // The config boundary validates on load; revalidate defensively.
        config.validate()?;
        let r = &config.retrieval;

        let variants = query.variants();
        if variants.is_empty() {
            debug!(query = %query.id, "query has no usable text");
            return Ok(Vec::new());
        }
        debug!(query = %query.id, variants = variants.len(), "starting retrieval");

        let searcher = HybridSearcher::new(self.dense, self.lexical);
        let lists = searcher.search(&variants, r.dense_limit, r.lexical_limit)?;

        let fused = search::rrf_fusion::fuse(&lists, self.store, r.rrf_k, r.top_k_rrf)?;
        if fused.is_empty() {
            debug!(query = %query.id, "no candidates after fusion");
            return Ok(Vec::new());
        }
        info!(candidates = fused.len(), "hybrid search fused candidates");

        let boosted = boost::boost_entities(fused, &query.entities, r.entity_boost);
        let filtered = filter::filter_content(boosted, r.min_word_count, r.min_char_count);
        let enriched = enrich::enrich_short_candidates(filtered, self.source, r);
        debug!(candidates = enriched.len(), "filter and enrichment complete");

        let selected = ranking::rank(enriched, &query.original_text, self.reranker, r)?;

        info!(
            query = %query.id,
            selected = selected.len(),
            "retrieval complete"
        );
        Ok(selected)
    }
}
