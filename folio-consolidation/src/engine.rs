//! ConsolidationEngine: wraps the phase pipeline behind the trigger API.

use tracing::info;

use folio_core::config::RagConfig;
use folio_core::errors::FolioResult;
use folio_core::models::{Candidate, ConsolidatedContext};
use folio_core::traits::{IChunkStore, ISourceReader};

use crate::pipeline;

/// Consolidates a query's selected candidates into final context blocks.
/// Pure per invocation — no state is shared across concurrent query runs.
pub struct ConsolidationEngine<'a> {
    store: &'a dyn IChunkStore,
    source: &'a dyn ISourceReader,
}

impl<'a> ConsolidationEngine<'a> {
    pub fn new(store: &'a dyn IChunkStore, source: &'a dyn ISourceReader) -> Self {
        Self { store, source }
    }

    /// Run consolidation over the retrieval result for one query.
    pub fn consolidate(
        &self,
        selected: &[Candidate],
        config: &RagConfig,
    ) -> FolioResult<Vec<ConsolidatedContext>> {
        // The config boundary validates on load; revalidate defensively.
        config.validate()?;

        if selected.is_empty() {
            return Ok(Vec::new());
        }

        let contexts =
            pipeline::run_pipeline(selected, self.store, self.source, &config.consolidation)?;
        info!(
            selected = selected.len(),
            contexts = contexts.len(),
            "consolidation complete"
        );
        Ok(contexts)
    }
}
