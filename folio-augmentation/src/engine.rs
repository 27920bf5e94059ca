//! AugmentationEngine: the prompt-building trigger.

use tracing::info;

use folio_core::config::RagConfig;
use folio_core::errors::FolioResult;
use folio_core::models::{ConsolidatedContext, Query};
use folio_core::traits::IChunkStore;

use crate::labeler;
use crate::prompt::{self, PromptTemplate};

pub struct AugmentationEngine<'a> {
    store: &'a dyn IChunkStore,
}

impl<'a> AugmentationEngine<'a> {
    pub fn new(store: &'a dyn IChunkStore) -> Self {
        Self { store }
    }

    /// Build the final prompt for a query from its consolidated contexts.
    ///
    /// `top_n_override` replaces the configured `top_n_contexts` for this
    /// call only. An empty context list yields a prompt with no source
    /// blocks rather than an error.
    pub fn augment(
        &self,
        contexts: &[ConsolidatedContext],
        query: &Query,
        template: &PromptTemplate,
        top_n_override: Option<usize>,
        config: &RagConfig,
    ) -> FolioResult<String> {
        config.validate()?;
        let top_n = top_n_override.unwrap_or(config.augmentation.top_n_contexts);

        let labelled = labeler::label_contexts(contexts, top_n);
        let blocks = labelled
            .iter()
            .map(|context| prompt::format_block(context, self.store))
            .collect::<FolioResult<Vec<String>>>()?;

        info!(
            query = %query.id,
            contexts = contexts.len(),
            cited = blocks.len(),
            "prompt assembled"
        );
        Ok(prompt::assemble(template, &blocks, query))
    }
}
