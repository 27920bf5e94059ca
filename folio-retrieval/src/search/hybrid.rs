//! Hybrid candidate gathering: dense and lexical search per query variant.
//!
//! All retrieval calls are independent read-only operations and run
//! concurrently. A failed call degrades to an empty list for that
//! (variant, modality); only when every call across every variant fails
//! does the search report `RetrievalFailed`.

use rayon::prelude::*;
use tracing::warn;

use folio_core::errors::{FolioResult, RetrievalError};
use folio_core::traits::{IDenseRetriever, ILexicalRetriever};

/// Which retrieval modality produced a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Dense,
    Lexical,
}

/// One ranked result list from a single (variant, modality) search.
/// Ranks are positional and 1-based; backend scores are kept only for
/// diagnostics — fusion works on ranks.
#[derive(Debug, Clone)]
pub struct RankedList {
    pub modality: Modality,
    pub hits: Vec<(String, f64)>,
}

/// Issues dense and lexical searches for every query variant.
pub struct HybridSearcher<'a> {
    dense: &'a dyn IDenseRetriever,
    lexical: &'a dyn ILexicalRetriever,
}

impl<'a> HybridSearcher<'a> {
    pub fn new(dense: &'a dyn IDenseRetriever, lexical: &'a dyn ILexicalRetriever) -> Self {
        Self { dense, lexical }
    }

    /// Search all variants with both modalities, joined before fusion.
    ///
    /// Returns one [`RankedList`] per successful call (possibly empty —
    /// an empty corpus is not a failure).
    pub fn search(
        &self,
        variants: &[String],
        dense_limit: usize,
        lexical_limit: usize,
    ) -> FolioResult<Vec<RankedList>> {
        if variants.is_empty() {
            return Ok(Vec::new());
        }

        let per_variant: Vec<_> = variants
            .par_iter()
            .map(|variant| {
                rayon::join(
                    || self.dense.search(variant, dense_limit),
                    || self.lexical.search(variant, lexical_limit),
                )
            })
            .collect();

        let total_calls = per_variant.len() * 2;
        let mut failed_calls = 0usize;
        let mut lists = Vec::with_capacity(total_calls);

        for (idx, (dense, lexical)) in per_variant.into_iter().enumerate() {
            match dense {
                Ok(hits) => lists.push(RankedList {
                    modality: Modality::Dense,
                    hits,
                }),
                Err(e) => {
                    warn!(variant = idx, error = %e, "dense search failed; using lexical only for this variant");
                    failed_calls += 1;
                }
            }
            match lexical {
                Ok(hits) => lists.push(RankedList {
                    modality: Modality::Lexical,
                    hits,
                }),
                Err(e) => {
                    warn!(variant = idx, error = %e, "lexical search failed; using dense only for this variant");
                    failed_calls += 1;
                }
            }
        }

        if failed_calls == total_calls {
            return Err(RetrievalError::RetrievalFailed {
                reason: "both retrievers failed for every query variant".to_string(),
            }
            .into());
        }

        Ok(lists)
    }
}
