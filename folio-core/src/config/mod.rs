//! Configuration: one immutable value object per pipeline run.
//!
//! No stage reads ambient or global state — every stage function receives
//! the validated [`RagConfig`] by reference.

mod augmentation_config;
mod consolidation_config;
pub mod defaults;
mod preset;
mod retrieval_config;

pub use augmentation_config::AugmentationConfig;
pub use consolidation_config::ConsolidationConfig;
pub use preset::PresetStore;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Full engine configuration, consumed as an immutable snapshot per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    pub retrieval: RetrievalConfig,
    pub consolidation: ConsolidationConfig,
    pub augmentation: AugmentationConfig,
}

impl RagConfig {
    /// Validate cross-field invariants.
    ///
    /// The configuration boundary enforces these before a config ever
    /// reaches the engine, but pipeline entry points revalidate
    /// defensively.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.retrieval;
        if r.top_k_rrf < r.top_n_final {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "top_k_rrf ({}) must be >= top_n_final ({})",
                    r.top_k_rrf, r.top_n_final
                ),
            });
        }
        if r.rrf_k == 0 {
            return Err(ConfigError::Invalid {
                reason: "rrf_k must be non-zero".to_string(),
            });
        }
        if r.top_n_final == 0 {
            return Err(ConfigError::Invalid {
                reason: "top_n_final must be non-zero".to_string(),
            });
        }
        if r.reranker_batch_size == 0 {
            return Err(ConfigError::Invalid {
                reason: "reranker_batch_size must be non-zero".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&r.mmr_lambda) {
            return Err(ConfigError::Invalid {
                reason: format!("mmr_lambda ({}) must be in [0, 1]", r.mmr_lambda),
            });
        }
        let c = &self.consolidation;
        if !(0.0..=1.0).contains(&c.coverage_threshold) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "coverage_threshold ({}) must be in [0, 1]",
                    c.coverage_threshold
                ),
            });
        }
        Ok(())
    }
}
