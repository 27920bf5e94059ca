use serde::{Deserialize, Serialize};

use super::defaults;

/// Augmentation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationConfig {
    /// Maximum number of citation-labeled context blocks in the prompt.
    pub top_n_contexts: usize,
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self {
            top_n_contexts: defaults::DEFAULT_TOP_N_CONTEXTS,
        }
    }
}
