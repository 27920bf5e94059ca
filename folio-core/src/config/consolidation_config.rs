use serde::{Deserialize, Serialize};

use super::defaults;

/// Consolidation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Fraction of a parent's line range that selected children must cover
    /// to trigger replacement by the parent. In [0, 1].
    pub coverage_threshold: f64,
    /// Maximum number of lines between two contexts of the same work for
    /// them to be merged.
    pub line_gap: u32,
    /// Post-consolidation content floor (chars); shorter contexts are
    /// dropped.
    pub min_content_length: usize,
    /// When true, merged text is re-read from the canonical source by line
    /// range, guaranteeing no duplicated overlap at merge boundaries. When
    /// false, fragments are concatenated as-is.
    pub enrich_from_md: bool,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: defaults::DEFAULT_COVERAGE_THRESHOLD,
            line_gap: defaults::DEFAULT_LINE_GAP,
            min_content_length: defaults::DEFAULT_CONSOLIDATION_MIN_CONTENT_LENGTH,
            enrich_from_md: defaults::DEFAULT_ENRICH_FROM_MD,
        }
    }
}
