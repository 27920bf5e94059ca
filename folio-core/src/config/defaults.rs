//! Default values for every configuration field.
//!
//! Config structs pull from here via `Default` impls; no pipeline stage
//! ever reads these directly.

// --- Retrieval ---
pub const DEFAULT_DENSE_LIMIT: usize = 20;
pub const DEFAULT_LEXICAL_LIMIT: usize = 20;
/// RRF smoothing constant. Higher values reduce the influence of
/// top-ranked items from any single list.
pub const DEFAULT_RRF_K: u32 = 60;
pub const DEFAULT_TOP_K_RRF: usize = 50;
/// Additive score bonus per distinct matched query entity.
pub const DEFAULT_ENTITY_BOOST: f64 = 0.05;
pub const DEFAULT_MIN_WORD_COUNT: usize = 5;
pub const DEFAULT_MIN_CHAR_COUNT: usize = 20;
/// Candidates shorter than this are widened by the enricher.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 120;
pub const DEFAULT_ENRICH_LINES_ABOVE: u32 = 2;
pub const DEFAULT_ENRICH_LINES_BELOW: u32 = 2;
pub const DEFAULT_RERANKER_BATCH_SIZE: usize = 16;
pub const DEFAULT_RERANKER_MAX_LENGTH: usize = 512;
/// MMR trade-off: 1.0 = pure relevance, 0.0 = pure novelty after the
/// first pick.
pub const DEFAULT_MMR_LAMBDA: f64 = 0.7;
pub const DEFAULT_TOP_N_FINAL: usize = 10;

// --- Consolidation ---
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_LINE_GAP: u32 = 5;
/// Post-consolidation content floor, distinct from the retrieval-stage
/// threshold.
pub const DEFAULT_CONSOLIDATION_MIN_CONTENT_LENGTH: usize = 80;
pub const DEFAULT_ENRICH_FROM_MD: bool = true;

// --- Augmentation ---
pub const DEFAULT_TOP_N_CONTEXTS: usize = 8;
