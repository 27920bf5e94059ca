use serde::{Deserialize, Serialize};

/// A consolidated context block, produced once per query and ordered by
/// descending score. This is the unit handed to the augmentation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsolidatedContext {
    /// Citation label ("S1", "S2", ...), assigned by the augmenter.
    pub citation_label: Option<String>,
    /// The chunks this context was built from. For a parent-coverage
    /// replacement the parent id comes first, followed by the children.
    pub source_chunk_ids: Vec<String>,
    pub merged_text: String,
    /// Maximum relevance of the constituent source chunks.
    pub score: f64,
    pub work_id: String,
    pub start_line: u32,
    pub end_line: u32,
}
