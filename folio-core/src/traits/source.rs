use crate::errors::FolioResult;

/// Read-only access to the canonical sanitized source documents.
///
/// Used by the enricher and the consolidator to widen or re-read text by
/// line range.
pub trait ISourceReader: Send + Sync {
    /// Read the inclusive 1-based line range `[start_line, end_line]` from
    /// a work. Implementations clamp out-of-range bounds to the document;
    /// an unknown work is an error.
    fn read_lines(&self, work_id: &str, start_line: u32, end_line: u32) -> FolioResult<String>;
}
