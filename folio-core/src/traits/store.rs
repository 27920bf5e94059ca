use crate::errors::FolioResult;
use crate::models::{Chunk, ChunkArena, WorkInfo};

/// Read-only access to the processed corpus.
pub trait IChunkStore: Send + Sync {
    fn get(&self, id: &str) -> FolioResult<Option<Chunk>>;

    /// Fetch many chunks at once; unknown ids are silently skipped.
    fn get_bulk(&self, ids: &[String]) -> FolioResult<Vec<Chunk>>;

    /// Human-readable metadata for a work, if known.
    fn work_info(&self, work_id: &str) -> FolioResult<Option<WorkInfo>>;
}

/// The in-memory arena is the canonical store for tests and for corpora
/// small enough to pin in memory.
impl IChunkStore for ChunkArena {
    fn get(&self, id: &str) -> FolioResult<Option<Chunk>> {
        Ok(ChunkArena::get(self, id).cloned())
    }

    fn get_bulk(&self, ids: &[String]) -> FolioResult<Vec<Chunk>> {
        Ok(ids
            .iter()
            .filter_map(|id| ChunkArena::get(self, id).cloned())
            .collect())
    }

    fn work_info(&self, work_id: &str) -> FolioResult<Option<WorkInfo>> {
        Ok(self.work(work_id).cloned())
    }
}
