use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A contiguous span of a source document, produced by ingestion.
///
/// Chunks form a forest per `work_id` via `parent_id`; a parent, when
/// present, fully contains its children's line ranges. Read-only to the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    /// The work (document) this chunk belongs to.
    pub work_id: String,
    /// Weak reference to the containing chunk; a plain lookup key, never a
    /// live pointer. May dangle if ingestion was buggy — callers must
    /// tolerate a missing parent by treating the chunk as parentless.
    pub parent_id: Option<String>,
    /// 1-based first line of the span (inclusive).
    pub start_line: u32,
    /// 1-based last line of the span (inclusive).
    pub end_line: u32,
    pub text: String,
    /// Dense embedding of `text`, produced at ingestion.
    pub embedding: Vec<f32>,
}

impl Chunk {
    /// Number of lines covered by this chunk (inclusive range).
    pub fn line_span(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// Human-readable source metadata for a work, used in citation headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkInfo {
    pub id: String,
    pub title: Option<String>,
    pub section: Option<String>,
}

/// Id-indexed arena of chunks for one corpus (or one query's working set).
///
/// Hierarchy traversal walks the arena by id; a dangling `parent_id`
/// simply fails to resolve and the chunk reads as parentless.
#[derive(Debug, Clone, Default)]
pub struct ChunkArena {
    chunks: HashMap<String, Chunk>,
    works: HashMap<String, WorkInfo>,
}

impl ChunkArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.id.clone(), chunk);
    }

    pub fn insert_work(&mut self, info: WorkInfo) {
        self.works.insert(info.id.clone(), info);
    }

    pub fn get(&self, id: &str) -> Option<&Chunk> {
        self.chunks.get(id)
    }

    pub fn work(&self, work_id: &str) -> Option<&WorkInfo> {
        self.works.get(work_id)
    }
}

impl FromIterator<Chunk> for ChunkArena {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        let mut arena = Self::new();
        for chunk in iter {
            arena.insert(chunk);
        }
        arena
    }
}
