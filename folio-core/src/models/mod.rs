//! Data model: queries, corpus chunks, pipeline candidates, consolidated contexts.

mod candidate;
mod chunk;
mod context;
mod query;

pub use candidate::Candidate;
pub use chunk::{Chunk, ChunkArena, WorkInfo};
pub use context::ConsolidatedContext;
pub use query::{IntentLabel, Query};
