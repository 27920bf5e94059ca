//! # folio-core
//!
//! Foundation crate for the Folio literature-retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{PresetStore, RagConfig};
pub use errors::{FolioError, FolioResult};
pub use models::{Candidate, Chunk, ChunkArena, ConsolidatedContext, IntentLabel, Query, WorkInfo};
