//! # folio-retrieval
//!
//! The retrieval half of the Folio pipeline: hybrid dense + lexical search
//! per query variant, Reciprocal Rank Fusion, entity boosting, content
//! filtering, window enrichment, and cross-encoder re-ranking with MMR
//! diversification.
//!
//! Every stage is a pure function over the candidate list plus the config;
//! [`engine::RetrievalEngine`] composes them.

pub mod boost;
pub mod engine;
pub mod enrich;
pub mod filter;
pub mod ranking;
pub mod search;

pub use engine::RetrievalEngine;
