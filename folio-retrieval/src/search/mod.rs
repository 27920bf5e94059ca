//! Candidate gathering: hybrid per-variant search and RRF fusion.

pub mod hybrid;
pub mod rrf_fusion;

pub use hybrid::{HybridSearcher, Modality, RankedList};
