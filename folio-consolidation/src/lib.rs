//! # folio-consolidation
//!
//! Structure-aware merging of selected chunks into final context blocks:
//! parent-coverage replacement, line-adjacency merging, and a
//! post-consolidation content floor. Respects the per-work parent/child
//! chunk hierarchy without losing or duplicating content.

pub mod engine;
pub mod pipeline;

pub use engine::ConsolidationEngine;
