//! Prompt augmentation: citation labelling and final prompt assembly.
//!
//! Takes the consolidated contexts for a query, labels the top ones
//! `S1..Sk`, formats each as a source-attributed block, and assembles the
//! final prompt around a caller-supplied instruction template.

pub mod engine;
pub mod labeler;
pub mod prompt;

pub use engine::AugmentationEngine;
pub use prompt::PromptTemplate;
