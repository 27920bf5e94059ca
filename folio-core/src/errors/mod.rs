//! Error types for every Folio subsystem, wrapped by [`FolioError`].

mod config_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;

/// Top-level error type. Each failing subsystem contributes its own
/// variant; consolidation and augmentation surface only the config,
/// store, and source errors of the seams they call through.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("source read failed for work '{work_id}': {reason}")]
    SourceRead { work_id: String, reason: String },
}

/// Convenience alias used throughout the workspace.
pub type FolioResult<T> = Result<T, FolioError>;
