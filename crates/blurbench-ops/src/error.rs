//! Error types for blur operations.

use thiserror::Error;

/// Error type for blur operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Plane or parameter configuration was rejected.
    #[error(transparent)]
    Config(#[from] blurbench_core::Error),

    /// Source and destination planes have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Operation not available in this build.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type for blur operations.
pub type OpsResult<T> = Result<T, OpsError>;
