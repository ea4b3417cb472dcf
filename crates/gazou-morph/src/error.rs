//! Error types for gazou-morph

use thiserror::Error;

/// Errors raised while building structuring elements
#[derive(Debug, Error)]
pub enum MorphError {
    /// Unrecognized structuring-element shape name
    #[error("unknown structuring element shape: {0}")]
    UnknownShape(String),

    /// Non-positive effective radius
    #[error("invalid structuring element radius: rx={rx}, ry={ry} (both must be >= 1)")]
    InvalidRadius { rx: i32, ry: i32 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
