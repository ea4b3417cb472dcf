//! Error types for gazou-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant is a contract violation fatal to the current operation:
//! nothing is retried and no partial result is produced. The offending
//! value is carried in the message for diagnostics.

use thiserror::Error;

/// Gazou core error type
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count outside the supported set {1, 3, 4}
    #[error("invalid channel count: {0} (must be 1, 3 or 4)")]
    InvalidChannelCount(u32),

    /// Accessor invoked against a buffer of the wrong channel count
    #[error("channel mismatch: accessor expects {expected} channel(s), buffer has {actual}")]
    ChannelMismatch { expected: u32, actual: u32 },

    /// Setter given a value slice of the wrong length
    #[error("arity mismatch: expected {expected} value(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Sample vector length does not match width * height * channels
    #[error("invalid sample count: expected {expected}, got {actual}")]
    InvalidSampleCount { expected: usize, actual: usize },

    /// Invalid matrix shape
    #[error("invalid matrix shape: {rows}x{cols}")]
    InvalidMatrixShape { rows: u32, cols: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
