//! Error types for edgebench.

use thiserror::Error;

/// Result alias for edgebench operations.
pub type EdgeBenchResult<T> = std::result::Result<T, EdgeBenchError>;

/// Errors that can occur when running edgebench strategies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EdgeBenchError {
    /// The mode identifier is not one of `"0"`..`"4"`.
    #[error("unsupported mode {given:?} (expected \"0\"..\"4\")")]
    UnsupportedMode { given: String },
    /// An image dimension is zero or does not fit the backend ABI.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A pixel buffer length does not match `width * height * 4`.
    #[error("buffer length mismatch: needed {needed} bytes, got {got}")]
    DimensionMismatch { needed: usize, got: usize },
    /// Image decode or encode failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
    /// The requested compute backend is not registered in this build.
    #[error("compute backend {name:?} is unavailable")]
    BackendUnavailable { name: &'static str },
    /// A compute backend accepted the request but failed to run it.
    #[error("compute backend {name:?} failed: {reason}")]
    BackendCompute { name: &'static str, reason: String },
    /// The dedicated worker pool for the parallel strategy could not be built.
    #[error("worker pool construction failed: {reason}")]
    WorkerPool { reason: String },
}
