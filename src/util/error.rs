//! Error types for edgemap.

use thiserror::Error;

/// Result alias for edgemap operations.
pub type EdgeMapResult<T> = std::result::Result<T, EdgeMapError>;

/// Errors that can occur when building inputs or running the pipeline.
///
/// All variants are rejected synchronously at the boundary of the operation
/// that detects them; no stage substitutes defaults for malformed input.
#[derive(Debug, Error, PartialEq)]
pub enum EdgeMapError {
    /// An image dimension is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// A pixel buffer does not match the declared dimensions.
    #[error("buffer size mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// A channel or derivative field disagrees with the reference dimensions.
    #[error(
        "dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    /// The channel set is empty.
    #[error("no channels provided")]
    NoChannels,
    /// The Gaussian smoothing sigma is not strictly positive.
    #[error("invalid sigma: {sigma} (must be > 0)")]
    InvalidSigma { sigma: f32 },
    /// A threshold ratio lies outside [0, 1].
    #[error("threshold {name} out of range: {value} (must be in [0, 1])")]
    ThresholdOutOfRange { name: &'static str, value: f32 },
    /// Image decoding or encoding failed.
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
