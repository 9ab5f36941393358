//! Error types for the engine.
//!
//! One enum per failure domain, plus [`EngineError`] wrapping all of them
//! for convenient `?` propagation in application code. Every condition here
//! is recoverable by the caller; the engine never panics on malformed input.

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,

    /// Non-hexadecimal character encountered
    #[error("invalid hex digit {digit:?}")]
    InvalidDigit { digit: char },
}

/// Error type for degenerate pixel buffers handed to the palette extractor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The pixel buffer contains no bytes
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    /// One or both image dimensions are zero
    #[error("image dimensions are zero: {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    /// Buffer length does not match width * height * bytes-per-pixel
    #[error("pixel buffer has {len} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        len: usize,
        expected: usize,
        width: u32,
        height: u32,
    },
}

/// Error type for the reference color-name dataset.
///
/// Raised at construction time when the dataset cannot be loaded. A
/// successfully constructed [`crate::ColorNamer`] never fails a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset is missing, unparseable, or empty
    #[error("color name dataset unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Unified error type for the public API.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}
