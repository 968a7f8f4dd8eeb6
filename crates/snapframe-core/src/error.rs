//! Error types for the capture pipeline.

use thiserror::Error;

/// Errors raised while planning, cropping or filtering a captured frame.
///
/// Every variant is a validation failure on the caller's input. Operations
/// check their inputs before touching any pixel buffer, so an error never
/// leaves a frame half-processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// A ratio component is zero.
    #[error("Invalid aspect ratio {numerator}:{denominator}: both components must be non-zero")]
    InvalidRatio { numerator: u32, denominator: u32 },

    /// Pixel buffer length doesn't match width * height * 4.
    #[error("Invalid frame: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidFrame { expected: u64, actual: usize },

    /// Crop rectangle extends past the source frame.
    #[error(
        "Crop {width}x{height}+{x}+{y} exceeds source frame {source_width}x{source_height}"
    )]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },

    /// Filter identifier not recognized.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Ratio identifier is not of the form `N-D`.
    #[error("Unknown aspect ratio: {0}")]
    UnknownRatio(String),
}
