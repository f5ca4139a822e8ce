//! Error types for dithering and packing.

use std::fmt;

/// Error type for the gray-dither public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// RGBA buffer length does not match `width * height * 4`
    PixelBufferMismatch {
        /// Byte length implied by the dimensions
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },
    /// Bit depth other than 1 or 4
    UnsupportedBitDepth(u8),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::PixelBufferMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            DitherError::UnsupportedBitDepth(bits) => {
                write!(f, "unsupported bits per pixel: {} (expected 1 or 4)", bits)
            }
        }
    }
}

impl std::error::Error for DitherError {}

/// Error type for parsing a [`DitheringAlgorithm`](crate::DitheringAlgorithm) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dithering algorithm '{}' (expected floyd-steinberg, atkinson or reduced-atkinson)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
