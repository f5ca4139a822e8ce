use crate::fit::{CropParams, ImageDimensions};
use thiserror::Error;

/// Errors raised while encoding or parsing the device image wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid image data: too short for header")]
    HeaderTooShort { length: usize },

    #[error("Invalid BPP indicator: {0}")]
    InvalidBppIndicator(u8),

    /// Only 0 and 1 are defined; other low nibbles are rejected rather than read as raw.
    #[error("Invalid compression mode: {0}")]
    UnknownCompression(u8),

    #[error("Invalid image data: expected {expected} bytes but got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid compressed data: incomplete chunk size")]
    IncompleteChunkSize { offset: usize },

    #[error("Invalid compressed data: incomplete chunk")]
    IncompleteChunkData {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Payload too large: {length} bytes (max 16777215)")]
    PayloadTooLarge { length: usize },

    #[error("Compressed chunk too large: {length} bytes (max 65535)")]
    ChunkTooLarge { length: usize },

    #[error("Invalid compressed data: chunk at offset {offset} inflates past {limit} bytes")]
    DecompressedTooLarge { offset: usize, limit: usize },

    #[error("Compression error: {0}")]
    Compress(std::io::Error),

    #[error("Decompression error: {0}")]
    Decompress(std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("Crop dimensions {target} exceed image dimensions {image}")]
    CropExceedsSource {
        image: ImageDimensions,
        target: ImageDimensions,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown device model: {0}")]
    UnknownModel(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Invalid bits per pixel: {0} (expected 1 or 4)")]
    InvalidBitsPerPixel(u8),

    #[error("Padding {horizontal}x{vertical} exceeds screen dimensions {width}x{height}")]
    PaddingExceedsDimensions {
        width: u16,
        height: u16,
        horizontal: u32,
        vertical: u32,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the end-to-end upload/download pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Rasterizer unavailable: {0}")]
    RasterizerUnavailable(String),

    #[error(
        "Crop {}x{} at ({}, {}) exceeds bitmap {image}",
        .crop.width,
        .crop.height,
        .crop.origin_x,
        .crop.origin_y
    )]
    InvalidCrop {
        crop: CropParams,
        image: ImageDimensions,
    },

    #[error("Failed to load image: {0}")]
    ImageLoadFailure(String),

    #[error("PNG encode error: {0}")]
    ImageEncode(String),

    #[error("Fit error: {0}")]
    Fit(#[from] FitError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Dither error: {0}")]
    Dither(#[from] gray_dither::DitherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
