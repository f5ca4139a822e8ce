//! gray-dither: grayscale dithering and pixel packing for small device screens
//!
//! This crate turns RGBA bitmaps into the quantized, bit-packed pixel data
//! expected by fixed-size 1-bit and 4-bit grayscale displays, and turns that
//! packed data back into a viewable bitmap.
//!
//! # Quick Start
//!
//! The [`GrayDitherer`] builder is the primary entry point:
//!
//! ```
//! use gray_dither::{BitDepth, DitheringAlgorithm, GrayDitherer, RgbaImage};
//!
//! let image = RgbaImage::filled(4, 2, [128, 128, 128, 255]);
//! let result = GrayDitherer::new(BitDepth::Four)
//!     .contrast(1.2)
//!     .algorithm(DitheringAlgorithm::Atkinson)
//!     .dither(&image);
//!
//! // 8 pixels at 4bpp pack into 4 bytes
//! assert_eq!(result.pixel_data().len(), 4);
//! assert_eq!(result.preview().width(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA input (row-major)
//!     |
//!     v
//! HSL lightness: (max(R,G,B) + min(R,G,B)) / 2
//!     |
//!     v
//! [Contrast]  (l - 128) * c + 128, clamped to 0..=255
//!     |
//!     v
//! Error diffusion (raster order, in place)
//!     |                          |
//!     v                          v
//! N-level indices            preview RGBA (index * step)
//!     |
//!     v
//! Device order: columns right-to-left, each column top-to-bottom
//!     |
//!     v
//! Bit packing (1bpp inverted: 1 = black)
//! ```
//!
//! # Storage Order
//!
//! Device screens store their pixels column by column starting from the
//! right-most column. The [`pack`] module exposes the reordering and the
//! nibble/bit packing separately so the same primitives serve the encoder
//! (padding borders) and the [`render`] module (reconstructing a bitmap from
//! bytes downloaded from the device).

pub mod api;
pub mod depth;
pub mod dither;
pub mod error;
pub mod grayscale;
pub mod image;
pub mod output;
pub mod pack;
pub mod render;


pub use api::GrayDitherer;
pub use depth::BitDepth;
pub use dither::{DitheringAlgorithm, Kernel};
pub use error::{DitherError, ParseAlgorithmError};
pub use image::RgbaImage;
pub use output::DitheredImage;
pub use render::render_pixel_data;
