//! Output of the dithering pipeline.

use crate::depth::BitDepth;
use crate::image::RgbaImage;

/// Result of dithering one bitmap.
///
/// Holds two views of the same quantized image:
///
/// - [`preview()`](DitheredImage::preview): opaque RGBA, row-major, each
///   pixel `index * step` on the 0-255 scale, for showing the user what
///   the screen will display
/// - [`pixel_data()`](DitheredImage::pixel_data): packed bytes in device
///   storage order, ready for padding and encoding
#[derive(Debug, Clone)]
pub struct DitheredImage {
    preview: RgbaImage,
    pixel_data: Vec<u8>,
    depth: BitDepth,
}

impl DitheredImage {
    pub fn new(preview: RgbaImage, pixel_data: Vec<u8>, depth: BitDepth) -> Self {
        debug_assert_eq!(pixel_data.len(), depth.packed_len(preview.pixel_count()));
        Self {
            preview,
            pixel_data,
            depth,
        }
    }

    #[inline]
    pub fn preview(&self) -> &RgbaImage {
        &self.preview
    }

    /// Packed pixel bytes in device order.
    #[inline]
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.preview.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.preview.height()
    }

    /// Split into `(preview, pixel_data)`.
    pub fn into_parts(self) -> (RgbaImage, Vec<u8>) {
        (self.preview, self.pixel_data)
    }
}
