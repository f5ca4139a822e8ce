//! GrayDitherer builder -- the primary entry point for the crate.

use crate::depth::BitDepth;
use crate::dither::{error_diffusion, DitheringAlgorithm};
use crate::error::DitherError;
use crate::grayscale::gray_with_contrast;
use crate::image::RgbaImage;
use crate::output::DitheredImage;
use crate::pack::{invert_bits, pack_pixels, to_device_order};

/// Grayscale ditherer for a fixed screen bit depth.
///
/// Configuration methods consume and return `self`; [`dither()`](Self::dither)
/// takes `&self` so one builder can process many images.
///
/// # Example
///
/// ```
/// use gray_dither::{BitDepth, GrayDitherer, RgbaImage};
///
/// let image = RgbaImage::filled(8, 1, [0, 0, 0, 255]);
/// let result = GrayDitherer::new(BitDepth::One).dither(&image);
///
/// // Black is stored as 1 on monochrome screens
/// assert_eq!(result.pixel_data(), &[0xFF]);
/// ```
#[derive(Debug, Clone)]
pub struct GrayDitherer {
    depth: BitDepth,
    contrast: f64,
    algorithm: DitheringAlgorithm,
}

impl GrayDitherer {
    /// Create a ditherer with contrast 1.0 and Floyd-Steinberg diffusion.
    pub fn new(depth: BitDepth) -> Self {
        Self {
            depth,
            contrast: 1.0,
            algorithm: DitheringAlgorithm::default(),
        }
    }

    /// Set the contrast factor applied around gray 128.
    #[inline]
    pub fn contrast(mut self, factor: f64) -> Self {
        self.contrast = factor;
        self
    }

    /// Select the error diffusion algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitheringAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Dither an RGBA bitmap into a preview and packed device pixel data.
    pub fn dither(&self, image: &RgbaImage) -> DitheredImage {
        let width = image.width() as usize;
        let height = image.height() as usize;

        let mut gray = gray_with_contrast(image.as_bytes(), self.contrast);
        let indices = error_diffusion(&mut gray, width, height, self.depth, self.algorithm.kernel());

        let step = self.depth.step();
        let preview_gray: Vec<u8> = indices
            .iter()
            .map(|&index| (index as f64 * step).round() as u8)
            .collect();
        let preview = RgbaImage::from_gray(image.width(), image.height(), &preview_gray);

        let mut ordered = to_device_order(&indices, width, height);
        if self.depth == BitDepth::One {
            invert_bits(&mut ordered);
        }
        let pixel_data = pack_pixels(&ordered, self.depth);

        DitheredImage::new(preview, pixel_data, self.depth)
    }

    /// Dither a raw RGBA buffer, validating its length first.
    pub fn dither_rgba(
        &self,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> Result<DitheredImage, DitherError> {
        let image = RgbaImage::new(width, height, rgba)?;
        Ok(self.dither(&image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ditherer = GrayDitherer::new(BitDepth::Four);
        assert_eq!(ditherer.contrast, 1.0);
        assert_eq!(ditherer.algorithm, DitheringAlgorithm::FloydSteinberg);
        assert_eq!(ditherer.depth(), BitDepth::Four);
    }

    #[test]
    fn test_builder_chaining() {
        let ditherer = GrayDitherer::new(BitDepth::One)
            .contrast(1.5)
            .algorithm(DitheringAlgorithm::ReducedAtkinson);
        assert_eq!(ditherer.contrast, 1.5);
        assert_eq!(ditherer.algorithm, DitheringAlgorithm::ReducedAtkinson);
    }

    #[test]
    fn test_white_one_bit_is_zero() {
        let image = RgbaImage::filled(8, 2, [255, 255, 255, 255]);
        let result = GrayDitherer::new(BitDepth::One).dither(&image);
        assert_eq!(result.pixel_data(), &[0x00, 0x00]);
        assert!(result.preview().pixels().all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn test_four_bit_solid_levels() {
        // 204 = 12 * 17 sits exactly on a level, so nothing is diffused
        let image = RgbaImage::filled(3, 3, [204, 204, 204, 255]);
        let result = GrayDitherer::new(BitDepth::Four).dither(&image);
        assert_eq!(result.pixel_data(), &[0xCC, 0xCC, 0xCC, 0xCC, 0xC0]);
        assert!(result.preview().pixels().all(|p| p == [204, 204, 204, 255]));
    }

    #[test]
    fn test_pixel_data_in_device_order() {
        // 2x1: left white, right black at 4bpp -> right column first
        let rgba = vec![255, 255, 255, 255, 0, 0, 0, 255];
        let result = GrayDitherer::new(BitDepth::Four)
            .dither_rgba(2, 1, rgba)
            .unwrap();
        assert_eq!(result.pixel_data(), &[0x0F]);
        assert_eq!(result.preview().pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(result.preview().pixel(1, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_dither_rgba_rejects_short_buffer() {
        let err = GrayDitherer::new(BitDepth::Four)
            .dither_rgba(2, 2, vec![0; 15])
            .unwrap_err();
        assert_eq!(
            err,
            DitherError::PixelBufferMismatch {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_high_contrast_saturates() {
        // 140 with contrast 20 -> 368 clamped to 255
        let image = RgbaImage::filled(2, 2, [140, 140, 140, 255]);
        let result = GrayDitherer::new(BitDepth::Four).contrast(20.0).dither(&image);
        assert_eq!(result.pixel_data(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_empty_image() {
        let image = RgbaImage::filled(0, 0, [0, 0, 0, 255]);
        let result = GrayDitherer::new(BitDepth::One).dither(&image);
        assert!(result.pixel_data().is_empty());
        assert_eq!(result.preview().pixel_count(), 0);
    }
}
