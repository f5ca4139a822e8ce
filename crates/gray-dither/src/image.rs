//! Owned RGBA bitmap.

use crate::error::DitherError;

/// A straight (non-premultiplied) RGBA8 bitmap in row-major order.
///
/// This is the pixel exchange format between the host rasterizer, the
/// ditherer and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wrap an RGBA buffer, checking that its length is `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DitherError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(DitherError::PixelBufferMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(count),
        }
    }

    /// Build an opaque image from one gray value per pixel (row-major).
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `gray.len() == width * height`.
    pub fn from_gray(width: u32, height: u32, gray: &[u8]) -> Self {
        debug_assert_eq!(gray.len(), width as usize * height as usize);
        let data = gray.iter().flat_map(|&v| [v, v, v, 255]).collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Iterate pixels as `[r, g, b, a]` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = RgbaImage::new(2, 2, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            DitherError::PixelBufferMismatch {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_filled() {
        let image = RgbaImage::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(image.pixel_count(), 6);
        assert!(image.pixels().all(|p| p == [1, 2, 3, 4]));
    }

    #[test]
    fn test_from_gray_is_opaque() {
        let image = RgbaImage::from_gray(2, 1, &[10, 200]);
        assert_eq!(image.as_bytes(), &[10, 10, 10, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn test_pixel_lookup() {
        let image = RgbaImage::from_gray(2, 2, &[0, 1, 2, 3]);
        assert_eq!(image.pixel(1, 1), Some([3, 3, 3, 255]));
        assert_eq!(image.pixel(0, 1), Some([2, 2, 2, 255]));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn test_empty_image() {
        let image = RgbaImage::new(0, 5, Vec::new()).unwrap();
        assert_eq!(image.pixel_count(), 0);
        assert_eq!(image.pixels().count(), 0);
    }
}
