use crate::error::PipelineError;
use crate::fit::{CropParams, ImageDimensions};
use crate::rendering::Rasterizer;
use gray_dither::RgbaImage;

/// [`Rasterizer`] working directly on [`RgbaImage`] buffers.
///
/// Resizing is nearest-neighbor. Useful for headless runs and tests where
/// exact, platform-independent pixels matter more than resampling quality.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryRasterizer;

impl Rasterizer for MemoryRasterizer {
    type Bitmap = RgbaImage;

    fn dimensions(&self, bitmap: &RgbaImage) -> ImageDimensions {
        ImageDimensions::new(bitmap.width(), bitmap.height())
    }

    fn resize(&self, bitmap: &RgbaImage, size: ImageDimensions) -> Result<RgbaImage, PipelineError> {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return Ok(RgbaImage::filled(size.width, size.height, [0, 0, 0, 0]));
        }

        let mut data = Vec::with_capacity(size.width as usize * size.height as usize * 4);
        for y in 0..size.height as u64 {
            let sy = (y * bitmap.height() as u64 / size.height as u64) as u32;
            for x in 0..size.width as u64 {
                let sx = (x * bitmap.width() as u64 / size.width as u64) as u32;
                data.extend_from_slice(&bitmap.pixel(sx, sy).unwrap_or([0, 0, 0, 0]));
            }
        }
        Ok(RgbaImage::new(size.width, size.height, data)?)
    }

    fn crop(&self, bitmap: &RgbaImage, crop: CropParams) -> Result<RgbaImage, PipelineError> {
        let image = self.dimensions(bitmap);
        if !crop.fits_within(image) {
            return Err(PipelineError::InvalidCrop { crop, image });
        }

        let mut data = Vec::with_capacity(crop.width as usize * crop.height as usize * 4);
        for y in crop.origin_y..crop.origin_y + crop.height {
            for x in crop.origin_x..crop.origin_x + crop.width {
                data.extend_from_slice(&bitmap.pixel(x, y).unwrap_or([0, 0, 0, 0]));
            }
        }
        Ok(RgbaImage::new(crop.width, crop.height, data)?)
    }

    fn read_pixels(&self, bitmap: &RgbaImage) -> Result<RgbaImage, PipelineError> {
        Ok(bitmap.clone())
    }

    fn draw_pixels(&self, image: &RgbaImage) -> Result<RgbaImage, PipelineError> {
        Ok(image.clone())
    }
}
