use crate::error::PipelineError;
use crate::fit::{CropParams, ImageDimensions};
use crate::rendering::Rasterizer;
use gray_dither::RgbaImage;
use tiny_skia::{
    ColorU8, FilterQuality, IntRect, Paint, Pattern, Pixmap, Rect, SpreadMode, Transform,
};

/// [`Rasterizer`] backed by tiny-skia pixmaps.
///
/// Resizing samples bicubically with edge pixels clamped, so downscaled
/// borders stay opaque.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkiaRasterizer;

impl SkiaRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn allocate(width: u32, height: u32) -> Result<Pixmap, PipelineError> {
        Pixmap::new(width, height).ok_or_else(|| {
            PipelineError::RasterizerUnavailable(format!(
                "cannot allocate {width}x{height} pixmap"
            ))
        })
    }
}

impl Rasterizer for SkiaRasterizer {
    type Bitmap = Pixmap;

    fn dimensions(&self, bitmap: &Pixmap) -> ImageDimensions {
        ImageDimensions::new(bitmap.width(), bitmap.height())
    }

    fn resize(&self, bitmap: &Pixmap, size: ImageDimensions) -> Result<Pixmap, PipelineError> {
        let mut target = Self::allocate(size.width, size.height)?;
        let scale_x = size.width as f32 / bitmap.width() as f32;
        let scale_y = size.height as f32 / bitmap.height() as f32;

        let paint = Paint {
            shader: Pattern::new(
                bitmap.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Bicubic,
                1.0,
                Transform::from_scale(scale_x, scale_y),
            ),
            ..Default::default()
        };
        let rect = Rect::from_xywh(0.0, 0.0, size.width as f32, size.height as f32)
            .ok_or_else(|| PipelineError::RasterizerUnavailable(format!("invalid size {size}")))?;
        target.fill_rect(rect, &paint, Transform::identity(), None);

        Ok(target)
    }

    fn crop(&self, bitmap: &Pixmap, crop: CropParams) -> Result<Pixmap, PipelineError> {
        // clone_rect silently clips, so reject partial rectangles up front
        let image = self.dimensions(bitmap);
        if !crop.fits_within(image) {
            return Err(PipelineError::InvalidCrop { crop, image });
        }
        i32::try_from(crop.origin_x)
            .ok()
            .zip(i32::try_from(crop.origin_y).ok())
            .and_then(|(x, y)| IntRect::from_xywh(x, y, crop.width, crop.height))
            .and_then(|rect| bitmap.clone_rect(rect))
            .ok_or(PipelineError::InvalidCrop { crop, image })
    }

    fn read_pixels(&self, bitmap: &Pixmap) -> Result<RgbaImage, PipelineError> {
        let data = bitmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        Ok(RgbaImage::new(bitmap.width(), bitmap.height(), data)?)
    }

    fn draw_pixels(&self, image: &RgbaImage) -> Result<Pixmap, PipelineError> {
        let mut pixmap = Self::allocate(image.width(), image.height())?;
        for (dst, [r, g, b, a]) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(pixmap)
    }
}
