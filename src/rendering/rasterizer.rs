use crate::error::PipelineError;
use crate::fit::{CropParams, ImageDimensions};
use gray_dither::RgbaImage;

/// Host bitmap operations the image pipeline depends on.
///
/// The pipeline calls these in a fixed order (resize to cover, crop to the
/// screen, read pixels) and never loads or displays images itself.
pub trait Rasterizer {
    /// Host bitmap handle
    type Bitmap;

    fn dimensions(&self, bitmap: &Self::Bitmap) -> ImageDimensions;

    fn resize(
        &self,
        bitmap: &Self::Bitmap,
        size: ImageDimensions,
    ) -> Result<Self::Bitmap, PipelineError>;

    fn crop(&self, bitmap: &Self::Bitmap, crop: CropParams) -> Result<Self::Bitmap, PipelineError>;

    /// Straight-alpha RGBA samples, row-major.
    fn read_pixels(&self, bitmap: &Self::Bitmap) -> Result<RgbaImage, PipelineError>;

    fn draw_pixels(&self, image: &RgbaImage) -> Result<Self::Bitmap, PipelineError>;
}
