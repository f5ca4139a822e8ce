use crate::codec::{decode, encode, DecodeResult, EncodeOptions};
use crate::error::PipelineError;
use crate::fit::{center_crop, rescale_to_cover, ImageDimensions};
use crate::models::ScreenSpecs;
use crate::rendering::Rasterizer;
use gray_dither::{render_pixel_data, BitDepth, DitheringAlgorithm, GrayDitherer};

/// Tone settings applied before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherSettings {
    pub contrast: f64,
    pub algorithm: DitheringAlgorithm,
}

impl Default for DitherSettings {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            algorithm: DitheringAlgorithm::default(),
        }
    }
}

/// A dithered bitmap ready for padding and encoding.
#[derive(Debug, Clone)]
pub struct ProcessedImage<B> {
    /// What the screen will show
    pub preview: B,
    /// Packed pixel data in device order
    pub pixel_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadImage<B> {
    pub preview: B,
    pub pixel_data: Vec<u8>,
    /// Header plus payload, ready for the transport
    pub encoded: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct DownloadedImage<B> {
    pub decoded: DecodeResult,
    pub bitmap: B,
}

/// Upload and download flows built on a host [`Rasterizer`].
pub struct ImagePipeline<R: Rasterizer> {
    rasterizer: R,
}

impl<R: Rasterizer> ImagePipeline<R> {
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Scale `bitmap` to cover `target`, then cut out the centered
    /// `target`-sized region.
    pub fn center_crop_resize(
        &self,
        bitmap: &R::Bitmap,
        target: ImageDimensions,
    ) -> Result<R::Bitmap, PipelineError> {
        let source = self.rasterizer.dimensions(bitmap);
        let cover = rescale_to_cover(source, target);
        let crop = center_crop(cover, target)?;
        tracing::debug!(%source, %cover, %target, "Fitting image");

        let resized = self.rasterizer.resize(bitmap, cover)?;
        self.rasterizer.crop(&resized, crop)
    }

    /// Dither `bitmap` as-is at `depth`.
    pub fn process_image(
        &self,
        bitmap: &R::Bitmap,
        depth: BitDepth,
        settings: DitherSettings,
    ) -> Result<ProcessedImage<R::Bitmap>, PipelineError> {
        let pixels = self.rasterizer.read_pixels(bitmap)?;
        let dithered = GrayDitherer::new(depth)
            .contrast(settings.contrast)
            .algorithm(settings.algorithm)
            .dither(&pixels);
        let (preview, pixel_data) = dithered.into_parts();

        Ok(ProcessedImage {
            preview: self.rasterizer.draw_pixels(&preview)?,
            pixel_data,
        })
    }

    /// Fit, dither and encode `bitmap` for `specs`.
    ///
    /// With `pad_image` the image is fitted to the visible area and the
    /// hidden borders are added by the encoder; otherwise it fills the
    /// whole panel.
    pub fn prepare_upload(
        &self,
        bitmap: &R::Bitmap,
        specs: &ScreenSpecs,
        settings: DitherSettings,
        options: EncodeOptions,
    ) -> Result<UploadImage<R::Bitmap>, PipelineError> {
        let target = if options.pad_image {
            specs.visible_dimensions()
        } else {
            specs.dimensions()
        };
        tracing::info!(
            source = %self.rasterizer.dimensions(bitmap),
            %target,
            bits_per_pixel = specs.depth.bits(),
            algorithm = %settings.algorithm,
            contrast = settings.contrast,
            "Preparing upload"
        );

        let fitted = self.center_crop_resize(bitmap, target)?;
        let processed = self.process_image(&fitted, specs.depth, settings)?;
        let encoded = encode(&processed.pixel_data, specs, options)?;

        Ok(UploadImage {
            preview: processed.preview,
            pixel_data: processed.pixel_data,
            encoded,
        })
    }

    /// Decode bytes read back from a device and render them.
    pub fn render_download(
        &self,
        bytes: &[u8],
    ) -> Result<DownloadedImage<R::Bitmap>, PipelineError> {
        let decoded = decode(bytes)?;
        tracing::info!(
            width = decoded.width,
            height = decoded.height,
            bits_per_pixel = decoded.depth.bits(),
            compressed = decoded.was_compressed,
            "Rendering downloaded image"
        );

        let image = render_pixel_data(
            &decoded.pixel_data,
            decoded.width as u32,
            decoded.height as u32,
            decoded.depth,
        );
        let bitmap = self.rasterizer.draw_pixels(&image)?;

        Ok(DownloadedImage { decoded, bitmap })
    }
}
