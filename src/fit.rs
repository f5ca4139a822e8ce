//! Fitting a source image to a target screen: cover rescale and center crop.

use crate::error::FitError;
use serde::Serialize;
use std::fmt;

/// Width and height of a bitmap in pixels. Zero is a valid degenerate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rectangle to cut out of a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropParams {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropParams {
    /// Whether the whole rectangle lies inside `image`.
    pub fn fits_within(&self, image: ImageDimensions) -> bool {
        self.origin_x as u64 + self.width as u64 <= image.width as u64
            && self.origin_y as u64 + self.height as u64 <= image.height as u64
    }
}

/// Scale `image` so it fully covers `container` while keeping its aspect
/// ratio (CSS `object-fit: cover`).
///
/// The limiting side matches the container exactly; the other side is
/// rounded up so the result never under-covers. Any zero dimension yields
/// `0x0`.
pub fn rescale_to_cover(image: ImageDimensions, container: ImageDimensions) -> ImageDimensions {
    if image.is_empty() || container.is_empty() {
        return ImageDimensions::new(0, 0);
    }

    if container.ratio() < image.ratio() {
        let scale = container.width as f64 / image.width as f64;
        ImageDimensions::new(container.width, (image.height as f64 * scale).ceil() as u32)
    } else {
        let scale = container.height as f64 / image.height as f64;
        ImageDimensions::new((image.width as f64 * scale).ceil() as u32, container.height)
    }
}

/// Compute a `target`-sized crop centered in `image`.
///
/// With an odd size difference the origin lands on the far side of the
/// center, so the extra pixel is trimmed from the left or top.
pub fn center_crop(image: ImageDimensions, target: ImageDimensions) -> Result<CropParams, FitError> {
    if target.width > image.width || target.height > image.height {
        return Err(FitError::CropExceedsSource { image, target });
    }

    Ok(CropParams {
        origin_x: (image.width - target.width).div_ceil(2),
        origin_y: (image.height - target.height).div_ceil(2),
        width: target.width,
        height: target.height,
    })
}
