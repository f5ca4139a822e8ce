//! Error diffusion quantization.
//!
//! Pixels are visited in raster order (top-to-bottom, left-to-right). Each
//! pixel is snapped to a device gray level and the rounding error is pushed
//! onto not-yet-visited neighbors according to a [`Kernel`]. Neighbors are
//! updated in place and floored after every update, so the same input
//! always produces the same bytes.
//!
//! # Algorithms
//!
//! - **Floyd-Steinberg**: 100% propagation over 4 neighbors (default)
//! - **Atkinson**: 75% propagation over 6 neighbors
//! - **Reduced Atkinson**: 37.5% propagation over 4 neighbors

mod kernel;

pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG, REDUCED_ATKINSON};

use std::fmt;
use std::str::FromStr;

use crate::depth::BitDepth;
use crate::error::ParseAlgorithmError;

/// Dithering algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitheringAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation).
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// The discarded quarter of the error is what gives Atkinson its
    /// crisp, high-contrast look. It must not be renormalized.
    Atkinson,

    /// Reduced Atkinson error diffusion (6/16 propagation).
    ReducedAtkinson,
}

impl DitheringAlgorithm {
    pub const ALL: [DitheringAlgorithm; 3] = [
        DitheringAlgorithm::FloydSteinberg,
        DitheringAlgorithm::Atkinson,
        DitheringAlgorithm::ReducedAtkinson,
    ];

    /// The diffusion kernel for this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitheringAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitheringAlgorithm::Atkinson => &ATKINSON,
            DitheringAlgorithm::ReducedAtkinson => &REDUCED_ATKINSON,
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitheringAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitheringAlgorithm::Atkinson => "atkinson",
            DitheringAlgorithm::ReducedAtkinson => "reduced-atkinson",
        }
    }
}

impl fmt::Display for DitheringAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitheringAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DitheringAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Snap a 256-scale value to the level grid of `depth`.
///
/// 1bpp thresholds at 127; 4bpp posterizes down to the nearest lower
/// multiple of the level step. Values outside 0..=255 (possible after error
/// diffusion) are posterized as-is and clamped only when converted to an
/// index.
#[inline]
pub fn posterize(value: f64, depth: BitDepth) -> f64 {
    match depth {
        BitDepth::One => {
            if value >= 127.0 {
                255.0
            } else {
                0.0
            }
        }
        BitDepth::Four => {
            let step = depth.step();
            (value / step).floor() * step
        }
    }
}

/// Convert a posterized 256-scale value to a level index in `0..levels`.
#[inline]
pub fn level_index(value: f64, depth: BitDepth) -> u8 {
    let max = (depth.levels() - 1) as f64;
    (value / depth.step()).floor().clamp(0.0, max) as u8
}

/// Quantize `gray` in place with error diffusion and return one level index
/// per pixel, row-major.
///
/// `gray` must hold `width * height` values on the 0-255 scale. After the
/// call every visited entry holds its posterized value.
pub fn error_diffusion(
    gray: &mut [f64],
    width: usize,
    height: usize,
    depth: BitDepth,
    kernel: &Kernel,
) -> Vec<u8> {
    debug_assert_eq!(gray.len(), width * height);
    let mut indices = vec![0u8; width * height];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = gray[idx];
            let new = posterize(old, depth);
            gray[idx] = new;

            diffuse_error(gray, width, height, x, y, old - new, kernel);

            indices[idx] = level_index(gray[idx], depth);
        }
    }

    indices
}

/// Push `error` onto the kernel's neighbors of `(x, y)`.
///
/// Out-of-bounds neighbors are silently dropped.
#[inline]
fn diffuse_error(
    gray: &mut [f64],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    error: f64,
    kernel: &Kernel,
) {
    let divisor = kernel.divisor as f64;
    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        let target = ny as usize * width + nx as usize;
        gray[target] = (gray[target] + error * (weight as f64 / divisor)).floor();
    }
}
