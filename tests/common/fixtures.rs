//! Test fixtures and constants.

use flate2::write::GzEncoder;
use flate2::Compression;
use gray_dither::{BitDepth, RgbaImage};
use lockscreen::models::ScreenSpecs;
use lockscreen::rendering::encode_png;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Small screens for fast tests
pub mod screens {
    use super::*;

    /// 12x14 4bpp, no borders
    pub fn simple() -> ScreenSpecs {
        ScreenSpecs::new(12, 14, [0, 0, 0, 0], BitDepth::Four).unwrap()
    }

    /// 16x8 1bpp, no borders
    pub fn one_bit() -> ScreenSpecs {
        ScreenSpecs::new(16, 8, [0, 0, 0, 0], BitDepth::One).unwrap()
    }

    /// 10x12 4bpp with a border on every side (visible 6x9)
    pub fn bordered() -> ScreenSpecs {
        ScreenSpecs::new(10, 12, [1, 2, 3, 1], BitDepth::Four).unwrap()
    }
}

/// Deterministic pseudo-random bytes
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Deterministic pseudo-random opaque image
pub fn random_image(seed: u64, width: u32, height: u32) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..width as usize * height as usize)
        .flat_map(|_| [rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>(), 255])
        .collect();
    RgbaImage::new(width, height, data).unwrap()
}

/// Horizontal black-to-white ramp
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    let row: Vec<u8> = (0..width)
        .map(|x| (x * 255 / width.saturating_sub(1).max(1)) as u8)
        .collect();
    let gray: Vec<u8> = (0..height).flat_map(|_| row.iter().copied()).collect();
    RgbaImage::from_gray(width, height, &gray)
}

/// Hand-built 8-byte header
pub fn raw_header(width: u16, height: u16, flags: u8, data_length: u32) -> Vec<u8> {
    let w = width.to_le_bytes();
    let h = height.to_le_bytes();
    let l = data_length.to_le_bytes();
    vec![w[0], w[1], h[0], h[1], flags, l[0], l[1], l[2]]
}

/// Single gzip member holding `data`
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Write `image` as PNG into `dir`
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(image).unwrap()).unwrap();
    path
}
