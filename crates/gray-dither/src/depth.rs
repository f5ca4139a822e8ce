//! Screen bit depth.

use crate::error::DitherError;

/// Bits per pixel supported by the device screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Monochrome, 8 pixels per byte
    One,
    /// 16 gray levels, 2 pixels per byte
    Four,
}

impl BitDepth {
    /// Number of bits used by one pixel.
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Four => 4,
        }
    }

    /// Number of representable gray levels (`2^bits`).
    #[inline]
    pub fn levels(self) -> u8 {
        1 << self.bits()
    }

    /// Pixels stored in a single byte.
    #[inline]
    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits() as usize
    }

    /// Distance between two adjacent levels on the 0-255 scale.
    #[inline]
    pub fn step(self) -> f64 {
        255.0 / (self.levels() - 1) as f64
    }

    /// Bytes needed to store `pixel_count` packed pixels.
    #[inline]
    pub fn packed_len(self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(self.pixels_per_byte())
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = DitherError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(BitDepth::One),
            4 => Ok(BitDepth::Four),
            other => Err(DitherError::UnsupportedBitDepth(other)),
        }
    }
}
