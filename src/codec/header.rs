use crate::error::CodecError;
use gray_dither::BitDepth;

/// Size of the fixed image header.
pub const HEADER_LEN: usize = 8;

/// Largest payload the 24-bit length field can describe.
pub const MAX_PAYLOAD_LEN: usize = 0xFF_FFFF;

/// How the payload following the header is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Packed pixel bytes verbatim
    Raw = 0,
    /// Sequence of `[u16 LE length][gzip member]` chunks
    GzipChunks = 1,
}

impl CompressionMode {
    pub fn is_compressed(self) -> bool {
        self == CompressionMode::GzipChunks
    }
}

impl TryFrom<u8> for CompressionMode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CompressionMode::Raw),
            1 => Ok(CompressionMode::GzipChunks),
            other => Err(CodecError::UnknownCompression(other)),
        }
    }
}

/// Header bpp indicator: 1bpp -> 0, 4bpp -> 2
pub fn bpp_indicator(depth: BitDepth) -> u8 {
    match depth {
        BitDepth::One => 0,
        BitDepth::Four => 2,
    }
}

pub fn depth_from_indicator(indicator: u8) -> Result<BitDepth, CodecError> {
    match indicator {
        0 => Ok(BitDepth::One),
        2 => Ok(BitDepth::Four),
        other => Err(CodecError::InvalidBppIndicator(other)),
    }
}

/// The 8-byte header in front of every encoded image.
///
/// ```text
/// offset  size  field
/// 0       2     width (LE)
/// 2       2     height (LE)
/// 4       1     (bpp_indicator << 4) | compression
/// 5       3     payload length (LE)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u16,
    pub height: u16,
    pub depth: BitDepth,
    pub compression: CompressionMode,
    pub data_length: usize,
}

impl ImageHeader {
    pub fn new(
        width: u16,
        height: u16,
        depth: BitDepth,
        compression: CompressionMode,
        data_length: usize,
    ) -> Result<Self, CodecError> {
        if data_length > MAX_PAYLOAD_LEN {
            return Err(CodecError::PayloadTooLarge {
                length: data_length,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
            compression,
            data_length,
        })
    }

    /// Packed length of a `width` x `height` image at this depth.
    pub fn pixel_data_len(&self) -> usize {
        self.depth
            .packed_len(self.width as usize * self.height as usize)
    }

    pub fn flags(&self) -> u8 {
        (bpp_indicator(self.depth) << 4) | self.compression as u8
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.width.to_le_bytes());
        out[2..4].copy_from_slice(&self.height.to_le_bytes());
        out[4] = self.flags();
        let length = (self.data_length as u32).to_le_bytes();
        out[5..8].copy_from_slice(&length[..3]);
        out
    }

    /// Parse the header at the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::HeaderTooShort {
                length: bytes.len(),
            });
        }

        let width = u16::from_le_bytes([bytes[0], bytes[1]]);
        let height = u16::from_le_bytes([bytes[2], bytes[3]]);
        let depth = depth_from_indicator(bytes[4] >> 4)?;
        let compression = CompressionMode::try_from(bytes[4] & 0x0f)?;
        let data_length = u32::from_le_bytes([bytes[5], bytes[6], bytes[7], 0]) as usize;

        Ok(Self {
            width,
            height,
            depth,
            compression,
            data_length,
        })
    }
}
