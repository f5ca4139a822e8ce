use crate::codec::bytes::concat;
use crate::codec::header::{CompressionMode, ImageHeader};
use crate::codec::padding::pad_pixel_data;
use crate::error::CodecError;
use crate::models::ScreenSpecs;
use flate2::write::GzEncoder;
use flate2::Compression;
use rayon::prelude::*;
use std::io::Write;

/// Uncompressed bytes per gzip chunk.
pub const COMPRESS_CHUNK_SIZE: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Gzip the payload in independent chunks
    pub compress: bool,
    /// Pixel data covers only the visible area and needs border padding.
    /// Data downloaded from a device already includes it.
    pub pad_image: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compress: true,
            pad_image: true,
        }
    }
}

/// Gzip one chunk and prefix it with its compressed length (u16 LE).
pub fn compress_chunk(chunk: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(chunk).map_err(CodecError::Compress)?;
    let compressed = encoder.finish().map_err(CodecError::Compress)?;

    let length = u16::try_from(compressed.len()).map_err(|_| CodecError::ChunkTooLarge {
        length: compressed.len(),
    })?;

    Ok(concat(&[&length.to_le_bytes()[..], &compressed[..]]))
}

/// Split `data` into [`COMPRESS_CHUNK_SIZE`] slices, compress them in
/// parallel and join the prefixed results in input order.
pub fn compress_chunks(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let chunks = data
        .par_chunks(COMPRESS_CHUNK_SIZE)
        .map(compress_chunk)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        chunks = chunks.len(),
        input = data.len(),
        "Compressed pixel data"
    );
    Ok(concat(&chunks))
}

/// Serialize packed pixel data into the device image format.
pub fn encode(
    pixel_data: &[u8],
    specs: &ScreenSpecs,
    options: EncodeOptions,
) -> Result<Vec<u8>, CodecError> {
    let padded;
    let data = if options.pad_image {
        padded = pad_pixel_data(pixel_data, specs);
        &padded[..]
    } else {
        pixel_data
    };

    let (compression, payload) = if options.compress {
        (CompressionMode::GzipChunks, compress_chunks(data)?)
    } else {
        (CompressionMode::Raw, data.to_vec())
    };

    let header = ImageHeader::new(
        specs.width,
        specs.height,
        specs.depth,
        compression,
        payload.len(),
    )?;
    tracing::debug!(
        width = header.width,
        height = header.height,
        flags = header.flags(),
        data_length = header.data_length,
        "Encoded image header"
    );

    Ok(concat(&[&header.to_bytes()[..], &payload[..]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::header::HEADER_LEN;
    use gray_dither::BitDepth;

    fn raw() -> EncodeOptions {
        EncodeOptions {
            compress: false,
            pad_image: false,
        }
    }

    #[test]
    fn test_default_options() {
        let options = EncodeOptions::default();
        assert!(options.compress);
        assert!(options.pad_image);
    }

    #[test]
    fn test_encode_raw() {
        let specs = ScreenSpecs::new(2, 2, [0; 4], BitDepth::Four).unwrap();
        let encoded = encode(&[0xAB, 0xCD], &specs, raw()).unwrap();
        assert_eq!(encoded, vec![2, 0, 2, 0, 0x20, 2, 0, 0, 0xAB, 0xCD]);
    }

    #[test]
    fn test_single_chunk_prefix() {
        let specs = ScreenSpecs::new(8, 8, [0; 4], BitDepth::One).unwrap();
        let options = EncodeOptions {
            compress: true,
            pad_image: false,
        };
        let encoded = encode(&[0x55; 8], &specs, options).unwrap();

        assert_eq!(encoded[4], 0x01);
        let data_length = u32::from_le_bytes([encoded[5], encoded[6], encoded[7], 0]) as usize;
        let chunk_size = u16::from_le_bytes([encoded[8], encoded[9]]) as usize;
        assert_eq!(data_length, chunk_size + 2);
        assert_eq!(encoded.len(), HEADER_LEN + data_length);
        // gzip magic
        assert_eq!(&encoded[10..12], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_chunk_count() {
        let data = vec![0u8; COMPRESS_CHUNK_SIZE * 2 + 1];
        let payload = compress_chunks(&data).unwrap();

        let mut offset = 0;
        let mut count = 0;
        while offset < payload.len() {
            let size = u16::from_le_bytes([payload[offset], payload[offset + 1]]) as usize;
            offset += 2 + size;
            count += 1;
        }
        assert_eq!(offset, payload.len());
        assert_eq!(count, 3);
    }

    #[test]
    fn test_compress_empty() {
        assert!(compress_chunks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_encode_pads_by_default_options() {
        let specs = ScreenSpecs::new(2, 3, [0, 1, 0, 0], BitDepth::Four).unwrap();
        let options = EncodeOptions {
            compress: false,
            pad_image: true,
        };
        let encoded = encode(&[0x12, 0x34], &specs, options).unwrap();
        assert_eq!(&encoded[HEADER_LEN..], &[0x12, 0x03, 0x40]);
    }
}
