use crate::codec::header::{ImageHeader, HEADER_LEN};
use crate::error::CodecError;
use flate2::bufread::MultiGzDecoder;
use gray_dither::BitDepth;
use serde::{Serialize, Serializer};
use std::io::Read;

/// An image parsed from the device wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeResult {
    pub width: u16,
    pub height: u16,
    #[serde(rename = "bits_per_pixel", serialize_with = "serialize_depth")]
    pub depth: BitDepth,
    pub was_compressed: bool,
    /// Packed pixel data in device order, padding included
    #[serde(serialize_with = "hex::serde::serialize")]
    pub pixel_data: Vec<u8>,
}

fn serialize_depth<S: Serializer>(depth: &BitDepth, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(depth.bits())
}

/// Parse an encoded image. Bytes past the declared payload are ignored.
pub fn decode(bytes: &[u8]) -> Result<DecodeResult, CodecError> {
    let header = ImageHeader::parse(bytes)?;

    let available = bytes.len() - HEADER_LEN;
    if available < header.data_length {
        return Err(CodecError::DataLengthMismatch {
            expected: header.data_length,
            actual: available,
        });
    }
    let payload = &bytes[HEADER_LEN..HEADER_LEN + header.data_length];

    let was_compressed = header.compression.is_compressed();
    let pixel_data = if was_compressed {
        decompress_chunks(payload, header.pixel_data_len())?
    } else {
        payload.to_vec()
    };

    tracing::debug!(
        width = header.width,
        height = header.height,
        bits_per_pixel = header.depth.bits(),
        was_compressed,
        data_length = header.data_length,
        pixels = pixel_data.len(),
        "Decoded image"
    );

    Ok(DecodeResult {
        width: header.width,
        height: header.height,
        depth: header.depth,
        was_compressed,
        pixel_data,
    })
}

/// Inflate a sequence of `[u16 LE length][gzip member]` chunks in order.
///
/// Every byte of a chunk must belong to a gzip member, and the inflated
/// output may not grow past `limit` bytes.
pub fn decompress_chunks(payload: &[u8], limit: usize) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < payload.len() {
        if payload.len() - offset < 2 {
            return Err(CodecError::IncompleteChunkSize { offset });
        }
        let size = u16::from_le_bytes([payload[offset], payload[offset + 1]]) as usize;
        let start = offset + 2;

        let remaining = payload.len() - start;
        if remaining < size {
            return Err(CodecError::IncompleteChunkData {
                offset,
                expected: size,
                actual: remaining,
            });
        }

        let budget = (limit - out.len()) as u64;
        MultiGzDecoder::new(&payload[start..start + size])
            .take(budget + 1)
            .read_to_end(&mut out)
            .map_err(CodecError::Decompress)?;
        if out.len() > limit {
            return Err(CodecError::DecompressedTooLarge { offset, limit });
        }
        offset = start + size;
    }

    Ok(out)
}
