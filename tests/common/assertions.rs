//! Assertion helpers for tests.

use lockscreen::codec::HEADER_LEN;
use pretty_assertions::assert_eq;

/// Assert the 8-byte header carries the expected fields
pub fn assert_header(encoded: &[u8], width: u16, height: u16, flags: u8, data_length: usize) {
    assert!(
        encoded.len() >= HEADER_LEN,
        "Encoded image too short: {} bytes",
        encoded.len()
    );
    assert_eq!(u16::from_le_bytes([encoded[0], encoded[1]]), width, "width");
    assert_eq!(u16::from_le_bytes([encoded[2], encoded[3]]), height, "height");
    assert_eq!(encoded[4], flags, "flags byte");
    assert_eq!(
        u32::from_le_bytes([encoded[5], encoded[6], encoded[7], 0]) as usize,
        data_length,
        "data length"
    );
}

/// Walk a compressed payload and return the size of every gzip member.
///
/// Fails if a prefix or member runs past the end of the payload.
pub fn assert_chunks_well_formed(payload: &[u8]) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut offset = 0;
    while offset < payload.len() {
        assert!(
            offset + 2 <= payload.len(),
            "Truncated chunk prefix at {offset}"
        );
        let size = u16::from_le_bytes([payload[offset], payload[offset + 1]]) as usize;
        assert!(
            offset + 2 + size <= payload.len(),
            "Chunk at {offset} declares {size} bytes, only {} left",
            payload.len() - offset - 2
        );
        assert_eq!(
            &payload[offset + 2..offset + 4],
            &[0x1f, 0x8b],
            "Chunk at {offset} is not a gzip member"
        );
        sizes.push(size);
        offset += 2 + size;
    }
    sizes
}

/// Assert bytes start with the PNG signature
pub fn assert_png_bytes(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]),
        "Expected PNG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
