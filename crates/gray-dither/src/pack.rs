//! Device pixel order and bit packing.
//!
//! Screens store pixels column by column, starting from the right-most
//! column, each column from top to bottom. Within a byte the first pixel
//! takes the most significant bits:
//!
//! ```text
//! 4bpp:  [ p0 p0 p0 p0 | p1 p1 p1 p1 ]
//! 1bpp:  [ p0 p1 p2 p3 p4 p5 p6 p7 ]
//! ```

use crate::depth::BitDepth;

/// Reorder row-major values into device storage order.
///
/// Iterates `x` from `width - 1` down to `0` and, for each column, `y` from
/// `0` to `height - 1`.
pub fn to_device_order(row_major: &[u8], width: usize, height: usize) -> Vec<u8> {
    debug_assert_eq!(row_major.len(), width * height);
    let mut ordered = Vec::with_capacity(width * height);
    for x in (0..width).rev() {
        for y in 0..height {
            ordered.push(row_major[y * width + x]);
        }
    }
    ordered
}

/// Inverse of [`to_device_order`].
///
/// Missing trailing values (a short input) are left as 0.
pub fn from_device_order(device_order: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut row_major = vec![0u8; width * height];
    for (i, &value) in device_order.iter().take(width * height).enumerate() {
        let x = width - 1 - i / height;
        let y = i % height;
        row_major[y * width + x] = value;
    }
    row_major
}

/// Pack level values into bytes, first value in the most significant bits.
///
/// A partial final byte is zero-filled.
pub fn pack_pixels(values: &[u8], depth: BitDepth) -> Vec<u8> {
    match depth {
        BitDepth::Four => values
            .chunks(2)
            .map(|pair| {
                let high = pair[0] & 0x0f;
                let low = pair.get(1).copied().unwrap_or(0) & 0x0f;
                (high << 4) | low
            })
            .collect(),
        BitDepth::One => values
            .chunks(8)
            .map(|bits| {
                bits.iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit & 1) << (7 - i)))
            })
            .collect(),
    }
}

/// Unpack up to `count` level values from `bytes`.
///
/// Stops early when `bytes` runs out.
pub fn unpack_pixels(bytes: &[u8], depth: BitDepth, count: usize) -> Vec<u8> {
    let mut values = Vec::with_capacity(count);
    let per_byte = depth.pixels_per_byte();
    let bits = depth.bits();
    let mask = (1u8 << bits) - 1;

    'bytes: for &byte in bytes {
        for slot in 0..per_byte {
            if values.len() == count {
                break 'bytes;
            }
            let shift = 8 - bits * (slot as u8 + 1);
            values.push((byte >> shift) & mask);
        }
    }

    values
}

/// Flip monochrome polarity: the device stores black as 1.
#[inline]
pub fn invert_bits(values: &mut [u8]) {
    for v in values {
        *v = 1 - (*v & 1);
    }
}
