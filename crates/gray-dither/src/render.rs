//! Packed device pixel data back to a viewable bitmap.

use crate::depth::BitDepth;
use crate::image::RgbaImage;
use crate::pack::{from_device_order, invert_bits, unpack_pixels};

/// Reconstruct an opaque grayscale bitmap from packed device pixel data.
///
/// This is the inverse of the packing done by the ditherer, without any
/// dithering: values are unpacked in device order, 1bpp polarity is flipped
/// back (stored 1 is black), and each level index maps to
/// `index * 255 / (levels - 1)`.
///
/// Pixels missing from a short buffer render as level 0 before polarity is
/// applied, i.e. black at 4bpp and white at 1bpp.
pub fn render_pixel_data(packed: &[u8], width: u32, height: u32, depth: BitDepth) -> RgbaImage {
    let (w, h) = (width as usize, height as usize);
    let count = w * h;

    let mut values = unpack_pixels(packed, depth, count);
    values.resize(count, 0);
    if depth == BitDepth::One {
        invert_bits(&mut values);
    }

    let levels = from_device_order(&values, w, h);
    let step = depth.step();
    let gray: Vec<u8> = levels
        .iter()
        .map(|&index| (index as f64 * step).round() as u8)
        .collect();

    RgbaImage::from_gray(width, height, &gray)
}
