//! Expanding visible-area pixel data to the full panel, borders included.
//!
//! Pixel data is stored in device order (right-most column first, each
//! column top to bottom), so the right border comes first and the left
//! border last:
//!
//! ```text
//! [ right border columns ]
//! for each visible column: [ top run | column values | bottom run ]
//! [ left border columns ]
//! ```

use crate::models::ScreenSpecs;
use gray_dither::pack::{pack_pixels, unpack_pixels};

/// Pad unpacked level values covering the visible area to full panel size.
///
/// Values missing from a short input are treated as 0; extra values are
/// ignored.
pub fn pad_pixel_values(values: &[u8], specs: &ScreenSpecs) -> Vec<u8> {
    let visible = specs.visible_dimensions();
    let (visible_width, visible_height) = (visible.width as usize, visible.height as usize);
    let full_height = specs.height as usize;
    let top = specs.padding_top as usize;
    let bottom = specs.padding_bottom as usize;

    let mut padded = Vec::with_capacity(specs.width as usize * full_height);
    padded.resize(specs.padding_right as usize * full_height, 0);

    for column in 0..visible_width {
        padded.resize(padded.len() + top, 0);
        let start = column * visible_height;
        for y in 0..visible_height {
            padded.push(values.get(start + y).copied().unwrap_or(0));
        }
        padded.resize(padded.len() + bottom, 0);
    }

    padded.resize(padded.len() + specs.padding_left as usize * full_height, 0);
    padded
}

/// Pad packed visible-area pixel data to full panel size.
///
/// Unpacks exactly the visible pixel count, pads, and repacks at the
/// screen's bit depth.
pub fn pad_pixel_data(packed: &[u8], specs: &ScreenSpecs) -> Vec<u8> {
    let visible = specs.visible_dimensions();
    let count = visible.width as usize * visible.height as usize;
    let values = unpack_pixels(packed, specs.depth, count);
    pack_pixels(&pad_pixel_values(&values, specs), specs.depth)
}
