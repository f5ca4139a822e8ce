//! Lightness extraction and contrast adjustment.

/// HSL lightness of an RGB triple: `floor((max + min) / 2)`.
///
/// Keeps more contrast than a plain channel average for saturated colors.
#[inline]
pub fn lightness(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b) as u16;
    let min = r.min(g).min(b) as u16;
    ((max + min) / 2) as u8
}

/// Scale a 0-255 value around the midpoint 128 and clamp it back into range.
///
/// - `0.0` maps everything to 128 before quantization (flat gray)
/// - `1.0` leaves the value unchanged
/// - `> 1.0` pushes values away from the midpoint
///
/// The result keeps its fractional part; quantization floors it later.
#[inline]
pub fn apply_contrast(value: u8, contrast: f64) -> f64 {
    ((value as f64 - 128.0) * contrast + 128.0).clamp(0.0, 255.0)
}

/// First pass of the ditherer: RGBA samples to contrast-adjusted gray values.
pub fn gray_with_contrast(rgba: &[u8], contrast: f64) -> Vec<f64> {
    rgba.chunks_exact(4)
        .map(|p| apply_contrast(lightness(p[0], p[1], p[2]), contrast))
        .collect()
}
