use crate::error::PipelineError;
use gray_dither::RgbaImage;
use std::io::Cursor;

/// Decode a PNG into straight RGBA8, expanding palettes, gray and 16-bit
/// channels.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, PipelineError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| PipelineError::ImageLoadFailure(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| PipelineError::ImageLoadFailure(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(PipelineError::ImageLoadFailure(
                "indexed PNG was not expanded".to_string(),
            ))
        }
    };

    Ok(RgbaImage::new(info.width, info.height, rgba)?)
}

/// Encode a bitmap as PNG.
///
/// Opaque gray images are written as 8-bit grayscale, everything else as
/// RGBA.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, PipelineError> {
    let is_gray = image
        .pixels()
        .all(|[r, g, b, a]| r == g && g == b && a == 255);
    let (color_type, data) = if is_gray {
        let gray: Vec<u8> = image.pixels().map(|[v, ..]| v).collect();
        (png::ColorType::Grayscale, gray)
    } else {
        (png::ColorType::Rgba, image.as_bytes().to_vec())
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PipelineError::ImageEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| PipelineError::ImageEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
