//! End-to-end upload/download tests through the image pipeline.

mod common;

use common::fixtures::{self, screens};
use gray_dither::{BitDepth, DitheringAlgorithm, RgbaImage};
use lockscreen::codec::{EncodeOptions, HEADER_LEN};
use lockscreen::fit::ImageDimensions;
use lockscreen::models::{DeviceModel, ScreenSpecs};
use lockscreen::rendering::{decode_png, encode_png, MemoryRasterizer, Rasterizer, SkiaRasterizer};
use lockscreen::services::{DitherSettings, ImagePipeline};
use pretty_assertions::assert_eq;

#[test]
fn test_stax_upload_from_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_png(dir.path(), "photo.png", &fixtures::random_image(1, 120, 90));

    let pipeline = ImagePipeline::new(SkiaRasterizer::new());
    let source = decode_png(&std::fs::read(&path).unwrap()).unwrap();
    let bitmap = pipeline.rasterizer().draw_pixels(&source).unwrap();

    let upload = pipeline
        .prepare_upload(
            &bitmap,
            &ScreenSpecs::STAX,
            DitherSettings::default(),
            EncodeOptions::default(),
        )
        .unwrap();

    let preview = pipeline.rasterizer().dimensions(&upload.preview);
    assert_eq!(preview, ImageDimensions::new(400, 670));
    assert_eq!(upload.pixel_data.len(), 400 * 670 / 2);

    let data_length = upload.encoded.len() - HEADER_LEN;
    common::assert_header(&upload.encoded, 400, 672, 0x21, data_length);
    common::assert_chunks_well_formed(&upload.encoded[HEADER_LEN..]);
}

#[test]
fn test_stax_download_renders_padding_black() {
    let pipeline = ImagePipeline::new(MemoryRasterizer);
    let white = RgbaImage::filled(800, 1340, [255, 255, 255, 255]);

    let upload = pipeline
        .prepare_upload(
            &white,
            &ScreenSpecs::STAX,
            DitherSettings::default(),
            EncodeOptions::default(),
        )
        .unwrap();
    let download = pipeline.render_download(&upload.encoded).unwrap();

    assert_eq!(download.decoded.pixel_data.len(), 400 * 672 / 2);
    assert_eq!(download.bitmap.width(), 400);
    assert_eq!(download.bitmap.height(), 672);
    for x in [0, 199, 399] {
        assert_eq!(download.bitmap.pixel(x, 0), Some([255, 255, 255, 255]));
        assert_eq!(download.bitmap.pixel(x, 669), Some([255, 255, 255, 255]));
        assert_eq!(download.bitmap.pixel(x, 670), Some([0, 0, 0, 255]));
        assert_eq!(download.bitmap.pixel(x, 671), Some([0, 0, 0, 255]));
    }
}

#[test]
fn test_download_matches_preview_without_padding() {
    let pipeline = ImagePipeline::new(MemoryRasterizer);
    let image = fixtures::gradient_image(64, 48);

    for model in [DeviceModel::Flex, DeviceModel::Apex] {
        let specs = model.screen_specs();
        for algorithm in DitheringAlgorithm::ALL {
            let settings = DitherSettings {
                contrast: 1.2,
                algorithm,
            };
            let upload = pipeline
                .prepare_upload(&image, &specs, settings, EncodeOptions::default())
                .unwrap();
            let download = pipeline.render_download(&upload.encoded).unwrap();
            assert!(
                download.bitmap == upload.preview,
                "{model} {algorithm}: downloaded image differs from preview"
            );
        }
    }
}

#[test]
fn test_reencode_downloaded_image() {
    // Data read back from a device already contains borders
    let pipeline = ImagePipeline::new(MemoryRasterizer);
    let specs = screens::bordered();
    let image = fixtures::random_image(4, 30, 30);

    let upload = pipeline
        .prepare_upload(&image, &specs, DitherSettings::default(), EncodeOptions::default())
        .unwrap();
    let download = pipeline.render_download(&upload.encoded).unwrap();

    let options = EncodeOptions {
        compress: false,
        pad_image: false,
    };
    let reencoded =
        lockscreen::codec::encode(&download.decoded.pixel_data, &specs, options).unwrap();
    let again = pipeline.render_download(&reencoded).unwrap();
    assert_eq!(again.bitmap, download.bitmap);
    assert!(!again.decoded.was_compressed);
}

#[test]
fn test_apex_one_bit_polarity() {
    let pipeline = ImagePipeline::new(MemoryRasterizer);
    let black = RgbaImage::filled(300, 400, [0, 0, 0, 255]);
    let options = EncodeOptions {
        compress: false,
        pad_image: true,
    };

    let upload = pipeline
        .prepare_upload(&black, &ScreenSpecs::APEX, DitherSettings::default(), options)
        .unwrap();

    common::assert_header(&upload.encoded, 300, 400, 0x00, 300 * 400 / 8);
    assert!(upload.encoded[HEADER_LEN..].iter().all(|&b| b == 0xFF));
}

#[test]
fn test_contrast_zero_is_mid_gray() {
    let pipeline = ImagePipeline::new(MemoryRasterizer);
    let image = fixtures::random_image(8, 8, 8);
    let settings = DitherSettings {
        contrast: 0.0,
        algorithm: DitheringAlgorithm::FloydSteinberg,
    };

    let processed = pipeline
        .process_image(&image, BitDepth::Four, settings)
        .unwrap();
    // 128 posterizes to 119 (level 7) and the error is spread around
    let levels: Vec<u8> = processed.preview.pixels().map(|[v, ..]| v).collect();
    assert!(levels.iter().all(|&v| v == 119 || v == 136));
}

#[test]
fn test_preview_png_round_trip() {
    let pipeline = ImagePipeline::new(SkiaRasterizer::new());
    let bitmap = pipeline
        .rasterizer()
        .draw_pixels(&fixtures::gradient_image(40, 30))
        .unwrap();
    let processed = pipeline
        .process_image(&bitmap, BitDepth::Four, DitherSettings::default())
        .unwrap();

    let pixels = pipeline.rasterizer().read_pixels(&processed.preview).unwrap();
    let png = encode_png(&pixels).unwrap();
    common::assert_png_bytes(&png);
    assert_eq!(decode_png(&png).unwrap(), pixels);
}
