use clap::{Parser, Subcommand};
use gray_dither::DitheringAlgorithm;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lockscreen::codec::EncodeOptions;
use lockscreen::models::{AppConfig, DeviceModel};
use lockscreen::rendering::{decode_png, encode_png, Rasterizer, SkiaRasterizer};
use lockscreen::services::{DitherSettings, ImagePipeline};

#[derive(Parser)]
#[command(name = "lockscreen")]
#[command(about = "Encode and decode custom lock screen images for grayscale devices")]
struct Cli {
    /// YAML config file (defaults to $LOCKSCREEN_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit, dither and encode a PNG for a device screen
    Encode {
        /// Source PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the encoded device image
        #[arg(short, long)]
        output: PathBuf,

        /// Device model or custom screen name from the config
        #[arg(short, long, default_value = "stax")]
        screen: String,

        /// Contrast factor (1.0 = unchanged)
        #[arg(short, long)]
        contrast: Option<f64>,

        /// Dithering algorithm: floyd-steinberg, atkinson or reduced-atkinson
        #[arg(short, long)]
        dither: Option<DitheringAlgorithm>,

        /// Store the payload uncompressed
        #[arg(long)]
        no_compress: bool,

        /// The input already covers the full panel including hidden borders
        #[arg(long)]
        no_pad: bool,

        /// Write the dithered preview as PNG
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Print the encoded bytes as hex
        #[arg(long)]
        hex: bool,
    },
    /// Decode a device image and render it
    Decode {
        /// Encoded device image
        #[arg(short, long)]
        input: PathBuf,

        /// Write the rendered image as PNG
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Print the decoded image as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known screens
    Models,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lockscreen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Commands::Encode {
            input,
            output,
            screen,
            contrast,
            dither,
            no_compress,
            no_pad,
            preview,
            hex,
        } => {
            let settings = DitherSettings {
                contrast: contrast.unwrap_or(config.defaults.contrast),
                algorithm: dither.unwrap_or(config.defaults.dither),
            };
            let options = EncodeOptions {
                compress: config.defaults.compress && !no_compress,
                pad_image: !no_pad,
            };
            run_encode_command(
                &config,
                &input,
                &output,
                &screen,
                settings,
                options,
                preview.as_deref(),
                hex,
            )
        }
        Commands::Decode {
            input,
            preview,
            json,
        } => run_decode_command(&input, preview.as_deref(), json),
        Commands::Models => {
            run_models_command(&config);
            Ok(())
        }
    }
}

/// Encode a PNG file into the device image format
#[allow(clippy::too_many_arguments)]
fn run_encode_command(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    screen: &str,
    settings: DitherSettings,
    options: EncodeOptions,
    preview: Option<&Path>,
    hex: bool,
) -> anyhow::Result<()> {
    let specs = config.screen_specs(screen)?;
    let source = decode_png(&std::fs::read(input)?)?;

    let pipeline = ImagePipeline::new(SkiaRasterizer::new());
    let bitmap = pipeline.rasterizer().draw_pixels(&source)?;
    let upload = pipeline.prepare_upload(&bitmap, &specs, settings, options)?;

    std::fs::write(output, &upload.encoded)?;
    println!(
        "Encoded {} ({}x{}, {} bytes)",
        output.display(),
        specs.width,
        specs.height,
        upload.encoded.len()
    );

    if let Some(path) = preview {
        let pixels = pipeline.rasterizer().read_pixels(&upload.preview)?;
        std::fs::write(path, encode_png(&pixels)?)?;
        println!("Preview {}", path.display());
    }

    if hex {
        println!("{}", hex::encode(&upload.encoded));
    }

    Ok(())
}

/// Decode a device image and optionally render it to PNG
fn run_decode_command(input: &Path, preview: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let bytes = std::fs::read(input)?;
    let pipeline = ImagePipeline::new(SkiaRasterizer::new());
    let download = pipeline.render_download(&bytes)?;

    if let Some(path) = preview {
        let pixels = pipeline.rasterizer().read_pixels(&download.bitmap)?;
        std::fs::write(path, encode_png(&pixels)?)?;
    }

    let decoded = &download.decoded;
    if json {
        println!("{}", serde_json::to_string_pretty(decoded)?);
    } else {
        println!("Width:          {}", decoded.width);
        println!("Height:         {}", decoded.height);
        println!("Bits per pixel: {}", decoded.depth.bits());
        println!("Compressed:     {}", decoded.was_compressed);
        println!("Pixel data:     {} bytes", decoded.pixel_data.len());
        if let Some(path) = preview {
            println!("Preview:        {}", path.display());
        }
    }

    Ok(())
}

/// Print built-in device models and configured screens
fn run_models_command(config: &AppConfig) {
    fn describe(name: &str, specs: &lockscreen::models::ScreenSpecs) {
        let visible = specs.visible_dimensions();
        println!(
            "  {name:<10} {}x{} {}bpp (visible {visible})",
            specs.width,
            specs.height,
            specs.depth.bits()
        );
    }

    println!("Device models:");
    for model in DeviceModel::ALL {
        describe(model.name(), &model.screen_specs());
    }

    if !config.screens.is_empty() {
        println!("\nConfigured screens:");
        let mut names: Vec<_> = config.screens.keys().collect();
        names.sort();
        for name in names {
            match config.screen_specs(name) {
                Ok(specs) => describe(name, &specs),
                Err(e) => println!("  {name:<10} invalid: {e}"),
            }
        }
    }
}
