pub mod pipeline;

pub use pipeline::{DitherSettings, DownloadedImage, ImagePipeline, ProcessedImage, UploadImage};
