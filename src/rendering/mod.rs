pub mod memory;
pub mod png_io;
pub mod rasterizer;
pub mod skia;

pub use memory::MemoryRasterizer;
pub use png_io::{decode_png, encode_png};
pub use rasterizer::Rasterizer;
pub use skia::SkiaRasterizer;
