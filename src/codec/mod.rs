//! Device image wire format.
//!
//! An encoded image is an 8-byte header followed by the payload:
//!
//! ```text
//! +--------+--------+-------+-------------+----------------------+
//! | width  | height | flags | data length | payload              |
//! | u16 LE | u16 LE | u8    | u24 LE      | raw or gzip chunks   |
//! +--------+--------+-------+-------------+----------------------+
//!
//! compressed payload:
//! [u16 LE size][gzip] [u16 LE size][gzip] ...
//! ```
//!
//! Each gzip member holds at most [`COMPRESS_CHUNK_SIZE`] bytes of pixel
//! data. The header's data length counts the compressed payload, so the
//! true pixel length is only known after inflating every chunk.

pub mod bytes;
pub mod decode;
pub mod encode;
pub mod header;
pub mod padding;

pub use bytes::concat;
pub use decode::{decode, decompress_chunks, DecodeResult};
pub use encode::{compress_chunk, compress_chunks, encode, EncodeOptions, COMPRESS_CHUNK_SIZE};
pub use header::{CompressionMode, ImageHeader, HEADER_LEN, MAX_PAYLOAD_LEN};
pub use padding::{pad_pixel_data, pad_pixel_values};
