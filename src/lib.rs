//! Lockscreen - custom lock screen images for small grayscale devices
//!
//! Fits a picture to a device screen, dithers it to 1 or 4 bits per pixel,
//! pads hidden borders and serializes it into the device image format, and
//! turns images read back from a device into viewable bitmaps.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod fit;
pub mod models;
pub mod rendering;
pub mod services;
