//! Bitmap serialization and output sinks.

/// BMP container writer (1 bpp indexed, 16 bpp RGB565).
pub mod bmp;
/// Destinations for encoded assets.
pub mod sink;
