//! Minimal BMP writer for the two layouts the display firmware reads.
//!
//! - 1 bpp indexed with a two-entry palette (masks)
//! - 16 bpp `BI_BITFIELDS` with RGB565 channel masks (textures)
//!
//! All multi-byte fields are little-endian. Rows are padded to a multiple of 4 bytes and
//! stored bottom-to-top.

use crate::foundation::core::Rgb8;
use crate::foundation::error::{EyeError, EyeResult};
use crate::raster::buffer::{BinaryPixelBuffer, ColorPixelBuffer};

pub const FILE_HEADER_LEN: u32 = 14;
pub const INFO_HEADER_LEN: u32 = 40;
/// About 72 DPI; readers ignore it but the field must be present.
pub const PIXELS_PER_METER: i32 = 2835;

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;

/// Red, green and blue masks of a 565 pixel, in that order.
pub const RGB565_MASKS: [u32; 3] = [0xF800, 0x07E0, 0x001F];

/// Palette index 0 is background, index 1 is foreground.
pub const MASK_PALETTE: [Rgb8; 2] = [Rgb8::BLACK, Rgb8::WHITE];

/// Pixel layout of an encoded bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmpFormat {
    /// 1 bit per pixel, two-entry palette, 8 pixels per byte MSB-first.
    Indexed1,
    /// 16 bits per pixel, RGB565 with explicit channel masks.
    Rgb565,
}

impl BmpFormat {
    pub fn bits_per_pixel(self) -> u16 {
        match self {
            Self::Indexed1 => 1,
            Self::Rgb565 => 16,
        }
    }

    fn compression(self) -> u32 {
        match self {
            Self::Indexed1 => BI_RGB,
            Self::Rgb565 => BI_BITFIELDS,
        }
    }

    fn palette_entries(self) -> u32 {
        match self {
            Self::Indexed1 => MASK_PALETTE.len() as u32,
            Self::Rgb565 => 0,
        }
    }

    /// Bytes between the info header and the pixel data.
    fn trailer_len(self) -> u32 {
        match self {
            Self::Indexed1 => MASK_PALETTE.len() as u32 * 4,
            Self::Rgb565 => RGB565_MASKS.len() as u32 * 4,
        }
    }
}

/// Padded byte length of one stored row.
pub fn row_stride(width: u32, bits_per_pixel: u16) -> usize {
    (width as usize * usize::from(bits_per_pixel)).div_ceil(32) * 4
}

/// Truncate 8-bit channels to 5/6/5 bits and pack red high, blue low.
pub fn pack_rgb565(c: Rgb8) -> u16 {
    (u16::from(c.r & 0xF8) << 8) | (u16::from(c.g & 0xFC) << 3) | u16::from(c.b >> 3)
}

/// Everything that precedes the pixel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub format: BmpFormat,
    pub width: u32,
    pub height: u32,
}

impl BmpHeader {
    /// Describe a `width x height` bitmap, rejecting sizes the container cannot express.
    pub fn new(format: BmpFormat, width: u32, height: u32) -> EyeResult<Self> {
        if width == 0 || height == 0 {
            return Err(EyeError::layout(format!(
                "bitmap must be non-empty, got {width}x{height}"
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(EyeError::layout(format!(
                "{width}x{height} does not fit signed 32-bit header fields"
            )));
        }
        let hdr = Self {
            format,
            width,
            height,
        };
        let total = u64::from(hdr.pixel_offset())
            + row_stride(width, format.bits_per_pixel()) as u64 * u64::from(height);
        if u32::try_from(total).is_err() {
            return Err(EyeError::layout(format!(
                "{width}x{height} bitmap would exceed the 4 GiB file size field"
            )));
        }
        Ok(hdr)
    }

    pub fn indexed(width: u32, height: u32) -> EyeResult<Self> {
        Self::new(BmpFormat::Indexed1, width, height)
    }

    pub fn rgb565(width: u32, height: u32) -> EyeResult<Self> {
        Self::new(BmpFormat::Rgb565, width, height)
    }

    pub fn row_stride(&self) -> usize {
        row_stride(self.width, self.format.bits_per_pixel())
    }

    pub fn pixel_data_len(&self) -> u32 {
        (self.row_stride() * self.height as usize) as u32
    }

    /// File header + info header + palette or channel masks.
    pub fn pixel_offset(&self) -> u32 {
        FILE_HEADER_LEN + INFO_HEADER_LEN + self.format.trailer_len()
    }

    pub fn file_len(&self) -> u32 {
        self.pixel_offset() + self.pixel_data_len()
    }

    /// Append the file header, info header and palette/masks to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let fmt = self.format;

        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_len().to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset().to_le_bytes());

        out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
        out.extend_from_slice(&(self.width as i32).to_le_bytes());
        out.extend_from_slice(&(self.height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&fmt.bits_per_pixel().to_le_bytes());
        out.extend_from_slice(&fmt.compression().to_le_bytes());
        out.extend_from_slice(&self.pixel_data_len().to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&fmt.palette_entries().to_le_bytes());
        out.extend_from_slice(&fmt.palette_entries().to_le_bytes());

        match fmt {
            BmpFormat::Indexed1 => {
                for c in MASK_PALETTE {
                    out.extend_from_slice(&[c.b, c.g, c.r, 0]);
                }
            }
            BmpFormat::Rgb565 => {
                for m in RGB565_MASKS {
                    out.extend_from_slice(&m.to_le_bytes());
                }
            }
        }
    }
}

/// Serialize a pixel buffer into a complete BMP file image.
pub trait EncodeBmp {
    fn bmp_header(&self) -> EyeResult<BmpHeader>;

    fn encode_bmp(&self) -> EyeResult<Vec<u8>>;
}

impl EncodeBmp for BinaryPixelBuffer {
    fn bmp_header(&self) -> EyeResult<BmpHeader> {
        BmpHeader::indexed(self.width(), self.height())
    }

    fn encode_bmp(&self) -> EyeResult<Vec<u8>> {
        let hdr = self.bmp_header()?;
        let stride = hdr.row_stride();
        let mut out = Vec::with_capacity(hdr.file_len() as usize);
        hdr.write_to(&mut out);

        for row in self.rows().rev() {
            let start = out.len();
            out.resize(start + stride, 0);
            let packed = &mut out[start..];
            for (x, _) in row.iter().enumerate().filter(|(_, on)| **on) {
                packed[x / 8] |= 0x80 >> (x % 8);
            }
        }

        debug_assert_eq!(out.len(), hdr.file_len() as usize);
        Ok(out)
    }
}

impl EncodeBmp for ColorPixelBuffer {
    fn bmp_header(&self) -> EyeResult<BmpHeader> {
        BmpHeader::rgb565(self.width(), self.height())
    }

    fn encode_bmp(&self) -> EyeResult<Vec<u8>> {
        let hdr = self.bmp_header()?;
        let pad = hdr.row_stride() - self.width() as usize * 2;
        let mut out = Vec::with_capacity(hdr.file_len() as usize);
        hdr.write_to(&mut out);

        for row in self.rows().rev() {
            for &px in row {
                out.extend_from_slice(&pack_rgb565(px).to_le_bytes());
            }
            out.resize(out.len() + pad, 0);
        }

        debug_assert_eq!(out.len(), hdr.file_len() as usize);
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/bmp.rs"]
mod tests;
