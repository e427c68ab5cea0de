use super::*;
use crate::foundation::core::{EYELID_SIZE, IRIS_HEIGHT, IRIS_WIDTH};

struct Le(Vec<u8>);

impl Le {
    fn new() -> Self {
        Self(Vec::new())
    }
    fn raw(mut self, b: &[u8]) -> Self {
        self.0.extend_from_slice(b);
        self
    }
    fn u16(self, v: u16) -> Self {
        self.raw(&v.to_le_bytes())
    }
    fn u32(self, v: u32) -> Self {
        self.raw(&v.to_le_bytes())
    }
    fn i32(self, v: i32) -> Self {
        self.raw(&v.to_le_bytes())
    }
}

#[test]
fn row_stride_pads_to_four_bytes() {
    for w in [1u32, 7, 8, 31, 32, 33, 240] {
        assert_eq!(row_stride(w, 1), (w as usize).div_ceil(32) * 4, "w={w}");
    }
    assert_eq!(row_stride(240, 1), 32);
    assert_eq!(row_stride(2, 16), 4);
    assert_eq!(row_stride(3, 16), 8);
    assert_eq!(row_stride(128, 16), 256);
}

#[test]
fn header_sizes_match_the_container_layout() {
    let idx = BmpHeader::indexed(EYELID_SIZE, EYELID_SIZE).unwrap();
    assert_eq!(idx.pixel_offset(), 14 + 40 + 8);
    assert_eq!(idx.pixel_data_len(), 32 * 240);
    assert_eq!(idx.file_len(), 7742);

    let rgb = BmpHeader::rgb565(IRIS_WIDTH, IRIS_HEIGHT).unwrap();
    assert_eq!(rgb.pixel_offset(), 14 + 40 + 12);
    assert_eq!(rgb.pixel_data_len(), 256 * 128);
    assert_eq!(rgb.file_len(), 32834);
}

#[test]
fn oversized_headers_are_rejected() {
    assert!(BmpHeader::indexed(0, 5).is_err());
    assert!(BmpHeader::rgb565(u32::MAX, 1).is_err());
    assert!(BmpHeader::rgb565(60_000, 60_000).is_err());
}

#[test]
fn pack_rgb565_truncates_each_channel() {
    assert_eq!(pack_rgb565(Rgb8::WHITE), 0xFFFF);
    assert_eq!(pack_rgb565(Rgb8::new(0xF8, 0, 0)), 0xF800);
    assert_eq!(pack_rgb565(Rgb8::new(0, 0xFC, 0)), 0x07E0);
    assert_eq!(pack_rgb565(Rgb8::new(0, 0, 0xF8)), 0x001F);
    assert_eq!(pack_rgb565(Rgb8::new(7, 3, 7)), 0);
    assert_eq!(pack_rgb565(Rgb8::new(0xFF, 0x80, 0x0F)), 0xFC01);
}

#[test]
fn indexed_two_by_two_matches_manual_encoding() {
    let buf = BinaryPixelBuffer::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
    let expected = Le::new()
        .raw(b"BM")
        .u32(70)
        .u16(0)
        .u16(0)
        .u32(62)
        .u32(40)
        .i32(2)
        .i32(2)
        .u16(1)
        .u16(1)
        .u32(0)
        .u32(8)
        .i32(2835)
        .i32(2835)
        .u32(2)
        .u32(2)
        .raw(&[0, 0, 0, 0, 255, 255, 255, 0])
        // bottom row (buffer row 1) first
        .raw(&[0x40, 0, 0, 0])
        .raw(&[0x80, 0, 0, 0])
        .0;
    assert_eq!(buf.encode_bmp().unwrap(), expected);
}

#[test]
fn rgb565_two_by_two_matches_manual_encoding() {
    let buf = ColorPixelBuffer::from_rows(vec![
        vec![Rgb8::new(255, 0, 0), Rgb8::new(0, 255, 0)],
        vec![Rgb8::new(0, 0, 255), Rgb8::WHITE],
    ])
    .unwrap();
    let expected = Le::new()
        .raw(b"BM")
        .u32(74)
        .u16(0)
        .u16(0)
        .u32(66)
        .u32(40)
        .i32(2)
        .i32(2)
        .u16(1)
        .u16(16)
        .u32(3)
        .u32(8)
        .i32(2835)
        .i32(2835)
        .u32(0)
        .u32(0)
        .u32(0xF800)
        .u32(0x07E0)
        .u32(0x001F)
        .raw(&[0x1F, 0x00, 0xFF, 0xFF])
        .raw(&[0x00, 0xF8, 0xE0, 0x07])
        .0;
    assert_eq!(buf.encode_bmp().unwrap(), expected);
}

#[test]
fn single_top_left_pixel_lands_in_the_last_stored_row() {
    let mut buf = BinaryPixelBuffer::new(4, 4).unwrap();
    buf.set(0, 0, true);
    let bytes = buf.encode_bmp().unwrap();
    let pixels = &bytes[62..];
    assert_eq!(pixels.len(), 16);

    let (earlier, last_row) = pixels.split_at(12);
    assert!(earlier.iter().all(|&b| b == 0));
    assert_eq!(last_row, &[0x80, 0, 0, 0]);
}

#[test]
fn rgb565_rows_carry_zero_padding() {
    let mut buf = ColorPixelBuffer::new(3, 2).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            buf.set(x, y, Rgb8::WHITE);
        }
    }
    let bytes = buf.encode_bmp().unwrap();
    let pixels = &bytes[66..];
    assert_eq!(pixels.len(), 16);
    for row in pixels.chunks_exact(8) {
        assert_eq!(&row[..6], &[0xFF; 6]);
        assert_eq!(&row[6..], &[0, 0]);
    }
}

#[test]
fn declared_file_size_equals_byte_count() {
    let mask = BinaryPixelBuffer::new(33, 5).unwrap();
    let bytes = mask.encode_bmp().unwrap();
    let declared = u32::from_le_bytes(bytes[2..6].try_into().unwrap());
    assert_eq!(declared as usize, bytes.len());
    let offset = u32::from_le_bytes(bytes[10..14].try_into().unwrap());
    assert_eq!(offset, 62);
    assert_eq!(bytes.len() - offset as usize, row_stride(33, 1) * 5);
}
