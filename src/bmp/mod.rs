// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! 24-bit uncompressed BMP codec (zero external dependencies).
//!
//! Reads and writes the classic `BITMAPINFOHEADER` flavor of BMP, providing
//! direct access to the raw pixel array without any color conversion. This is
//! the carrier format for LSB embedding, which operates directly on channel
//! bytes.
//!
//! Supports:
//! - 24 bits per pixel, uncompressed (BI_RGB)
//! - Bottom-up (positive height) and top-down (negative height) row storage
//! - Row padding to 4-byte boundaries
//! - Byte-for-byte round-trip for unmodified images (the original 54-byte
//!   header is preserved verbatim)
//!
//! Does NOT support:
//! - Palettized or 16/32 bpp images -- rejected at parse time
//! - RLE or bitfield compression -- rejected at parse time
//!
//! Rows are addressed in *storage* order throughout. For a positive height
//! that is bottom-up on screen, but nothing here ever needs to know which way
//! is up: embedding and extraction only require that both sides walk the
//! buffer with the same convention.

pub mod error;

use error::{BmpError, Result};

/// Size of the combined file header + `BITMAPINFOHEADER` in bytes.
pub const HEADER_LEN: usize = 54;

/// Bytes per pixel (B, G, R).
pub const BYTES_PER_PIXEL: usize = 3;

/// A 24-bit BMP image held in memory.
///
/// Created by parsing a byte stream with [`BmpImage::from_bytes`] or
/// synthesized with [`BmpImage::new`]. The pixel array stores channels in
/// B, G, R order with each row padded to a multiple of four bytes.
#[derive(Clone)]
pub struct BmpImage {
    /// The original 54-byte header, preserved for re-serialization.
    header: [u8; HEADER_LEN],
    /// Logical width in pixels (always positive).
    width: i32,
    /// Logical height in pixels; negative means top-down row storage.
    height: i32,
    /// Bytes per stored row, including padding.
    stride: usize,
    /// Raw pixel array, `stride * rows` bytes.
    data: Vec<u8>,
}

impl BmpImage {
    /// Parse a BMP file from bytes.
    ///
    /// Validates the `BM` signature, bit depth (must be 24) and compression
    /// field (must be 0 / BI_RGB), then takes `stride * |height|` bytes of
    /// pixel data following the 54-byte header. Any trailing bytes are
    /// ignored.
    ///
    /// # Errors
    /// - [`BmpError::UnexpectedEof`] if the header or pixel array is truncated.
    /// - [`BmpError::InvalidSignature`] if the data does not start with `BM`.
    /// - [`BmpError::UnsupportedBitDepth`] for anything other than 24 bpp.
    /// - [`BmpError::UnsupportedCompression`] for compressed pixel data.
    /// - [`BmpError::InvalidDimensions`] if width <= 0 or height == 0.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(BmpError::UnexpectedEof);
        }
        if bytes[0] != b'B' || bytes[1] != b'M' {
            return Err(BmpError::InvalidSignature);
        }

        let mut header = [0u8; HEADER_LEN];
        header.copy_from_slice(&bytes[..HEADER_LEN]);

        let width = i32::from_le_bytes([header[18], header[19], header[20], header[21]]);
        let height = i32::from_le_bytes([header[22], header[23], header[24], header[25]]);
        let bpp = u16::from_le_bytes([header[28], header[29]]);
        let compression = u32::from_le_bytes([header[30], header[31], header[32], header[33]]);

        if bpp != 24 {
            return Err(BmpError::UnsupportedBitDepth(bpp));
        }
        if compression != 0 {
            return Err(BmpError::UnsupportedCompression(compression));
        }
        if width <= 0 || height == 0 {
            return Err(BmpError::InvalidDimensions);
        }

        let stride = row_stride(width);
        let rows = height.unsigned_abs() as usize;
        let size = stride
            .checked_mul(rows)
            .ok_or(BmpError::InvalidDimensions)?;

        let pixel_bytes = bytes
            .get(HEADER_LEN..HEADER_LEN + size)
            .ok_or(BmpError::UnexpectedEof)?;

        log::debug!("parsed BMP: {width}x{height}, stride {stride}, {size} pixel bytes");

        Ok(Self {
            header,
            width,
            height,
            stride,
            data: pixel_bytes.to_vec(),
        })
    }

    /// Create an in-memory image filled with a single RGB color.
    ///
    /// Synthesizes a valid header so the result serializes with
    /// [`BmpImage::to_bytes`]. A negative `height` produces a top-down image,
    /// as in the BMP format itself.
    ///
    /// # Errors
    /// Returns [`BmpError::InvalidDimensions`] if `width <= 0` or `height == 0`.
    pub fn new(width: i32, height: i32, rgb: [u8; 3]) -> Result<Self> {
        if width <= 0 || height == 0 {
            return Err(BmpError::InvalidDimensions);
        }

        let stride = row_stride(width);
        let rows = height.unsigned_abs() as usize;
        let size = stride
            .checked_mul(rows)
            .ok_or(BmpError::InvalidDimensions)?;

        let mut data = vec![0u8; size];
        let [r, g, b] = rgb;
        for row in 0..rows {
            for col in 0..width as usize {
                let base = row * stride + col * BYTES_PER_PIXEL;
                data[base] = b;
                data[base + 1] = g;
                data[base + 2] = r;
            }
        }

        Ok(Self {
            header: build_header(width, height, size),
            width,
            height,
            stride,
            data,
        })
    }

    /// Serialize the (possibly modified) image back to BMP bytes.
    ///
    /// The preserved header is written unchanged, so an unmodified image
    /// round-trips byte for byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.data.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&self.data);
        out
    }

    /// Logical width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Logical height in pixels; negative for top-down images.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of stored rows (`|height|`).
    pub fn rows(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    /// Total pixel count (`width * |height|`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.rows()
    }

    /// Bytes per stored row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of a pixel's first (blue) channel within the pixel array.
    ///
    /// `row` is in storage order.
    pub fn pixel_offset(&self, row: usize, col: usize) -> usize {
        row * self.stride + col * BYTES_PER_PIXEL
    }

    /// The raw pixel array (B, G, R channel order, rows padded).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw pixel array.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Bytes per row for a 24 bpp image: pixel bytes rounded up to a multiple of 4.
fn row_stride(width: i32) -> usize {
    (width as usize * BYTES_PER_PIXEL + 3) / 4 * 4
}

/// Build a file header + `BITMAPINFOHEADER` for a 24 bpp uncompressed image.
fn build_header(width: i32, height: i32, pixel_size: usize) -> [u8; HEADER_LEN] {
    let mut h = [0u8; HEADER_LEN];
    h[0] = b'B';
    h[1] = b'M';
    h[2..6].copy_from_slice(&((HEADER_LEN + pixel_size) as u32).to_le_bytes());
    // bytes 6..10: reserved, zero
    h[10..14].copy_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // pixel data offset
    h[14..18].copy_from_slice(&40u32.to_le_bytes()); // BITMAPINFOHEADER size
    h[18..22].copy_from_slice(&width.to_le_bytes());
    h[22..26].copy_from_slice(&height.to_le_bytes());
    h[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    h[28..30].copy_from_slice(&24u16.to_le_bytes()); // bits per pixel
    // bytes 30..34: compression = 0 (BI_RGB)
    h[34..38].copy_from_slice(&(pixel_size as u32).to_le_bytes());
    h[38..42].copy_from_slice(&2835u32.to_le_bytes()); // ~72 dpi
    h[42..46].copy_from_slice(&2835u32.to_le_bytes());
    // bytes 46..54: palette fields, zero for 24 bpp
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_padded_to_four_bytes() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(2), 8);
        assert_eq!(row_stride(3), 12);
        assert_eq!(row_stride(4), 12);
        assert_eq!(row_stride(16), 48);
    }

    #[test]
    fn new_fills_bgr() {
        let img = BmpImage::new(2, 2, [10, 20, 30]).unwrap();
        let base = img.pixel_offset(1, 1);
        assert_eq!(img.data()[base], 30); // blue
        assert_eq!(img.data()[base + 1], 20); // green
        assert_eq!(img.data()[base + 2], 10); // red
    }

    #[test]
    fn serialize_parse_roundtrip() {
        let img = BmpImage::new(5, 3, [1, 2, 3]).unwrap();
        let bytes = img.to_bytes();
        let parsed = BmpImage::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.width(), 5);
        assert_eq!(parsed.height(), 3);
        assert_eq!(parsed.stride(), 16);
        assert_eq!(parsed.to_bytes(), bytes);
    }

    #[test]
    fn top_down_height_preserved() {
        let img = BmpImage::new(4, -6, [0, 0, 0]).unwrap();
        assert_eq!(img.rows(), 6);
        let parsed = BmpImage::from_bytes(&img.to_bytes()).unwrap();
        assert_eq!(parsed.height(), -6);
        assert_eq!(parsed.rows(), 6);
    }

    #[test]
    fn rejects_bad_signature() {
        let mut bytes = BmpImage::new(2, 2, [0, 0, 0]).unwrap().to_bytes();
        bytes[0] = b'X';
        let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
        assert_eq!(err, BmpError::InvalidSignature);
    }

    #[test]
    fn rejects_unsupported_bit_depth() {
        let mut bytes = BmpImage::new(2, 2, [0, 0, 0]).unwrap().to_bytes();
        bytes[28..30].copy_from_slice(&8u16.to_le_bytes());
        let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
        assert_eq!(err, BmpError::UnsupportedBitDepth(8));
    }

    #[test]
    fn rejects_compressed_pixel_data() {
        let mut bytes = BmpImage::new(2, 2, [0, 0, 0]).unwrap().to_bytes();
        bytes[30..34].copy_from_slice(&1u32.to_le_bytes());
        let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
        assert_eq!(err, BmpError::UnsupportedCompression(1));
    }

    #[test]
    fn rejects_truncated_input() {
        let bytes = BmpImage::new(8, 8, [0, 0, 0]).unwrap().to_bytes();
        let err = BmpImage::from_bytes(&bytes[..HEADER_LEN - 1])
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err, BmpError::UnexpectedEof);
        let err = BmpImage::from_bytes(&bytes[..bytes.len() - 1])
            .map(|_| ())
            .unwrap_err();
        assert_eq!(err, BmpError::UnexpectedEof);
    }

    #[test]
    fn clone_is_independent() {
        let a = BmpImage::new(2, 2, [9, 9, 9]).unwrap();
        let mut b = a.clone();
        b.data_mut()[0] ^= 1;
        assert_ne!(a.to_bytes(), b.to_bytes());
    }
}
