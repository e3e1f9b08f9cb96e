// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! BMP codec integration tests: header handling, strides, rejection paths.

use flatfield::{BmpError, BmpImage};

#[test]
fn unmodified_image_roundtrips_byte_for_byte() {
    let img = BmpImage::new(17, 9, [12, 34, 56]).unwrap();
    let bytes = img.to_bytes();
    let parsed = BmpImage::from_bytes(&bytes).unwrap();
    assert_eq!(parsed.to_bytes(), bytes);
}

#[test]
fn header_fields_parse_back() {
    let img = BmpImage::new(33, 21, [0, 0, 0]).unwrap();
    let parsed = BmpImage::from_bytes(&img.to_bytes()).unwrap();
    assert_eq!(parsed.width(), 33);
    assert_eq!(parsed.height(), 21);
    assert_eq!(parsed.rows(), 21);
    assert_eq!(parsed.pixel_count(), 693);
    // 33 * 3 = 99 bytes of pixels, padded to 100.
    assert_eq!(parsed.stride(), 100);
}

#[test]
fn trailing_bytes_after_pixel_array_ignored() {
    let mut bytes = BmpImage::new(4, 4, [1, 2, 3]).unwrap().to_bytes();
    bytes.extend_from_slice(&[0xEE; 16]);
    let parsed = BmpImage::from_bytes(&bytes).unwrap();
    assert_eq!(parsed.data().len(), parsed.stride() * parsed.rows());
}

#[test]
fn header_modifications_survive_reserialization() {
    // A foreign header (different resolution fields, nonzero reserved
    // bytes) must be preserved verbatim, not regenerated.
    let mut bytes = BmpImage::new(4, 4, [1, 2, 3]).unwrap().to_bytes();
    bytes[6] = 0xAB; // reserved field
    bytes[38..42].copy_from_slice(&1000u32.to_le_bytes());
    let parsed = BmpImage::from_bytes(&bytes).unwrap();
    assert_eq!(parsed.to_bytes(), bytes);
}

#[test]
fn rejects_zero_height() {
    let mut bytes = BmpImage::new(4, 4, [0, 0, 0]).unwrap().to_bytes();
    bytes[22..26].copy_from_slice(&0i32.to_le_bytes());
    let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
    assert_eq!(err, BmpError::InvalidDimensions);
}

#[test]
fn rejects_negative_width() {
    let mut bytes = BmpImage::new(4, 4, [0, 0, 0]).unwrap().to_bytes();
    bytes[18..22].copy_from_slice(&(-4i32).to_le_bytes());
    let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
    assert_eq!(err, BmpError::InvalidDimensions);
}

#[test]
fn rejects_32_bpp() {
    let mut bytes = BmpImage::new(4, 4, [0, 0, 0]).unwrap().to_bytes();
    bytes[28..30].copy_from_slice(&32u16.to_le_bytes());
    let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
    assert_eq!(err, BmpError::UnsupportedBitDepth(32));
}

#[test]
fn rejects_rle_compression() {
    let mut bytes = BmpImage::new(4, 4, [0, 0, 0]).unwrap().to_bytes();
    bytes[30..34].copy_from_slice(&2u32.to_le_bytes());
    let err = BmpImage::from_bytes(&bytes).map(|_| ()).unwrap_err();
    assert_eq!(err, BmpError::UnsupportedCompression(2));
}

#[test]
fn rejects_empty_input() {
    let err = BmpImage::from_bytes(&[]).map(|_| ()).unwrap_err();
    assert_eq!(err, BmpError::UnexpectedEof);
}

#[test]
fn new_rejects_degenerate_dimensions() {
    assert!(BmpImage::new(0, 4, [0, 0, 0]).is_err());
    assert!(BmpImage::new(-1, 4, [0, 0, 0]).is_err());
    assert!(BmpImage::new(4, 0, [0, 0, 0]).is_err());
}
