// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! # flatfield
//!
//! Adaptive LSB steganography for 24-bit uncompressed BMP images. Hides an
//! arbitrary byte payload in the least significant bits of pixel channels,
//! steering the modified pixels into visually flat (low-contrast) regions so
//! the change is harder to notice or measure.
//!
//! The BMP codec (`bmp` module) is zero-dependency (std only) and preserves
//! the original header byte-for-byte. The steganography layer (`stego`
//! module) selects embedding positions with a sliding-window contrast scan
//! that is stable under its own embedding, so decoding needs nothing beyond
//! the stego image and the original selection parameters.
//!
//! # Quick start
//!
//! ```rust
//! use flatfield::{BmpImage, SelectionParams, encode_message, decode_message};
//!
//! let mut img = BmpImage::new(32, 32, [200, 200, 200]).unwrap();
//! let params = SelectionParams::default();
//!
//! encode_message(&mut img, b"meet at dawn", &params).unwrap();
//! let recovered = decode_message(&img, &params).unwrap();
//! assert_eq!(recovered, b"meet at dawn");
//! ```

pub mod bmp;
pub mod stego;

pub use bmp::error::BmpError;
pub use bmp::BmpImage;
pub use stego::{
    decode_message, encode_message, estimate_capacity, find_low_contrast_positions,
    SelectionParams, StegoError,
};
