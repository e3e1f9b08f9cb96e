// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Error types for BMP parsing and encoding.

use std::fmt;

/// Errors that can occur while parsing or building a BMP image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BmpError {
    /// Input data is shorter than the header or declared pixel array.
    UnexpectedEof,
    /// Missing `BM` signature at the start of the file.
    InvalidSignature,
    /// Only 24 bits per pixel is supported.
    UnsupportedBitDepth(u16),
    /// Only uncompressed (BI_RGB) pixel data is supported.
    UnsupportedCompression(u32),
    /// Width must be positive and height nonzero.
    InvalidDimensions,
}

impl fmt::Display for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of BMP data"),
            Self::InvalidSignature => write!(f, "missing BM signature (not a BMP)"),
            Self::UnsupportedBitDepth(bpp) => {
                write!(f, "unsupported bit depth: {bpp} bpp (only 24 bpp)")
            }
            Self::UnsupportedCompression(c) => {
                write!(f, "unsupported compression scheme: {c} (only BI_RGB)")
            }
            Self::InvalidDimensions => write!(f, "invalid BMP dimensions"),
        }
    }
}

impl std::error::Error for BmpError {}

pub type Result<T> = std::result::Result<T, BmpError>;
