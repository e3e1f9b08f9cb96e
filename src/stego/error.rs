// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from BMP parsing through position
//! selection and capsule extraction. [`StegoError::MessageTooLarge`] is the
//! one expected, non-exceptional outcome of normal use -- callers branch on
//! it to suggest a larger image, a shorter message, or a higher threshold.

use core::fmt;

use crate::bmp::error::BmpError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The cover image could not be parsed as a supported BMP.
    InvalidBmp(BmpError),
    /// The pixel grid is structurally invalid (empty buffer, bad dimensions).
    InvalidImage,
    /// The selection block size must be at least one pixel.
    InvalidBlockSize,
    /// The message, with its length header, exceeds the low-contrast
    /// embedding capacity of the cover image.
    MessageTooLarge,
    /// Backing storage for an intermediate buffer could not be obtained.
    AllocationFailed,
    /// Fewer embedded bits are available than the protocol expects --
    /// typically a parameter mismatch or an image that was never encoded.
    InsufficientBits,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBmp(e) => write!(f, "invalid BMP: {e}"),
            Self::InvalidImage => write!(f, "invalid pixel grid"),
            Self::InvalidBlockSize => write!(f, "block size must be at least 1"),
            Self::MessageTooLarge => write!(f, "message too large for this image"),
            Self::AllocationFailed => write!(f, "failed to allocate intermediate buffer"),
            Self::InsufficientBits => write!(f, "not enough embedded bits available"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBmp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BmpError> for StegoError {
    fn from(e: BmpError) -> Self {
        Self::InvalidBmp(e)
    }
}
