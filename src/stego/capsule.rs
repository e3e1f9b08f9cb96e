// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Message capsule construction and bit-level packing.
//!
//! The capsule is the only structure that ever lands in pixel LSBs:
//!
//! ```text
//! [4 bytes] payload length (little-endian u32)
//! [N bytes] raw payload
//! ```
//!
//! No version tag, no checksum. Bit order within every byte, header and
//! payload alike, is most-significant-bit first.

use crate::stego::error::StegoError;

/// Size of the length header in bytes.
pub const LENGTH_BYTES: usize = 4;

/// Size of the length header in bits.
pub const LENGTH_BITS: usize = LENGTH_BYTES * 8;

/// Build a capsule: little-endian length header followed by the payload.
///
/// # Errors
/// Returns [`StegoError::MessageTooLarge`] if the payload length does not
/// fit the 32-bit header field.
pub fn build_capsule(message: &[u8]) -> Result<Vec<u8>, StegoError> {
    let len = u32::try_from(message.len()).map_err(|_| StegoError::MessageTooLarge)?;
    let mut capsule = Vec::with_capacity(LENGTH_BYTES + message.len());
    capsule.extend_from_slice(&len.to_le_bytes());
    capsule.extend_from_slice(message);
    Ok(capsule)
}

/// Read the payload length from the first four capsule bytes.
pub fn read_length(header: &[u8; LENGTH_BYTES]) -> u32 {
    u32::from_le_bytes(*header)
}

/// Convert bytes to a bit vector, MSB first within each byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// The caller is responsible for passing a multiple of eight bits; a short
/// final chunk is zero-padded on the right.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}
