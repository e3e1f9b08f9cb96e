// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Capacity accounting.
//!
//! Every listed position contributes one embeddable bit per channel, so
//! capacity in bits is three times the position list length. A message of
//! `L` bytes needs `(4 + L) * 8` bits: the 4-byte length header plus the
//! payload itself.

use crate::bmp::BmpImage;
use crate::stego::capsule::LENGTH_BYTES;
use crate::stego::error::StegoError;
use crate::stego::select;
use crate::stego::SelectionParams;

/// Embeddable bits for a given position list: one per channel per pixel.
pub fn capacity_bits(positions: &[usize]) -> usize {
    positions.len() * 3
}

/// Bits required to embed a message of `message_len` bytes, header included.
///
/// `None` on arithmetic overflow, which can only happen for a nonsensical
/// length decoded from an unembedded image.
pub fn required_bits(message_len: usize) -> Option<usize> {
    LENGTH_BYTES
        .checked_add(message_len)?
        .checked_mul(8)
}

/// Estimate the maximum message payload (in bytes) that can be embedded in
/// the given cover image with the given selection parameters.
///
/// Runs the full contrast selection, so this costs as much as the selection
/// phase of an encode.
///
/// # Errors
/// Same failure conditions as the contrast selector itself.
pub fn estimate_capacity(img: &BmpImage, params: &SelectionParams) -> Result<usize, StegoError> {
    let positions =
        select::find_low_contrast_positions(img, params.block_size, params.contrast_threshold)?;
    let bytes = capacity_bits(&positions) / 8;
    Ok(bytes.saturating_sub(LENGTH_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_bits_per_position() {
        assert_eq!(capacity_bits(&[]), 0);
        assert_eq!(capacity_bits(&[0, 5, 9]), 9);
    }

    #[test]
    fn required_bits_includes_header() {
        assert_eq!(required_bits(0), Some(32));
        assert_eq!(required_bits(13), Some(136));
        assert_eq!(required_bits(usize::MAX), None);
    }

    #[test]
    fn uniform_cover_estimate() {
        // 16x16 uniform, block 4: all 256 pixels selected -> 768 bits ->
        // 96 bytes, minus the 4-byte header.
        let img = BmpImage::new(16, 16, [100, 100, 100]).unwrap();
        let params = SelectionParams::new(4, 1.0);
        assert_eq!(estimate_capacity(&img, &params).unwrap(), 92);
    }

    #[test]
    fn tiny_cover_estimates_zero() {
        let img = BmpImage::new(2, 2, [100, 100, 100]).unwrap();
        let params = SelectionParams::new(4, 1.0);
        assert_eq!(estimate_capacity(&img, &params).unwrap(), 0);
    }
}
