// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Bit-level embedding and extraction.
//!
//! Walks the position list in order and touches the LSB of each pixel's
//! channels in R, G, B order (storage is B, G, R; the embed order is fixed
//! regardless of storage layout). Embedding stops mid-pixel once the bit
//! budget is spent; padding bytes and unlisted pixels are never touched.

use crate::bmp::BmpImage;
use crate::stego::error::StegoError;

/// Channel byte offsets within a pixel, in embed order R, G, B.
const CHANNEL_ORDER: [usize; 3] = [2, 1, 0];

/// Write `bits` into the channel LSBs of the listed pixels.
///
/// Precondition: the caller has verified `positions.len() * 3 >= bits.len()`.
/// Violating it is a programming error, not a recoverable condition.
pub fn embed_bits(img: &mut BmpImage, positions: &[usize], bits: &[u8]) {
    let width = img.width() as usize;

    let mut bit_index = 0;
    for &pixel in positions {
        if bit_index == bits.len() {
            break;
        }
        let base = img.pixel_offset(pixel / width, pixel % width);
        let data = img.data_mut();
        for ch in CHANNEL_ORDER {
            if bit_index == bits.len() {
                break;
            }
            let value = data[base + ch];
            data[base + ch] = (value & !1) | (bits[bit_index] & 1);
            bit_index += 1;
        }
    }

    debug_assert_eq!(
        bit_index,
        bits.len(),
        "capacity must be verified before embedding"
    );
}

/// Read `total_bits` channel LSBs back in position-list order.
///
/// # Errors
/// Returns [`StegoError::InsufficientBits`] if the list is exhausted before
/// `total_bits` are read -- a short result is never returned.
pub fn extract_bits(
    img: &BmpImage,
    positions: &[usize],
    total_bits: usize,
) -> Result<Vec<u8>, StegoError> {
    let width = img.width() as usize;
    let data = img.data();

    let mut bits = Vec::with_capacity(total_bits);
    for &pixel in positions {
        if bits.len() == total_bits {
            break;
        }
        let base = img.pixel_offset(pixel / width, pixel % width);
        for ch in CHANNEL_ORDER {
            if bits.len() == total_bits {
                break;
            }
            bits.push(data[base + ch] & 1);
        }
    }

    if bits.len() < total_bits {
        return Err(StegoError::InsufficientBits);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_extract_in_channel_order() {
        let mut img = BmpImage::new(4, 1, [100, 100, 100]).unwrap();
        let positions = vec![0usize, 1, 2];
        let bits = vec![1, 0, 1, 1, 1, 0, 0];

        embed_bits(&mut img, &positions, &bits);

        // Pixel 0 stores R=1, G=0, B=1 (bytes are B, G, R).
        assert_eq!(img.data()[2] & 1, 1);
        assert_eq!(img.data()[1] & 1, 0);
        assert_eq!(img.data()[0] & 1, 1);
        // Pixel 2 got only the seventh bit, in its red channel.
        let base = img.pixel_offset(0, 2);
        assert_eq!(img.data()[base + 2] & 1, 0);
        // Pixel 3 untouched.
        let base = img.pixel_offset(0, 3);
        assert_eq!(img.data()[base..base + 3], [100, 100, 100]);

        assert_eq!(extract_bits(&img, &positions, 7).unwrap(), bits);
    }

    #[test]
    fn upper_bits_preserved() {
        let mut img = BmpImage::new(1, 1, [0xAB, 0xCD, 0xEF]).unwrap();
        embed_bits(&mut img, &[0], &[0, 0, 0]);
        assert_eq!(img.data()[2], 0xAA); // red
        assert_eq!(img.data()[1], 0xCC); // green
        assert_eq!(img.data()[0], 0xEE); // blue
    }

    #[test]
    fn extraction_shortfall_is_an_error() {
        let img = BmpImage::new(2, 1, [0, 0, 0]).unwrap();
        let result = extract_bits(&img, &[0, 1], 7);
        assert!(matches!(result, Err(StegoError::InsufficientBits)));
    }
}
