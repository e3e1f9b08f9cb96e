// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Per-pixel luminance used for contrast scoring.
//!
//! The map is computed with the least significant bit of every channel
//! cleared. Embedding only ever touches that bit, so the luminance of a
//! stego image is identical to the luminance of its cover -- which is what
//! lets the decoder re-derive the encoder's position list from the modified
//! pixels.

use crate::bmp::BmpImage;
use crate::stego::error::StegoError;

/// ITU-R BT.601 luma weights.
const R_WEIGHT: f64 = 0.299;
const G_WEIGHT: f64 = 0.587;
const B_WEIGHT: f64 = 0.114;

/// Mask clearing the bit that embedding modifies.
const STABLE_MASK: u8 = 0xFE;

/// Weighted luma of one pixel, ignoring each channel's LSB.
#[inline]
fn stable_luminance(r: u8, g: u8, b: u8) -> f64 {
    R_WEIGHT * f64::from(r & STABLE_MASK)
        + G_WEIGHT * f64::from(g & STABLE_MASK)
        + B_WEIGHT * f64::from(b & STABLE_MASK)
}

/// Compute the luminance map of an image, one `f64` per pixel in row-major
/// storage order.
///
/// Pure function over the pixel grid; the result is transient scratch for
/// the contrast selector.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if the pixel buffer is empty or the
///   dimensions are degenerate.
/// - [`StegoError::AllocationFailed`] if the map cannot be allocated.
pub fn luminance_map(img: &BmpImage) -> Result<Vec<f64>, StegoError> {
    if img.data().is_empty() || img.width() <= 0 || img.rows() == 0 {
        return Err(StegoError::InvalidImage);
    }

    let width = img.width() as usize;
    let rows = img.rows();
    let data = img.data();

    let mut lum = Vec::new();
    lum.try_reserve_exact(width * rows)
        .map_err(|_| StegoError::AllocationFailed)?;

    for row in 0..rows {
        for col in 0..width {
            let base = img.pixel_offset(row, col);
            // Storage order is B, G, R.
            let b = data[base];
            let g = data[base + 1];
            let r = data[base + 2];
            lum.push(stable_luminance(r, g, b));
        }
    }

    Ok(lum)
}
