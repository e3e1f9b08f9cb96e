// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Low-contrast position selection.
//!
//! Slides a `k`×`k` window over the luminance map (step 1 in both axes) and
//! collects the pixels of every window whose population standard deviation
//! is strictly below the contrast threshold. Windows are visited in
//! row-major order of their top-left corner and contribute their pixels in
//! row-major order within the window.
//!
//! Overlapping windows would list shared pixels more than once, which
//! silently loses bits on the round trip: a pixel written by two list slots
//! keeps only the later slot's bits, but extraction would hand that value to
//! both slots. Positions are therefore de-duplicated, first occurrence wins,
//! and capacity counts each pixel once.
//!
//! Selection is deterministic: the same image, block size, and threshold
//! always yield the same list, which is what lets the decoder reconstruct
//! the encoder's embedding order from the stego image alone.

use crate::bmp::BmpImage;
use crate::stego::error::StegoError;
use crate::stego::luma;

/// Find all pixel positions inside low-contrast windows, in deterministic
/// first-seen order.
///
/// Positions are raster-scan pixel indices (`row * width + col` in storage
/// order). Each listed pixel contributes three embeddable bits, one per
/// channel.
///
/// # Arguments
/// - `block_size`: window side length in pixels, must be >= 1.
/// - `threshold`: population standard deviation (in luma units) below which
///   a window qualifies.
///
/// # Returns
/// The de-duplicated position list. An image smaller than the window in
/// either dimension yields an empty list -- zero capacity, not an error.
///
/// # Errors
/// - [`StegoError::InvalidImage`] for a structurally invalid pixel grid.
/// - [`StegoError::InvalidBlockSize`] if `block_size` is zero.
/// - [`StegoError::AllocationFailed`] if scratch buffers cannot be allocated.
pub fn find_low_contrast_positions(
    img: &BmpImage,
    block_size: usize,
    threshold: f64,
) -> Result<Vec<usize>, StegoError> {
    if block_size == 0 {
        return Err(StegoError::InvalidBlockSize);
    }

    let lum = luma::luminance_map(img)?;

    let width = img.width() as usize;
    let rows = img.rows();

    if block_size > width || block_size > rows {
        log::debug!("block size {block_size} exceeds {width}x{rows} image, empty selection");
        return Ok(Vec::new());
    }

    let pixel_count = width * rows;
    let mut seen = Vec::new();
    seen.try_reserve_exact(pixel_count)
        .map_err(|_| StegoError::AllocationFailed)?;
    seen.resize(pixel_count, false);

    // The de-duplicated list never exceeds the pixel count, so one exact
    // reservation covers the whole scan.
    let mut positions = Vec::new();
    positions
        .try_reserve_exact(pixel_count)
        .map_err(|_| StegoError::AllocationFailed)?;

    let n = (block_size * block_size) as f64;

    for wr in 0..=(rows - block_size) {
        for wc in 0..=(width - block_size) {
            let mut sum = 0.0;
            for r in 0..block_size {
                let row_base = (wr + r) * width + wc;
                for c in 0..block_size {
                    sum += lum[row_base + c];
                }
            }
            let mean = sum / n;

            let mut sq_sum = 0.0;
            for r in 0..block_size {
                let row_base = (wr + r) * width + wc;
                for c in 0..block_size {
                    let d = lum[row_base + c] - mean;
                    sq_sum += d * d;
                }
            }
            // Population variance: divide by n, not n - 1.
            let stddev = (sq_sum / n).sqrt();

            if stddev < threshold {
                for r in 0..block_size {
                    let row_base = (wr + r) * width + wc;
                    for c in 0..block_size {
                        let idx = row_base + c;
                        if !seen[idx] {
                            seen[idx] = true;
                            positions.push(idx);
                        }
                    }
                }
            }
        }
    }

    Ok(positions)
}
