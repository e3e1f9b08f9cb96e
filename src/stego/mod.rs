// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Adaptive LSB steganography over a BMP pixel grid.
//!
//! The embedding is biased toward visually flat regions: a sliding-window
//! contrast scan over a stabilized luminance map yields a deterministic list
//! of pixel positions, and the message capsule's bits land in the channel
//! LSBs of exactly those pixels. Because the luminance computation masks off
//! the bit that embedding modifies, the decoder recovers the same position
//! list from the stego image and can replay the extraction in the encoder's
//! order.
//!
//! Entirely single-threaded and synchronous; the pixel grid is the only
//! shared mutable state and is owned by the caller throughout.

pub mod capacity;
pub mod capsule;
pub mod embed;
pub mod error;
pub mod luma;
mod pipeline;
pub mod select;

pub use capacity::estimate_capacity;
pub use error::StegoError;
pub use pipeline::{decode_message, encode_message};
pub use select::find_low_contrast_positions;

/// Tunables for the contrast selection, supplied by the caller on every
/// encode/decode entry point.
///
/// Encode and decode must use identical values; no parameter is persisted
/// in the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    /// Side length of the square contrast window, in pixels. Must be >= 1.
    pub block_size: usize,
    /// Population standard deviation (in luma units, 0..=254) below which a
    /// window counts as low-contrast. Non-negative.
    pub contrast_threshold: f64,
}

impl SelectionParams {
    pub fn new(block_size: usize, contrast_threshold: f64) -> Self {
        Self {
            block_size,
            contrast_threshold,
        }
    }
}

impl Default for SelectionParams {
    /// A mid-size window with a tolerant threshold; suitable for photos
    /// with smooth areas.
    fn default() -> Self {
        Self::new(8, 5.0)
    }
}
