// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/flatfield

//! Encode/decode orchestration.
//!
//! Encoding:
//! 1. Select low-contrast positions for the given block size and threshold.
//! 2. Check capacity against `(4 + message_len) * 8` bits. On shortfall,
//!    fail with [`StegoError::MessageTooLarge`] before touching any pixel,
//!    so a failed encode leaves the image byte-for-byte unchanged.
//! 3. Build the length-prefixed capsule, pack it to bits, embed.
//!
//! Decoding re-derives the identical position list (selection ignores the
//! bit embedding modifies), reads the 32-bit header first, then re-reads
//! header + payload at the now-known full length. The caller must pass the
//! same parameters used at encode time; nothing is persisted to recover
//! them from the image.

use log::{debug, warn};

use crate::bmp::BmpImage;
use crate::stego::capacity;
use crate::stego::capsule::{self, LENGTH_BITS, LENGTH_BYTES};
use crate::stego::embed;
use crate::stego::error::StegoError;
use crate::stego::select;
use crate::stego::SelectionParams;

/// Embed a message into the cover image's low-contrast regions, in place.
///
/// All-or-nothing: on any error the pixel grid is unmodified.
///
/// # Errors
/// - [`StegoError::InvalidImage`] / [`StegoError::InvalidBlockSize`] for
///   structural problems.
/// - [`StegoError::MessageTooLarge`] if the capsule does not fit the
///   image's low-contrast capacity.
pub fn encode_message(
    img: &mut BmpImage,
    message: &[u8],
    params: &SelectionParams,
) -> Result<(), StegoError> {
    let positions =
        select::find_low_contrast_positions(img, params.block_size, params.contrast_threshold)?;

    let capacity = capacity::capacity_bits(&positions);
    let required = capacity::required_bits(message.len()).ok_or(StegoError::MessageTooLarge)?;
    debug!(
        "encode: {} positions, {capacity} capacity bits, {required} required bits",
        positions.len()
    );

    if capacity < required {
        warn!("capacity insufficient: have {capacity} bits, need {required} bits");
        return Err(StegoError::MessageTooLarge);
    }

    let capsule = capsule::build_capsule(message)?;
    let bits = capsule::bytes_to_bits(&capsule);
    embed::embed_bits(img, &positions, &bits);
    Ok(())
}

/// Recover a message embedded with [`encode_message`] and the same
/// parameters.
///
/// # Errors
/// - [`StegoError::InsufficientBits`] if the image cannot hold even the
///   header, or the decoded length needs more bits than the image provides.
///   This is also the usual failure for an image that was never encoded or
///   for mismatched parameters, since the decoded length is then garbage.
pub fn decode_message(img: &BmpImage, params: &SelectionParams) -> Result<Vec<u8>, StegoError> {
    let positions =
        select::find_low_contrast_positions(img, params.block_size, params.contrast_threshold)?;

    let capacity = capacity::capacity_bits(&positions);
    if capacity < LENGTH_BITS {
        warn!("decode: {capacity} capacity bits cannot hold the length header");
        return Err(StegoError::InsufficientBits);
    }

    let header_bits = embed::extract_bits(img, &positions, LENGTH_BITS)?;
    let header_bytes = capsule::bits_to_bytes(&header_bits);
    let header: [u8; LENGTH_BYTES] = header_bytes[..LENGTH_BYTES]
        .try_into()
        .map_err(|_| StegoError::InsufficientBits)?;
    let message_len = capsule::read_length(&header) as usize;

    let required =
        capacity::required_bits(message_len).ok_or(StegoError::InsufficientBits)?;
    debug!("decode: stored length {message_len}, {required} of {capacity} bits needed");

    if capacity < required {
        warn!("decode: stored length {message_len} exceeds capacity, likely not a stego image");
        return Err(StegoError::InsufficientBits);
    }

    // Re-read header + payload from the top and drop the header bits, so the
    // payload comes out of a single pass over the position list.
    let all_bits = embed::extract_bits(img, &positions, required)?;
    Ok(capsule::bits_to_bytes(&all_bits[LENGTH_BITS..]))
}
