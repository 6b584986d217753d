//! Rune decoding.
//!
//! Every call reads a leading byte, derives the sequence length from its
//! high-order bits, then checks and consumes the continuation bytes. No state
//! is carried between calls.

use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::types::{Rune, is_continuation};

/// Decode the rune starting at `offset` in `buf`.
///
/// Returns the rune and the number of bytes it occupies. Malformed input
/// (bad leading byte, missing or invalid continuation byte, overlong form,
/// surrogate, or value above U+10FFFF) yields `(REPLACEMENT_CHAR, 1)`, so a
/// scanning loop always advances. An `offset` outside the buffer is treated
/// the same way rather than panicking.
///
/// # Example
///
/// ```
/// use utf8_runes::{decode, REPLACEMENT_CHAR};
///
/// assert_eq!(decode(b"A", 0), (0x41, 1));
/// assert_eq!(decode("世".as_bytes(), 0), (0x4E16, 3));
/// assert_eq!(decode(&[0xFF], 0), (REPLACEMENT_CHAR, 1));
/// ```
#[inline]
pub fn decode(buf: &[u8], offset: usize) -> (Rune, usize) {
    decode_strict(buf, offset).unwrap_or((REPLACEMENT_CHAR, 1))
}

/// Decode the rune starting at `offset`, reporting why decoding failed.
///
/// # Errors
/// Returns the [`CodecError`] describing the first check that failed.
pub fn decode_strict(buf: &[u8], offset: usize) -> Result<(Rune, usize)> {
    let src = match buf.get(offset..) {
        Some(src) if !src.is_empty() => src,
        _ => return Err(CodecError::OffsetOutOfBounds),
    };

    let b0 = src[0];
    let (len, lead_bits, min) = match b0 {
        0x00..=0x7F => return Ok((b0 as Rune, 1)),
        0b110_00000..=0b110_11111 => (2, b0 & MASK_TWO, RUNE1_MAX + 1),
        0b1110_0000..=0b1110_1111 => (3, b0 & MASK_THREE, RUNE2_MAX + 1),
        0b11110_000..=0b11110_111 => (4, b0 & MASK_FOUR, RUNE3_MAX + 1),
        _ => return Err(CodecError::InvalidLeadByte),
    };

    let mut r = lead_bits as Rune;
    for i in 1..len {
        let b = *src.get(i).ok_or(CodecError::Truncated)?;
        if !is_continuation(b) {
            return Err(CodecError::InvalidContinuation);
        }
        r = (r << CONT_BITS) | (b & MASK_CONT) as Rune;
    }

    if r < min {
        return Err(CodecError::Overlong);
    }
    if r > MAX_RUNE {
        return Err(CodecError::OutOfRange);
    }
    if (SURROGATE_MIN..=SURROGATE_MAX).contains(&r) {
        return Err(CodecError::Surrogate);
    }

    Ok((r, len))
}
