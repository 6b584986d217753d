//! Rune encoding.

use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::types::{EncodedRune, Rune, is_surrogate};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Encode a rune as UTF-8.
///
/// Surrogates and values above U+10FFFF are encoded as
/// [`REPLACEMENT_CHAR`].
///
/// # Example
///
/// ```
/// use utf8_runes::encode;
///
/// assert_eq!(encode(0x4E16).as_bytes(), &[0xE4, 0xB8, 0x96]);
/// assert_eq!(encode(1234567), encode(0xFFFD));
/// ```
#[inline]
pub fn encode(r: Rune) -> EncodedRune {
    let mut buf = [0u8; UTF_MAX];
    let len = encode_into(r, &mut buf);
    EncodedRune::new(buf, len)
}

/// Encode a rune into `out`, returning the number of bytes written.
///
/// Invalid runes are replaced the same way as in [`encode`].
#[inline]
pub fn encode_into(r: Rune, out: &mut [u8; UTF_MAX]) -> usize {
    let r = if is_surrogate(r) || r > MAX_RUNE {
        REPLACEMENT_CHAR
    } else {
        r
    };

    match r {
        0..=RUNE1_MAX => {
            out[0] = r as u8;
            1
        }
        0x80..=RUNE2_MAX => {
            out[0] = TAG_TWO | (r >> CONT_BITS) as u8;
            out[1] = cont_byte(r);
            2
        }
        0x800..=RUNE3_MAX => {
            out[0] = TAG_THREE | (r >> (2 * CONT_BITS)) as u8;
            out[1] = cont_byte(r >> CONT_BITS);
            out[2] = cont_byte(r);
            3
        }
        _ => {
            out[0] = TAG_FOUR | (r >> (3 * CONT_BITS)) as u8;
            out[1] = cont_byte(r >> (2 * CONT_BITS));
            out[2] = cont_byte(r >> CONT_BITS);
            out[3] = cont_byte(r);
            4
        }
    }
}

/// Low six bits of `bits` tagged as a continuation byte.
#[inline]
const fn cont_byte(bits: u32) -> u8 {
    TAG_CONT | (bits as u8 & MASK_CONT)
}

/// Encode a rune, rejecting values that are not scalar values.
///
/// # Errors
/// [`CodecError::Surrogate`] for U+D800..U+DFFF and
/// [`CodecError::OutOfRange`] above U+10FFFF.
pub fn try_encode(r: Rune) -> Result<EncodedRune> {
    if is_surrogate(r) {
        return Err(CodecError::Surrogate);
    }
    if r > MAX_RUNE {
        return Err(CodecError::OutOfRange);
    }
    Ok(encode(r))
}

/// Append the encoding of `r` to `buf`.
#[cfg(feature = "alloc")]
#[inline]
pub fn append_rune(buf: &mut Vec<u8>, r: Rune) {
    buf.extend_from_slice(&encode(r));
}

/// Encode a sequence of runes into a new buffer.
///
/// Out-of-range entries come back as [`REPLACEMENT_CHAR`] when decoded.
#[cfg(feature = "alloc")]
pub fn from_rune_sequence<I>(runes: I) -> Vec<u8>
where
    I: IntoIterator<Item = Rune>,
{
    let runes = runes.into_iter();
    let mut buf = Vec::with_capacity(runes.size_hint().0);
    for r in runes {
        append_rune(&mut buf, r);
    }
    buf
}
