//! Core types for the codec.

use core::fmt;
use core::ops::Deref;

use crate::constants::*;

/// A Unicode code point.
///
/// Valid runes are scalar values: `0..=0x10FFFF` excluding the surrogate
/// range `0xD800..=0xDFFF`. Any other value is treated as
/// [`REPLACEMENT_CHAR`] by the lenient encoder.
pub type Rune = u32;

/// Returns true if `r` is a Unicode scalar value.
#[inline]
pub const fn is_valid_rune(r: Rune) -> bool {
    r <= MAX_RUNE && !is_surrogate(r)
}

/// Returns true if `r` lies in the surrogate range.
#[inline]
pub const fn is_surrogate(r: Rune) -> bool {
    r >= SURROGATE_MIN && r <= SURROGATE_MAX
}

/// Number of bytes needed to encode `r`, or `None` if `r` is not a scalar value.
#[inline]
pub const fn rune_len(r: Rune) -> Option<usize> {
    match r {
        0..=RUNE1_MAX => Some(1),
        0x80..=RUNE2_MAX => Some(2),
        0x800..=0xD7FF => Some(3),
        SURROGATE_MIN..=SURROGATE_MAX => None,
        0xE000..=RUNE3_MAX => Some(3),
        0x10000..=MAX_RUNE => Some(4),
        _ => None,
    }
}

/// Returns true if `b` is a continuation byte (`10xxxxxx`).
#[inline]
pub const fn is_continuation(b: u8) -> bool {
    b & CONT_CHECK_MASK == TAG_CONT
}

/// Returns true if `b` could begin an encoded rune.
///
/// This is the complement of [`is_continuation`]; it says nothing about
/// whether the sequence starting at `b` is well formed.
#[inline]
pub const fn is_rune_start(b: u8) -> bool {
    !is_continuation(b)
}

/// A single encoded rune held on the stack.
///
/// Dereferences to the encoded bytes, so it can be compared against or
/// copied into any byte buffer without allocating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedRune {
    buf: [u8; UTF_MAX],
    len: u8,
}

impl EncodedRune {
    /// Create from a buffer and the number of bytes used.
    #[inline]
    pub(crate) const fn new(buf: [u8; UTF_MAX], len: usize) -> Self {
        debug_assert!(len >= 1 && len <= UTF_MAX);
        Self {
            buf,
            len: len as u8,
        }
    }

    /// Get the encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Number of encoded bytes (1 to 4).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Get the encoded rune as a string slice.
    ///
    /// Encoder output is always well formed, so this never fails.
    #[inline]
    pub fn as_str(&self) -> &str {
        crate::validate::as_str(self.as_bytes()).unwrap_or("\u{FFFD}")
    }
}

impl Deref for EncodedRune {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedRune {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for EncodedRune {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for EncodedRune {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl fmt::Debug for EncodedRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedRune({})", crate::hex::HexBytes(self.as_bytes()))
    }
}

impl fmt::Display for EncodedRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
