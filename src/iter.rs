//! Rune iteration and counting.

use core::iter::FusedIterator;

use crate::decode::decode;
use crate::types::{Rune, is_rune_start};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "simd")]
use wide::u32x4;

/// Iterator over the runes of a byte buffer.
///
/// Yields `(byte_offset, rune)` pairs from left to right, where
/// `byte_offset` is the index of the rune's first byte. Malformed bytes come
/// out one at a time as [`REPLACEMENT_CHAR`](crate::REPLACEMENT_CHAR).
///
/// Cloning the iterator snapshots its position.
#[derive(Debug, Clone)]
pub struct Runes<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Runes<'a> {
    /// Create an iterator positioned at the start of `buf`.
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Byte offset of the next rune to be yielded.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes not yet consumed.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }
}

impl Iterator for Runes<'_> {
    type Item = (usize, Rune);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.buf.len() {
            return None;
        }

        let start = self.offset;
        let (r, size) = decode(self.buf, start);
        self.offset += size;
        Some((start, r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len() - self.offset;
        (remaining.div_ceil(crate::UTF_MAX), Some(remaining))
    }
}

impl FusedIterator for Runes<'_> {}

/// Iterate over the runes of `buf`, starting from the first byte.
///
/// Each call starts a fresh scan, so iterating twice yields the same pairs.
///
/// # Example
///
/// ```
/// use utf8_runes::iterate;
///
/// let pairs: Vec<_> = iterate("a世b".as_bytes()).collect();
/// assert_eq!(pairs, [(0, 0x61), (1, 0x4E16), (4, 0x62)]);
/// ```
#[inline]
pub const fn iterate(buf: &[u8]) -> Runes<'_> {
    Runes::new(buf)
}

/// Count the runes in `buf`.
///
/// Each malformed byte counts as one rune, matching the number of items
/// [`iterate`] yields.
pub fn rune_count(buf: &[u8]) -> usize {
    // In well-formed input every rune has exactly one non-continuation byte.
    if crate::validate::valid(buf) {
        count_rune_starts(buf)
    } else {
        iterate(buf).count()
    }
}

/// Count the bytes that are not continuation bytes.
#[inline]
fn count_rune_starts(buf: &[u8]) -> usize {
    #[cfg(feature = "simd")]
    {
        count_rune_starts_simd(buf)
    }

    #[cfg(not(feature = "simd"))]
    {
        count_rune_starts_scalar(buf)
    }
}

/// Scalar implementation of count_rune_starts.
#[inline]
fn count_rune_starts_scalar(buf: &[u8]) -> usize {
    buf.iter().filter(|&&b| is_rune_start(b)).count()
}

/// SIMD-accelerated implementation of count_rune_starts.
///
/// Uses bytemuck to view the aligned middle of the buffer as words and
/// accumulates per-word counts four lanes at a time.
#[cfg(feature = "simd")]
fn count_rune_starts_simd(buf: &[u8]) -> usize {
    let (head, words, tail) = bytemuck::pod_align_to::<u8, u32>(buf);

    let mut sum_vec = u32x4::ZERO;
    let mut chunks = words.chunks_exact(4);
    for chunk in &mut chunks {
        sum_vec += u32x4::new([
            starts_in_word(chunk[0]),
            starts_in_word(chunk[1]),
            starts_in_word(chunk[2]),
            starts_in_word(chunk[3]),
        ]);
    }

    let lanes: usize = sum_vec.to_array().iter().map(|&n| n as usize).sum();
    let rest: usize = chunks
        .remainder()
        .iter()
        .map(|&w| starts_in_word(w) as usize)
        .sum();

    lanes + rest + count_rune_starts_scalar(head) + count_rune_starts_scalar(tail)
}

/// Number of non-continuation bytes in a 4-byte word.
#[cfg(any(feature = "simd", test))]
#[inline]
const fn starts_in_word(w: u32) -> u32 {
    // Bit 0 of each byte lane: set unless the byte is 10xxxxxx.
    let starts = ((!w >> 7) | (w >> 6)) & 0x0101_0101;
    // Horizontal add of the lanes lands in the top byte.
    starts.wrapping_mul(0x0101_0101) >> 24
}

/// Decode `buf` into a vector of runes.
#[cfg(feature = "alloc")]
pub fn to_rune_sequence(buf: &[u8]) -> Vec<Rune> {
    let runes = iterate(buf);
    let mut out = Vec::with_capacity(runes.size_hint().0);
    out.extend(runes.map(|(_, r)| r));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REPLACEMENT_CHAR;

    #[test]
    fn test_rune_count_hello_world() {
        let s = "Hello, 世界".as_bytes();
        assert_eq!(s.len(), 13);
        assert_eq!(rune_count(s), 9);
    }

    #[test]
    fn test_rune_count_empty() {
        assert_eq!(rune_count(b""), 0);
        assert_eq!(iterate(b"").next(), None);
    }

    #[test]
    fn test_rune_count_malformed() {
        // Truncated 3-byte lead, then 'a': lead and continuation each count once.
        assert_eq!(rune_count(&[0xE4, 0xB8, b'a']), 3);
        assert_eq!(rune_count(&[0xFF, 0xFE]), 2);
    }

    #[test]
    fn test_iterate_offsets() {
        let s = "Hello, 世界".as_bytes();
        let mut it = iterate(s);
        assert_eq!(it.nth(7), Some((7, 0x4E16)));
        assert_eq!(it.offset(), 10);
        assert_eq!(it.as_bytes(), "界".as_bytes());
        assert_eq!(it.next(), Some((10, 0x754C)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iterate_restartable() {
        let s = [b'x', 0xC3, 0xA9, 0xFF, b'y'];
        let first = iterate(&s);
        let second = iterate(&s);
        assert!(first.eq(second));

        let mut it = iterate(&s);
        assert_eq!(it.next(), Some((0, b'x' as Rune)));
        let snapshot = it.clone();
        assert_eq!(it.next(), Some((1, 0xE9)));
        assert_eq!(it.next(), Some((3, REPLACEMENT_CHAR)));
        assert!(snapshot.map(|(i, _)| i).eq([1, 3, 4]));
    }

    #[test]
    fn test_starts_in_word() {
        assert_eq!(starts_in_word(u32::from_ne_bytes(*b"abcd")), 4);
        assert_eq!(starts_in_word(u32::from_ne_bytes([0xE4, 0xB8, 0x96, b'a'])), 2);
        assert_eq!(starts_in_word(u32::from_ne_bytes([0x80, 0xBF, 0x80, 0xBF])), 0);
    }

    #[test]
    fn test_count_rune_starts_unaligned() {
        let s = "αβγδεζηθικλμνξοπρστυφχψω and some ASCII tail 世界".as_bytes();
        for start in 0..4 {
            let slice = &s[start * 2..];
            assert_eq!(count_rune_starts(slice), count_rune_starts_scalar(slice));
        }
    }
}
