//! Prefix, suffix and substring search.
//!
//! UTF-8 is a prefix code: no rune's encoding appears inside another's, or
//! inside any sequence of others. Searching well-formed text byte by byte
//! therefore only ever matches on rune boundaries, and none of these
//! functions need to decode.

use memchr::memmem;

use crate::encode::encode;
use crate::types::Rune;

/// Returns true if `s` begins with `prefix`.
#[inline]
pub fn has_prefix(s: &[u8], prefix: &[u8]) -> bool {
    s.len() >= prefix.len() && &s[..prefix.len()] == prefix
}

/// Returns true if `s` ends with `suffix`.
#[inline]
pub fn has_suffix(s: &[u8], suffix: &[u8]) -> bool {
    s.len() >= suffix.len() && &s[s.len() - suffix.len()..] == suffix
}

/// Byte offset of the first occurrence of `needle` in `s`.
///
/// An empty needle matches at offset 0.
#[inline]
pub fn find(s: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(s, needle)
}

/// Returns true if `needle` occurs anywhere in `s`.
///
/// Every buffer, including the empty one, contains the empty needle.
///
/// # Example
///
/// ```
/// use utf8_runes::contains;
///
/// assert!(contains("Hello, 世界".as_bytes(), "世".as_bytes()));
/// assert!(!contains(b"Hello", b"world"));
/// assert!(contains(b"", b""));
/// ```
#[inline]
pub fn contains(s: &[u8], needle: &[u8]) -> bool {
    find(s, needle).is_some()
}

/// Returns true if the encoding of `r` occurs in `s`.
///
/// Invalid runes are searched for as [`REPLACEMENT_CHAR`](crate::REPLACEMENT_CHAR).
pub fn contains_rune(s: &[u8], r: Rune) -> bool {
    let enc = encode(r);
    match *enc.as_bytes() {
        [b] => memchr::memchr(b, s).is_some(),
        _ => contains(s, &enc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &[u8] = "Hello, 世界".as_bytes();

    #[test]
    fn test_has_prefix() {
        assert!(has_prefix(HELLO, b"Hello"));
        assert!(has_prefix(HELLO, b""));
        assert!(has_prefix(HELLO, HELLO));
        assert!(!has_prefix(b"He", b"Hello"));
        assert!(!has_prefix(HELLO, b"hello"));
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(HELLO, "世界".as_bytes()));
        assert!(has_suffix(HELLO, b""));
        assert!(!has_suffix(HELLO, "世".as_bytes()));
        assert!(!has_suffix(b"", b"x"));
    }

    #[test]
    fn test_contains_middle() {
        assert!(contains(HELLO, b", "));
        assert!(contains(HELLO, "o, 世".as_bytes()));
        assert!(!contains(HELLO, b"world"));
        assert_eq!(find(HELLO, "界".as_bytes()), Some(10));
    }

    #[test]
    fn test_contains_empty() {
        assert!(contains(HELLO, b""));
        assert!(contains(b"", b""));
        assert!(!contains(b"", b"a"));
    }

    #[test]
    fn test_contains_rune() {
        assert!(contains_rune(HELLO, 0x754C));
        assert!(contains_rune(HELLO, b',' as Rune));
        assert!(!contains_rune(HELLO, 0x4EAC));
        assert!(!contains_rune(HELLO, 0xD800));
        assert!(contains_rune("\u{FFFD}".as_bytes(), 0x110000));
    }
}
