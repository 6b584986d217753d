//! Constants for the UTF-8 codec.

use crate::types::Rune;

/// The Unicode replacement character, substituted for malformed input.
pub const REPLACEMENT_CHAR: Rune = 0xFFFD;

/// Largest valid Unicode scalar value.
pub const MAX_RUNE: Rune = 0x10FFFF;

/// Runes below this value are encoded as a single identical byte.
pub const RUNE_SELF: Rune = 0x80;

/// Maximum number of bytes in a UTF-8 encoded rune.
pub const UTF_MAX: usize = 4;

/// First code point of the surrogate range.
pub const SURROGATE_MIN: Rune = 0xD800;

/// Last code point of the surrogate range.
pub const SURROGATE_MAX: Rune = 0xDFFF;

// Upper bounds of each length class
/// Largest rune encoded in one byte.
pub const RUNE1_MAX: Rune = 0x7F;
/// Largest rune encoded in two bytes.
pub const RUNE2_MAX: Rune = 0x7FF;
/// Largest rune encoded in three bytes.
pub const RUNE3_MAX: Rune = 0xFFFF;

// Leading byte tags
/// Continuation byte tag (`10xxxxxx`).
pub const TAG_CONT: u8 = 0b1000_0000;
/// Two-byte sequence tag (`110xxxxx`).
pub const TAG_TWO: u8 = 0b1100_0000;
/// Three-byte sequence tag (`1110xxxx`).
pub const TAG_THREE: u8 = 0b1110_0000;
/// Four-byte sequence tag (`11110xxx`).
pub const TAG_FOUR: u8 = 0b1111_0000;

// Payload masks
/// Payload bits of a continuation byte.
pub const MASK_CONT: u8 = 0b0011_1111;
/// Payload bits of a two-byte leading byte.
pub const MASK_TWO: u8 = 0b0001_1111;
/// Payload bits of a three-byte leading byte.
pub const MASK_THREE: u8 = 0b0000_1111;
/// Payload bits of a four-byte leading byte.
pub const MASK_FOUR: u8 = 0b0000_0111;

/// Mask selecting the two high-order bits that identify a continuation byte.
pub const CONT_CHECK_MASK: u8 = 0b1100_0000;

/// Payload bits carried by each continuation byte.
pub const CONT_BITS: u32 = 6;
