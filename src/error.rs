//! Error types for strict codec operations.

use core::fmt;

/// Reason a byte sequence or rune could not be encoded or decoded.
///
/// The lenient API never returns these; it substitutes
/// [`REPLACEMENT_CHAR`](crate::REPLACEMENT_CHAR) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Decode offset is not inside the buffer.
    OffsetOutOfBounds,
    /// Byte cannot start an encoded rune.
    InvalidLeadByte,
    /// Expected a continuation byte (`10xxxxxx`).
    InvalidContinuation,
    /// Buffer ends in the middle of a sequence.
    Truncated,
    /// Sequence uses more bytes than the rune needs.
    Overlong,
    /// Value is in the surrogate range.
    Surrogate,
    /// Value exceeds U+10FFFF.
    OutOfRange,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetOutOfBounds => write!(f, "offset out of bounds"),
            Self::InvalidLeadByte => write!(f, "invalid leading byte"),
            Self::InvalidContinuation => write!(f, "invalid continuation byte"),
            Self::Truncated => write!(f, "truncated sequence"),
            Self::Overlong => write!(f, "overlong encoding"),
            Self::Surrogate => write!(f, "surrogate code point"),
            Self::OutOfRange => write!(f, "code point out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Location and cause of the first malformed sequence in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    /// Length of the well-formed prefix.
    pub valid_up_to: usize,
    /// What went wrong at `valid_up_to`.
    pub kind: CodecError,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.valid_up_to)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Result type for strict codec operations.
pub type Result<T> = core::result::Result<T, CodecError>;
