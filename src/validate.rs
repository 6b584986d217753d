//! UTF-8 validation utilities.

use crate::decode::decode_strict;
use crate::error::{CodecError, ValidationError};

/// Validate and convert bytes to a UTF-8 string.
///
/// Uses simdutf8 for fast validation when available.
#[inline]
pub fn as_str(bytes: &[u8]) -> Option<&str> {
    #[cfg(not(miri))]
    {
        simdutf8::basic::from_utf8(bytes).ok()
    }

    #[cfg(miri)]
    {
        // Fall back to core validation under miri
        core::str::from_utf8(bytes).ok()
    }
}

/// Returns true if `bytes` is entirely well-formed UTF-8.
#[inline]
pub fn valid(bytes: &[u8]) -> bool {
    as_str(bytes).is_some()
}

/// Check `bytes` for well-formed UTF-8.
///
/// # Errors
/// Returns the offset of the first malformed sequence and the reason the
/// decoder rejects it.
pub fn validate(bytes: &[u8]) -> Result<(), ValidationError> {
    let Some(valid_up_to) = first_invalid(bytes) else {
        return Ok(());
    };

    let kind = match decode_strict(bytes, valid_up_to) {
        Err(kind) => kind,
        // Validators agree on well-formedness; keep a sane kind regardless.
        Ok(_) => CodecError::InvalidLeadByte,
    };

    Err(ValidationError { valid_up_to, kind })
}

/// Offset of the first malformed sequence, if any.
#[inline]
fn first_invalid(bytes: &[u8]) -> Option<usize> {
    #[cfg(not(miri))]
    {
        simdutf8::compat::from_utf8(bytes)
            .err()
            .map(|e| e.valid_up_to())
    }

    #[cfg(miri)]
    {
        core::str::from_utf8(bytes).err().map(|e| e.valid_up_to())
    }
}
