//! # utf8-runes
//!
//! A `no_std` compatible UTF-8 codec working on runes (Unicode scalar values
//! stored as `u32`) and raw byte buffers.
//!
//! Decoding is lossy and always makes progress: any malformed sequence
//! decodes as U+FFFD and consumes exactly one byte. Encoding never fails;
//! surrogates and values above U+10FFFF are encoded as U+FFFD. Strict
//! variants report a [`CodecError`] instead.
//!
//! ## Features
//!
//! - `no_std` compatible, no heap allocation in the core API
//! - Lossy and strict decoding with overlong/surrogate/range checks
//! - Restartable `(offset, rune)` iteration and rune counting
//! - Byte-level prefix, suffix and substring search
//! - `alloc`: rune-sequence conversion to and from `Vec`
//! - `simd`: accelerated rune counting
//!
//! ## Example
//!
//! ```
//! use utf8_runes::{decode, encode, iterate, rune_count};
//!
//! let s = "Hello, 世界".as_bytes();
//! assert_eq!(rune_count(s), 9);
//!
//! for (offset, rune) in iterate(s) {
//!     let (decoded, size) = decode(s, offset);
//!     assert_eq!(decoded, rune);
//!     assert_eq!(encode(rune).len(), size);
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod constants;
mod decode;
mod encode;
mod error;
mod hex;
mod iter;
mod search;
mod types;
mod validate;

pub use constants::*;
pub use decode::{decode, decode_strict};
pub use encode::{encode, encode_into, try_encode};
#[cfg(feature = "alloc")]
pub use encode::{append_rune, from_rune_sequence};
pub use error::{CodecError, ValidationError};
pub use hex::HexBytes;
#[cfg(feature = "alloc")]
pub use iter::to_rune_sequence;
pub use iter::{Runes, iterate, rune_count};
pub use search::{contains, contains_rune, find, has_prefix, has_suffix};
pub use types::*;
pub use validate::{as_str, valid, validate};
