//! Base64 Encoding Infrastructure
//!
//! Character-level base64 and base64url codec over byte-per-character
//! strings.
//!
//! ## Overview
//!
//! This crate carries the textual leg of the codec stack: rendering byte
//! values as base64 symbols and reading them back. It deliberately trades
//! strictness for tolerance, so decoding accepts unpadded, over-padded,
//! and even malformed input, resolving anything unknown to the padding
//! index instead of failing.
//!
//! ## Modules
//!
//! - `alphabet`: the two 65-symbol tables and index lookup in both
//!   directions
//! - `codec`: group-wise encode/decode with the padding, leading-zero,
//!   and trailing-zero options
//!
//! ## Usage
//!
//! ```rust
//! use infrastructure_base64_encoding::{from_base64, to_base64, Base64Alphabet};
//!
//! let encoded = to_base64("\u{1}\u{2}\u{3}", Base64Alphabet::UrlSafe, true, false);
//! assert_eq!(encoded, "AQID");
//! assert_eq!(
//!     from_base64(&encoded, Base64Alphabet::UrlSafe, false),
//!     "\u{1}\u{2}\u{3}"
//! );
//! ```
//!
//! ## See Also
//!
//! - `entities_buffers`: the string/byte mapping this codec's
//!   byte-per-character convention lines up with

pub mod alphabet;
pub mod codec;

pub use alphabet::{Base64Alphabet, PAD_INDEX};
pub use codec::{from_base64, to_base64};
