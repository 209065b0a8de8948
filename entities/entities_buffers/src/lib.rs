//! Entities Layer: Byte Buffers
//!
//! This crate provides the fundamental byte-buffer operations of the codec
//! utility library: concatenation, comparison, hex rendering, and the 1:1
//! text/byte mapping used by the character-level codecs.
//!
//! ## Overview
//!
//! The `entities_buffers` crate is part of the entities layer in the CLEAN
//! architecture layout of this workspace. As the innermost layer it has no
//! dependencies on other crates in the system; every operation is a pure
//! function over caller-owned slices that returns a freshly allocated result.
//!
//! ## Modules
//!
//! - **[`sequence`](sequence/index.html)**: Whole-buffer operations: ordered
//!   concatenation of any number of slices, short-circuiting byte-wise
//!   equality, and the nearest-power-of-two length helper used when sizing
//!   block buffers.
//!
//! - **[`hex`](hex/index.html)**: Uppercase hexadecimal rendering of byte
//!   slices, with optional per-byte spacing and an explicit range-checked
//!   variant for rendering a sub-view of a larger buffer.
//!
//! - **[`text`](text/index.html)**: Decimal zero-padding for numbers and the
//!   1:1 mapping between character codes and byte values that the
//!   character-level codecs build on.
//!
//! ## Usage
//!
//! ```rust
//! use entities_buffers::{hex, sequence, text};
//!
//! let joined = sequence::concat(&[&[0x01, 0x02], &[0xAB]]);
//! assert_eq!(hex::to_hex(&joined, false), "0102AB");
//! assert!(sequence::is_equal(&joined, &[0x01, 0x02, 0xAB]));
//!
//! let bytes = text::string_to_bytes("AB");
//! assert_eq!(text::bytes_to_string(&bytes), "AB");
//! ```
//!
//! ## Architecture
//!
//! Higher layers (the radix and base64 infrastructure crates and the API
//! facades) depend on this crate for buffer handling; nothing here reaches
//! upward or performs I/O.

pub mod hex;
pub mod sequence;
pub mod text;

// Re-export the full operation surface for convenience
pub use hex::{hex_view, to_hex};
pub use sequence::{concat, is_equal, nearest_power_of_2};
pub use text::{bytes_to_string, pad_number, string_to_bytes};
