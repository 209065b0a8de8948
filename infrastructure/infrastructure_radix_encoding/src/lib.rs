//! Infrastructure Layer: Radix Encoding
//!
//! Provides the numeric conversion engine of the codec utility library:
//! radix conversion between big-endian byte sequences and integer
//! magnitudes, and the two's-complement signed integer codec built on it.
//!
//! ## Overview
//!
//! The `infrastructure_radix_encoding` crate is part of the infrastructure
//! layer in the CLEAN architecture layout of this workspace. A byte sequence
//! is read as a sequence of digits, each carrying `base` bits of magnitude,
//! most significant digit first. The signed codec layers sign handling and
//! minimal-width selection on top of that conversion.
//!
//! ## Codecs
//!
//! - **[`radix`](radix/index.html)**: Exact machine-width conversion between
//!   digit sequences and `u64` magnitudes, with checked overflow reporting.
//!
//! - **[`big`](big/index.html)**: The same conversion over malachite
//!   `Integer` values, with no magnitude ceiling and no digit-width cap.
//!
//! - **[`twos_complement`](twos_complement/index.html)**: Signed integer
//!   encode/decode over an explicit decode context that collects non-fatal
//!   warnings about redundant encodings.
//!
//! ## See Also
//!
//! - [`entities_buffers`](../../entities/entities_buffers/index.html): Buffer
//!   primitives used by callers to prepare and render digit sequences

pub mod big;
pub mod radix;
pub mod twos_complement;

pub use radix::{from_base, to_base, RadixError, RadixResult, MAX_DIGIT_WIDTH};
pub use twos_complement::{decode, encode, DecodeContext, LONG_FORMAT_WARNING};

// Re-export the arbitrary precision paths for convenience
pub use big::{from_base_integer, to_base_integer};
pub use twos_complement::{decode_integer, encode_integer};
