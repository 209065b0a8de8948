//! API Facades Layer
//!
//! Provides the flat function surface external callers import: buffer
//! helpers, radix and two's-complement conversion, and base64 text
//! encoding, all as free functions with plain argument types.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod base64_facades;
pub mod buffer_facades;
pub mod integer_facades;

// Re-export the whole surface flat
pub use base64_facades::*;
pub use buffer_facades::*;
pub use integer_facades::*;
