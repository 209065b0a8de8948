//! Integer Facades
//!
//! Provides the numeric conversions of the public surface: radix
//! digit sequences and two's-complement byte sequences, each in a
//! machine-width flavor and an arbitrary precision flavor. Delegates to
//! `infrastructure_radix_encoding`.

use malachite::Integer;

use infrastructure_radix_encoding::{big, radix, twos_complement};

pub use infrastructure_radix_encoding::{
    DecodeContext, RadixError, RadixResult, LONG_FORMAT_WARNING, MAX_DIGIT_WIDTH,
};

/// Read a big-endian digit sequence where each byte carries `base` bits
///
/// # Examples
///
/// ```rust
/// use api_facades::from_base;
///
/// assert_eq!(from_base(&[0x01, 0x01], 7), Ok(129));
/// ```
pub fn from_base(digits: &[u8], base: u32) -> RadixResult<u64> {
    radix::from_base(digits, base)
}

/// Write a value as a big-endian digit sequence of `base`-bit bytes
///
/// With `reserved` set, the output takes exactly that width.
///
/// # Examples
///
/// ```rust
/// use api_facades::to_base;
///
/// assert_eq!(to_base(129, 7, None), Ok(vec![0x01, 0x01]));
/// assert_eq!(to_base(16513, 7, Some(4)), Ok(vec![0x00, 0x01, 0x01, 0x01]));
/// ```
pub fn to_base(value: u64, base: u32, reserved: Option<usize>) -> RadixResult<Vec<u8>> {
    radix::to_base(value, base, reserved)
}

/// Read a digit sequence of any length into an arbitrary precision value
pub fn from_base_integer(digits: &[u8], base: u32) -> Integer {
    big::from_base_integer(digits, base)
}

/// Write an arbitrary precision value as a digit sequence of any width
pub fn to_base_integer(value: &Integer, base: u32, reserved: Option<usize>) -> RadixResult<Vec<u8>> {
    big::to_base_integer(value, base, reserved)
}

/// Decode two's-complement bytes into an `i64`, recording warnings in
/// the context
pub fn decode_twos_complement(ctx: &mut DecodeContext<'_>) -> RadixResult<i64> {
    twos_complement::decode(ctx)
}

/// Encode an `i64` as minimal two's-complement bytes
pub fn encode_twos_complement(value: i64) -> RadixResult<Vec<u8>> {
    twos_complement::encode(value)
}

/// Decode two's-complement bytes of any length into an `Integer`
pub fn decode_twos_complement_integer(ctx: &mut DecodeContext<'_>) -> Integer {
    twos_complement::decode_integer(ctx)
}

/// Encode an `Integer` of any magnitude as two's-complement bytes
pub fn encode_twos_complement_integer(value: &Integer) -> Vec<u8> {
    twos_complement::encode_integer(value)
}
