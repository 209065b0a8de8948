//! Two's Complement Codec
//!
//! Provides signed integer encode/decode over big-endian byte sequences.
//! The sign lives in the top bit of the first byte: decoding splits a
//! sequence into a sign contribution (that bit alone, at its place value)
//! and a magnitude contribution (everything with that bit cleared), and the
//! value is their difference. Encoding picks the smallest byte width whose
//! sign bit can be spared, adding one zero lead byte when a non-negative
//! value's top bit would otherwise read as a sign.
//!
//! Decoding works through an explicit [`DecodeContext`] that carries the
//! input bytes together with a list of non-fatal warnings; a redundant
//! leading byte is reported there rather than treated as an error.

use malachite::Integer;

use crate::big;
use crate::radix;
use crate::radix::{RadixError, RadixResult, MAX_DIGIT_WIDTH};

/// Warning recorded when an encoding spends a whole byte on sign padding
pub const LONG_FORMAT_WARNING: &str = "Needlessly long format";

/// Decode input plus the warnings accumulated while reading it
///
/// The bytes are borrowed from the caller; warnings are owned and survive
/// the call, so one context can collect diagnostics across several decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeContext<'a> {
    /// Two's-complement bytes, most significant first
    pub bytes: &'a [u8],
    /// Non-fatal diagnostics, appended to in decode order
    pub warnings: Vec<String>,
}

impl<'a> DecodeContext<'a> {
    /// Create a context with an empty warning list
    pub fn new(bytes: &'a [u8]) -> Self {
        DecodeContext {
            bytes,
            warnings: Vec::new(),
        }
    }
}

/// Record the redundant-leading-byte warning when the first byte carries
/// no information: an all-ones byte before a set sign bit, or an all-zeros
/// byte before a clear one
fn note_redundant_leading_byte(ctx: &mut DecodeContext<'_>) {
    let bytes = ctx.bytes;
    if bytes.len() < 2 {
        return;
    }
    let redundant_ones = bytes[0] == 0xFF && bytes[1] & 0x80 != 0;
    let redundant_zeros = bytes[0] == 0x00 && bytes[1] & 0x80 == 0;
    if redundant_ones || redundant_zeros {
        ctx.warnings.push(LONG_FORMAT_WARNING.to_string());
    }
}

/// Decode a two's-complement byte sequence into an `i64`
///
/// Empty input decodes to zero. Inputs up to eight bytes always succeed;
/// longer inputs succeed as long as the sign and magnitude contributions
/// still fit the exact `u64` range and their difference fits `i64`, and
/// report [`RadixError::MagnitudeOverflow`] otherwise. A redundant leading
/// byte appends [`LONG_FORMAT_WARNING`] to the context without affecting
/// the result.
///
/// # Arguments
///
/// * `ctx` - Decode context holding the input bytes and the warning list
///
/// # Returns
///
/// * `Ok(value)` - The decoded signed value
/// * `Err(RadixError::MagnitudeOverflow)` - Input too long for exact math
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::twos_complement::{self, DecodeContext};
///
/// let mut ctx = DecodeContext::new(&[0x80, 0x81]);
/// assert_eq!(twos_complement::decode(&mut ctx), Ok(-32639));
/// assert!(ctx.warnings.is_empty());
/// ```
pub fn decode(ctx: &mut DecodeContext<'_>) -> RadixResult<i64> {
    note_redundant_leading_byte(ctx);

    let bytes = ctx.bytes;
    if bytes.is_empty() {
        return Ok(0);
    }

    let mut magnitude_digits = bytes.to_vec();
    magnitude_digits[0] &= 0x7F;
    let mut sign_digits = vec![0u8; bytes.len()];
    sign_digits[0] = bytes[0] & 0x80;

    let magnitude = radix::from_base(&magnitude_digits, 8)?;
    let sign = radix::from_base(&sign_digits, 8)?;

    // Both contributions fit u64; their difference stays within one sign
    // bit of it, so the i128 subtraction is exact
    let difference = i128::from(magnitude) - i128::from(sign);
    i64::try_from(difference).map_err(|_| RadixError::MagnitudeOverflow)
}

/// Encode an `i64` as a minimal two's-complement byte sequence
///
/// Tries widths 1 through [`MAX_DIGIT_WIDTH`]. A non-negative value takes
/// its minimal radix encoding, with one zero byte prepended when the top
/// bit would read as a sign. A negative value becomes
/// `2^(8*width-1) - |value|` with the sign bit set on the first byte.
/// Magnitudes beyond 2^55 exceed every candidate width and report
/// [`RadixError::ValueTooLarge`].
///
/// # Arguments
///
/// * `value` - Signed value to encode
///
/// # Returns
///
/// * `Ok(bytes)` - The encoded sequence, most significant first
/// * `Err(RadixError::ValueTooLarge)` - Magnitude beyond the width search
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::twos_complement;
///
/// assert_eq!(twos_complement::encode(-128), Ok(vec![0x80]));
/// assert_eq!(twos_complement::encode(128), Ok(vec![0x00, 0x80]));
/// assert_eq!(twos_complement::encode(256), Ok(vec![0x01, 0x00]));
/// ```
pub fn encode(value: i64) -> RadixResult<Vec<u8>> {
    let magnitude = value.unsigned_abs();
    let mut bound: u64 = 0x80;
    for width in 1..=MAX_DIGIT_WIDTH {
        if magnitude <= bound {
            if value < 0 {
                let complement = bound - magnitude;
                let mut result = radix::to_base(complement, 8, Some(width))?;
                result[0] |= 0x80;
                return Ok(result);
            }
            let mut result = radix::to_base(magnitude, 8, Some(width))?;
            if result[0] & 0x80 != 0 {
                result.insert(0, 0x00);
            }
            return Ok(result);
        }
        bound <<= 8;
    }
    Err(RadixError::ValueTooLarge)
}

/// Decode a two's-complement byte sequence of any length into an `Integer`
///
/// The arbitrary precision counterpart of [`decode`]: total for every
/// input, with the same warning behavior.
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::twos_complement::{self, DecodeContext};
/// use malachite::Integer;
///
/// let mut ctx = DecodeContext::new(&[0xFF; 9]);
/// let value = twos_complement::decode_integer(&mut ctx);
/// assert_eq!(value, Integer::from(-1));
/// ```
pub fn decode_integer(ctx: &mut DecodeContext<'_>) -> Integer {
    note_redundant_leading_byte(ctx);

    let bytes = ctx.bytes;
    if bytes.is_empty() {
        return Integer::from(0);
    }

    let mut magnitude_digits = bytes.to_vec();
    magnitude_digits[0] &= 0x7F;
    let mut sign_digits = vec![0u8; bytes.len()];
    sign_digits[0] = bytes[0] & 0x80;

    big::from_base_integer(&magnitude_digits, 8) - big::from_base_integer(&sign_digits, 8)
}

/// Encode an `Integer` of any magnitude as two's-complement bytes
///
/// The arbitrary precision counterpart of [`encode`]: the width search is
/// unbounded, so a fitting width always exists and the function is total.
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::twos_complement;
/// use malachite::Integer;
///
/// assert_eq!(twos_complement::encode_integer(&Integer::from(-128)), vec![0x80]);
/// assert_eq!(
///     twos_complement::encode_integer(&Integer::from(128)),
///     vec![0x00, 0x80]
/// );
/// ```
pub fn encode_integer(value: &Integer) -> Vec<u8> {
    let is_negative = *value < Integer::from(0);
    let magnitude = if is_negative {
        -value.clone()
    } else {
        value.clone()
    };

    let mut width = 1usize;
    let mut bound = Integer::from(0x80u64);
    while magnitude > bound {
        width += 1;
        bound = bound << 8u64;
    }

    if is_negative {
        let complement = bound - magnitude;
        let mut result = big::integer_digits(&complement, 8, width);
        result[0] |= 0x80;
        return result;
    }

    let mut result = big::integer_digits(&magnitude, 8, width);
    if result[0] & 0x80 != 0 {
        result.insert(0, 0x00);
    }
    result
}
