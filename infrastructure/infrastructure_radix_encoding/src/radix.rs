//! Radix Conversion
//!
//! Provides exact conversion between big-endian digit sequences and `u64`
//! magnitudes. Each digit byte carries `base` bits of magnitude, so a
//! sequence `d[0..N]` denotes `sum(d[i] * 2^(base*(N-1-i)))`.
//!
//! ## Overview
//!
//! All arithmetic is checked: a magnitude that cannot be represented
//! exactly is reported as an error instead of being silently rounded.
//! Encoding searches digit widths 1 through [`MAX_DIGIT_WIDTH`] and fails
//! when none fits, or when the caller reserves fewer digits than the value
//! needs. Those failure conditions are the contract dependent codecs rely
//! on; see [`crate::twos_complement`] for the signed layer above this one.

use std::fmt;

/// Largest digit width tried by [`to_base`] when no width is reserved
pub const MAX_DIGIT_WIDTH: usize = 7;

/// Radix conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadixError {
    /// Accumulated magnitude does not fit the exact `u64` range
    MagnitudeOverflow,
    /// No supported digit width can hold the value
    ValueTooLarge,
    /// Caller reserved fewer digits than the value needs
    ReservedTooSmall,
    /// Negative value passed to an unsigned conversion
    NegativeValue,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::MagnitudeOverflow => {
                write!(f, "magnitude exceeds the exact integer range")
            }
            RadixError::ValueTooLarge => {
                write!(f, "value too large for the supported digit widths")
            }
            RadixError::ReservedTooSmall => {
                write!(f, "reserved width is smaller than the minimal digit width")
            }
            RadixError::NegativeValue => {
                write!(f, "negative value passed to an unsigned conversion")
            }
        }
    }
}

impl std::error::Error for RadixError {}

/// Result type for radix conversion operations
pub type RadixResult<T> = Result<T, RadixError>;

/// Read a big-endian digit sequence as a `u64` magnitude
///
/// A single-byte sequence yields that byte's value directly, whatever the
/// base. Longer sequences accumulate digit by digit, each step shifting the
/// running value up by `base` bits; the accumulation is exact for any
/// magnitude below 2^64 and reports [`RadixError::MagnitudeOverflow`]
/// beyond that. An empty sequence yields zero.
///
/// # Arguments
///
/// * `digits` - Digit bytes, most significant first
/// * `base` - Bits of magnitude carried per digit
///
/// # Returns
///
/// * `Ok(magnitude)` - The accumulated value
/// * `Err(RadixError::MagnitudeOverflow)` - Magnitude does not fit in `u64`
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::radix;
///
/// assert_eq!(radix::from_base(&[0x01], 7), Ok(1));
/// assert_eq!(radix::from_base(&[0x01, 0x01], 7), Ok(129));
/// assert_eq!(radix::from_base(&[0x01, 0x01, 0x01], 7), Ok(16513));
/// ```
pub fn from_base(digits: &[u8], base: u32) -> RadixResult<u64> {
    if digits.len() == 1 {
        return Ok(u64::from(digits[0]));
    }

    let multiplier = 1u64
        .checked_shl(base)
        .ok_or(RadixError::MagnitudeOverflow)?;

    let mut result: u64 = 0;
    for &digit in digits {
        result = result
            .checked_mul(multiplier)
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or(RadixError::MagnitudeOverflow)?;
    }
    Ok(result)
}

/// Write a `u64` magnitude as a big-endian digit sequence
///
/// Finds the smallest digit width in `1..=MAX_DIGIT_WIDTH` such that
/// `value < 2^(base*width)` and fails with [`RadixError::ValueTooLarge`]
/// when none fits. With `reserved` set, that width is used instead:
/// the value is right-aligned under leading zero digits, and
/// [`RadixError::ReservedTooSmall`] is reported when the reservation is
/// smaller than the minimal width. A reservation larger than
/// `MAX_DIGIT_WIDTH` is honored as given.
///
/// # Arguments
///
/// * `value` - Magnitude to convert
/// * `base` - Bits of magnitude carried per digit
/// * `reserved` - Exact output width to use, or `None` for the minimal width
///
/// # Returns
///
/// * `Ok(digits)` - The digit bytes, most significant first
/// * `Err(RadixError)` - No width fits or the reservation is too small
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::radix::{self, RadixError};
///
/// assert_eq!(radix::to_base(129, 7, None), Ok(vec![0x01, 0x01]));
/// assert_eq!(radix::to_base(16513, 7, Some(4)), Ok(vec![0x00, 0x01, 0x01, 0x01]));
/// assert_eq!(radix::to_base(16513, 7, Some(0)), Err(RadixError::ReservedTooSmall));
/// assert_eq!(radix::to_base(16777218, 3, None), Err(RadixError::ValueTooLarge));
/// ```
pub fn to_base(value: u64, base: u32, reserved: Option<usize>) -> RadixResult<Vec<u8>> {
    // Width search against 2^(base*width), widened so large bases saturate
    // instead of wrapping
    let step = 1u128.checked_shl(base).unwrap_or(u128::MAX);
    let mut width = None;
    let mut bound = step;
    for candidate in 1..=MAX_DIGIT_WIDTH {
        if u128::from(value) < bound {
            width = Some(candidate);
            break;
        }
        bound = bound.saturating_mul(step);
    }
    let width = width.ok_or(RadixError::ValueTooLarge)?;

    let result_width = match reserved {
        Some(reserved_width) => {
            if reserved_width < width {
                return Err(RadixError::ReservedTooSmall);
            }
            reserved_width
        }
        None => width,
    };

    Ok(digits_of(value, base, result_width))
}

/// Write the low digits of `value` into a fixed-width big-endian buffer
///
/// The caller guarantees the width holds the whole value; unused leading
/// digits stay zero.
fn digits_of(value: u64, base: u32, width: usize) -> Vec<u8> {
    let mut result = vec![0u8; width];
    if base >= 64 {
        // One digit swallows the whole value; only its low byte is
        // representable in the output
        if let Some(last) = result.last_mut() {
            *last = value as u8;
        }
        return result;
    }
    let mask = (1u64 << base) - 1;
    let mut remaining = value;
    let mut index = width;
    while remaining > 0 && index > 0 {
        index -= 1;
        result[index] = (remaining & mask) as u8;
        remaining >>= base;
    }
    result
}
