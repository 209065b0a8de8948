//! Arbitrary Precision Radix Conversion
//!
//! Provides the same digit-sequence conversion as [`crate::radix`] over
//! malachite `Integer` values. These paths have no magnitude ceiling and no
//! digit-width cap: reading never fails, and writing fails only when the
//! caller reserves fewer digits than the value needs.

use malachite::Integer;

use crate::radix::{RadixError, RadixResult};

/// Read a big-endian digit sequence as an `Integer` magnitude
///
/// A single-byte sequence yields that byte's value directly, whatever the
/// base. Longer sequences accumulate digit by digit, shifting the running
/// value up by `base` bits per step. Total for any input length; an empty
/// sequence yields zero.
///
/// # Arguments
///
/// * `digits` - Digit bytes, most significant first
/// * `base` - Bits of magnitude carried per digit
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::big;
/// use malachite::Integer;
///
/// assert_eq!(big::from_base_integer(&[0x01, 0x01], 7), Integer::from(129));
/// assert_eq!(big::from_base_integer(&[], 8), Integer::from(0));
/// ```
pub fn from_base_integer(digits: &[u8], base: u32) -> Integer {
    if digits.len() == 1 {
        return Integer::from(digits[0]);
    }

    let multiplier = Integer::from(1u64) << u64::from(base);
    let mut result = Integer::from(0);
    for &digit in digits {
        result = result * &multiplier + Integer::from(digit);
    }
    result
}

/// Write a non-negative `Integer` magnitude as a big-endian digit sequence
///
/// Finds the smallest width such that `value < 2^(base*width)`; the search
/// is unbounded, so a fitting width always exists. With `reserved` set the
/// value is right-aligned in that many digits, and
/// [`RadixError::ReservedTooSmall`] is reported when the reservation is
/// smaller than the minimal width. Negative values are rejected with
/// [`RadixError::NegativeValue`]; sign handling belongs to the
/// two's-complement layer.
///
/// # Arguments
///
/// * `value` - Magnitude to convert, `>= 0`
/// * `base` - Bits of magnitude carried per digit, at most 64 meaningful
/// * `reserved` - Exact output width to use, or `None` for the minimal width
///
/// # Returns
///
/// * `Ok(digits)` - The digit bytes, most significant first
/// * `Err(RadixError)` - Negative input or too-small reservation
///
/// # Examples
///
/// ```rust
/// use infrastructure_radix_encoding::big;
/// use malachite::Integer;
///
/// let value = Integer::from(16513);
/// assert_eq!(big::to_base_integer(&value, 7, None), Ok(vec![0x01, 0x01, 0x01]));
/// assert_eq!(
///     big::to_base_integer(&value, 7, Some(4)),
///     Ok(vec![0x00, 0x01, 0x01, 0x01])
/// );
/// ```
pub fn to_base_integer(value: &Integer, base: u32, reserved: Option<usize>) -> RadixResult<Vec<u8>> {
    if *value < Integer::from(0) {
        return Err(RadixError::NegativeValue);
    }
    if base == 0 && *value > Integer::from(0) {
        // Zero-bit digits hold nothing but zero
        return Err(RadixError::ValueTooLarge);
    }

    let width = minimal_width(value, base);
    let result_width = match reserved {
        Some(reserved_width) => {
            if reserved_width < width {
                return Err(RadixError::ReservedTooSmall);
            }
            reserved_width
        }
        None => width,
    };

    Ok(integer_digits(value, base, result_width))
}

/// Smallest digit count holding `value`, found by growing the width bound
/// one digit at a time
pub(crate) fn minimal_width(value: &Integer, base: u32) -> usize {
    let step = u64::from(base);
    let mut width = 1usize;
    let mut bound = Integer::from(1u64) << step;
    while *value >= bound {
        width += 1;
        bound = bound << step;
    }
    width
}

/// Write the digits of `value` into a fixed-width big-endian buffer
///
/// The caller guarantees the width holds the whole value; unused leading
/// digits stay zero.
pub(crate) fn integer_digits(value: &Integer, base: u32, width: usize) -> Vec<u8> {
    let mut result = vec![0u8; width];
    let divisor = Integer::from(1u64) << u64::from(base);
    let mut remaining = value.clone();
    let mut index = width;
    while remaining > Integer::from(0) && index > 0 {
        index -= 1;
        let digit = &remaining % &divisor;
        // The digit is below 2^base, so for meaningful bases it fits in u64
        result[index] = u64::try_from(&digit).unwrap_or(0) as u8;
        remaining = &remaining / &divisor;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_integer_matches_machine_width() {
        let test_values = vec![
            (vec![0x01u8], 7u32),
            (vec![0x01, 0x01], 7),
            (vec![0x01, 0x01, 0x01], 7),
            (vec![0x7F, 0x7F], 8),
            (vec![0xFF, 0xFF, 0xFF, 0xFF], 8),
        ];

        for (digits, base) in test_values {
            let expected = crate::radix::from_base(&digits, base).unwrap();
            assert_eq!(from_base_integer(&digits, base), Integer::from(expected));
        }
    }

    #[test]
    fn test_from_base_integer_beyond_u64() {
        // Nine 0xFF bytes overflow the machine-width path but not this one
        let digits = vec![0xFFu8; 9];
        let value = from_base_integer(&digits, 8);
        assert!(value > Integer::from(u64::MAX));
        assert_eq!(to_base_integer(&value, 8, None), Ok(digits));
    }

    #[test]
    fn test_to_base_integer_minimal_and_reserved() {
        let value = Integer::from(129);
        assert_eq!(to_base_integer(&value, 7, None), Ok(vec![0x01, 0x01]));
        assert_eq!(
            to_base_integer(&value, 7, Some(4)),
            Ok(vec![0x00, 0x00, 0x01, 0x01])
        );
        assert_eq!(
            to_base_integer(&value, 7, Some(1)),
            Err(RadixError::ReservedTooSmall)
        );
    }

    #[test]
    fn test_to_base_integer_zero() {
        assert_eq!(to_base_integer(&Integer::from(0), 8, None), Ok(vec![0x00]));
        assert_eq!(
            to_base_integer(&Integer::from(0), 8, Some(3)),
            Ok(vec![0x00, 0x00, 0x00])
        );
    }

    #[test]
    fn test_to_base_integer_negative_rejected() {
        assert_eq!(
            to_base_integer(&Integer::from(-1), 8, None),
            Err(RadixError::NegativeValue)
        );
    }

    #[test]
    fn test_width_growth_past_machine_cap() {
        // 2^56 is exactly one digit past the machine-width search cap
        let value = Integer::from(1u64) << 56u64;
        assert_eq!(minimal_width(&value, 8), 8);
        let digits = to_base_integer(&value, 8, None).unwrap();
        assert_eq!(digits.len(), 8);
        assert_eq!(digits[0], 0x01);
        assert!(digits[1..].iter().all(|&digit| digit == 0));
    }
}
