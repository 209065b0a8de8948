//! Byte Sequence Operations
//!
//! Provides whole-buffer primitives: ordered concatenation, short-circuiting
//! equality, and the nearest-power-of-two helper used when choosing block
//! sizes for growing buffers.

use std::f64::consts::LN_2;

/// Concatenate any number of byte slices into one freshly allocated vector
///
/// The output length is the sum of the input lengths and the inputs are
/// copied in argument order. Empty slices contribute nothing.
///
/// # Arguments
///
/// * `buffers` - Slices to join, in the order they should appear
///
/// # Returns
///
/// A new vector holding every input byte in order
///
/// # Examples
///
/// ```rust
/// use entities_buffers::sequence;
///
/// let joined = sequence::concat(&[&[0x01, 0x02], &[], &[0x03]]);
/// assert_eq!(joined, vec![0x01, 0x02, 0x03]);
/// ```
pub fn concat(buffers: &[&[u8]]) -> Vec<u8> {
    let total_length: usize = buffers.iter().map(|buffer| buffer.len()).sum();
    let mut result = Vec::with_capacity(total_length);
    for buffer in buffers {
        result.extend_from_slice(buffer);
    }
    result
}

/// Compare two byte slices for equality
///
/// Returns `false` immediately on a length mismatch, otherwise compares
/// byte-wise and stops at the first difference.
///
/// # Examples
///
/// ```rust
/// use entities_buffers::sequence;
///
/// assert!(sequence::is_equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!sequence::is_equal(&[1, 2, 3], &[1, 2]));
/// assert!(!sequence::is_equal(&[1, 2, 3], &[1, 2, 4]));
/// ```
pub fn is_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (left, right) in a.iter().zip(b.iter()) {
        if left != right {
            return false;
        }
    }
    true
}

/// Find the power-of-two exponent nearest to `length`
///
/// Computes `log2(length)` and returns the rounded exponent unless the
/// floored exponent already equals it, in which case the floor is returned.
/// The bias matters at exact powers of two computed through the logarithm:
/// a fractional result just below an integer still rounds up to it.
///
/// Meaningful for `length >= 1`; a zero length collapses to exponent 0.
///
/// # Arguments
///
/// * `length` - Buffer length to fit to a power of two
///
/// # Returns
///
/// The exponent of the nearest power of two
///
/// # Examples
///
/// ```rust
/// use entities_buffers::sequence;
///
/// assert_eq!(sequence::nearest_power_of_2(5), 2); // 4 is nearer than 8
/// assert_eq!(sequence::nearest_power_of_2(7), 3); // 8 is nearer than 4
/// assert_eq!(sequence::nearest_power_of_2(8), 3);
/// ```
pub fn nearest_power_of_2(length: usize) -> u32 {
    let exponent = (length as f64).ln() / LN_2;
    let floored = exponent.floor();
    let rounded = exponent.round();
    if floored == rounded {
        floored as u32
    } else {
        rounded as u32
    }
}
