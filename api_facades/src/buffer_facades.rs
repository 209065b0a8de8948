//! Buffer Facades
//!
//! Provides the byte buffer helpers of the public surface: hex rendering,
//! concatenation, comparison, decimal padding, and the byte-per-character
//! string mapping. Each facade delegates to `entities_buffers`.

use entities_buffers::{hex, sequence, text};

/// Render bytes as uppercase hex
///
/// # Examples
///
/// ```rust
/// use api_facades::to_hex;
///
/// assert_eq!(to_hex(&[0x01, 0xAB], false), "01AB");
/// assert_eq!(to_hex(&[0x01, 0xAB], true), "01 AB");
/// ```
pub fn to_hex(bytes: &[u8], insert_space: bool) -> String {
    hex::to_hex(bytes, insert_space)
}

/// Render a window of a buffer as uppercase hex
///
/// Returns `None` when the window does not fit inside the buffer.
pub fn hex_view(
    buffer: &[u8],
    offset: usize,
    length: Option<usize>,
    insert_space: bool,
) -> Option<String> {
    hex::hex_view(buffer, offset, length, insert_space)
}

/// Join buffers into one freshly allocated buffer, in argument order
pub fn concat(buffers: &[&[u8]]) -> Vec<u8> {
    sequence::concat(buffers)
}

/// Compare two buffers for identical length and content
pub fn equal_buffers(a: &[u8], b: &[u8]) -> bool {
    sequence::is_equal(a, b)
}

/// Render a number zero-padded to a fixed width
///
/// Returns the empty string when the width is smaller than the number's
/// own digit string.
///
/// # Examples
///
/// ```rust
/// use api_facades::pad_number;
///
/// assert_eq!(pad_number(1, 2), "01");
/// assert_eq!(pad_number(1, 1), "1");
/// assert_eq!(pad_number(1, 0), "");
/// ```
pub fn pad_number(value: i64, width: usize) -> String {
    text::pad_number(value, width)
}

/// Bit count of the power of two nearest to a block length
pub fn nearest_power_of_2(length: usize) -> u32 {
    sequence::nearest_power_of_2(length)
}

/// Map a string to bytes, one character code to one byte
pub fn string_to_bytes(input: &str) -> Vec<u8> {
    text::string_to_bytes(input)
}

/// Map bytes to a string, one byte to one character code
pub fn bytes_to_string(bytes: &[u8]) -> String {
    text::bytes_to_string(bytes)
}
