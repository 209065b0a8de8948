//! Decimal Padding and Text/Byte Mapping
//!
//! Provides zero-padded decimal rendering and the 1:1 mapping between
//! character codes and byte values used by the character-level codecs.
//! The mapping is not a text encoding: each character stands for exactly
//! one byte, and character codes above 255 are the caller's responsibility.

/// Render `value` in decimal, left-padded with zeros to `width` characters
///
/// Returns the empty string when `width` is smaller than the number of
/// characters in the plain decimal rendering (a sign counts as a
/// character), so callers can detect a field that does not fit.
///
/// # Examples
///
/// ```rust
/// use entities_buffers::text;
///
/// assert_eq!(text::pad_number(1, 2), "01");
/// assert_eq!(text::pad_number(123, 3), "123");
/// assert_eq!(text::pad_number(123, 2), "");
/// assert_eq!(text::pad_number(-5, 4), "00-5");
/// ```
pub fn pad_number(value: i64, width: usize) -> String {
    let digits = value.to_string();
    if width < digits.len() {
        return String::new();
    }
    let mut padded = "0".repeat(width - digits.len());
    padded.push_str(&digits);
    padded
}

/// Map each character of `input` to one byte holding its character code
///
/// Character codes above 255 are truncated to their low byte; inputs are
/// expected to stay within the 0..=255 range and wider characters must be
/// pre-validated by the caller.
///
/// # Examples
///
/// ```rust
/// use entities_buffers::text;
///
/// assert_eq!(text::string_to_bytes("AB"), vec![0x41, 0x42]);
/// assert_eq!(text::string_to_bytes("\u{01}\u{FF}"), vec![0x01, 0xFF]);
/// ```
pub fn string_to_bytes(input: &str) -> Vec<u8> {
    input.chars().map(|ch| u32::from(ch) as u8).collect()
}

/// Map each byte to the character with that character code
///
/// The inverse of [`string_to_bytes`] for byte values 0..=255.
///
/// # Examples
///
/// ```rust
/// use entities_buffers::text;
///
/// assert_eq!(text::bytes_to_string(&[0x41, 0x42]), "AB");
/// assert_eq!(text::string_to_bytes(&text::bytes_to_string(&[0x00, 0x7F, 0xFF])), vec![0x00, 0x7F, 0xFF]);
/// ```
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}
