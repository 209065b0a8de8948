//! Hexadecimal Rendering
//!
//! Provides uppercase hex rendering of byte slices, with optional per-byte
//! spacing and a range-checked variant for rendering part of a buffer.

/// Render a byte slice as uppercase hexadecimal
///
/// Each byte becomes two zero-padded uppercase hex digits. With
/// `insert_space` set, a single space separates consecutive bytes; the
/// result never carries a trailing space.
///
/// # Arguments
///
/// * `bytes` - Bytes to render
/// * `insert_space` - Whether to separate bytes with a space
///
/// # Returns
///
/// The hex string, empty for an empty slice
///
/// # Examples
///
/// ```rust
/// use entities_buffers::hex;
///
/// assert_eq!(hex::to_hex(&[0x01, 0xAB, 0xFF], false), "01ABFF");
/// assert_eq!(hex::to_hex(&[0x01, 0xAB, 0xFF], true), "01 AB FF");
/// assert_eq!(hex::to_hex(&[], false), "");
/// ```
pub fn to_hex(bytes: &[u8], insert_space: bool) -> String {
    let mut result = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        result.push_str(&format!("{:02X}", byte));
        if insert_space {
            result.push(' ');
        }
    }
    if insert_space {
        // Drop the space written after the final byte
        result.pop();
    }
    result
}

/// Render `length` bytes of `buffer` starting at `offset` as hex
///
/// A `length` of `None` means everything from `offset` to the end of the
/// buffer. Returns `None` when the requested range does not lie within the
/// buffer, so callers see an inconsistent view instead of a truncated one.
///
/// # Arguments
///
/// * `buffer` - The underlying buffer
/// * `offset` - First byte of the view
/// * `length` - View length, or `None` for the remainder of the buffer
/// * `insert_space` - Whether to separate bytes with a space
///
/// # Examples
///
/// ```rust
/// use entities_buffers::hex;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// assert_eq!(hex::hex_view(&data, 1, Some(2), false), Some("0203".to_string()));
/// assert_eq!(hex::hex_view(&data, 1, None, false), Some("020304".to_string()));
/// assert_eq!(hex::hex_view(&data, 3, Some(2), false), None);
/// ```
pub fn hex_view(
    buffer: &[u8],
    offset: usize,
    length: Option<usize>,
    insert_space: bool,
) -> Option<String> {
    let remaining = buffer.len().checked_sub(offset)?;
    let length = length.unwrap_or(remaining);
    if length > remaining {
        return None;
    }
    Some(to_hex(&buffer[offset..offset + length], insert_space))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_plain() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
        assert_eq!(to_hex(&data, false), "0102030405060708090A");
    }

    #[test]
    fn test_to_hex_uppercase_and_padding() {
        assert_eq!(to_hex(&[0x00], false), "00");
        assert_eq!(to_hex(&[0x0F], false), "0F");
        assert_eq!(to_hex(&[0xAB, 0xCD, 0xEF], false), "ABCDEF");
    }

    #[test]
    fn test_to_hex_with_spaces() {
        assert_eq!(to_hex(&[0x01], true), "01");
        assert_eq!(to_hex(&[0x01, 0xAB], true), "01 AB");
        assert_eq!(to_hex(&[], true), "");
    }

    #[test]
    fn test_hex_view_offsets() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
        assert_eq!(
            hex_view(&data, 1, None, false),
            Some("02030405060708090A".to_string())
        );
        assert_eq!(hex_view(&data, 1, Some(3), false), Some("020304".to_string()));
        assert_eq!(hex_view(&data, 10, None, false), Some(String::new()));
    }

    #[test]
    fn test_hex_view_out_of_range() {
        let data = [0x01, 0x02];
        assert_eq!(hex_view(&data, 3, None, false), None);
        assert_eq!(hex_view(&data, 0, Some(3), false), None);
        assert_eq!(hex_view(&data, 2, Some(1), false), None);
    }
}
