//! Base64 Facades
//!
//! Provides the textual base64 surface with the alphabet chosen by a
//! flag, the way callers pass it. Delegates to
//! `infrastructure_base64_encoding`.

use infrastructure_base64_encoding::{codec, Base64Alphabet};

fn alphabet_for(use_url_alphabet: bool) -> Base64Alphabet {
    if use_url_alphabet {
        Base64Alphabet::UrlSafe
    } else {
        Base64Alphabet::Standard
    }
}

/// Encode a byte-per-character string as base64
///
/// # Arguments
///
/// * `input` - Text whose character codes carry the bytes to encode
/// * `use_url_alphabet` - Use the URL-safe symbols instead of the standard ones
/// * `skip_padding` - Omit trailing padding symbols
/// * `skip_leading_zeros` - Strip a leading zero-value run before encoding
///
/// # Examples
///
/// ```rust
/// use api_facades::to_base64;
///
/// assert_eq!(to_base64("\u{1}\u{2}\u{3}", false, false, false), "AQID");
/// ```
pub fn to_base64(
    input: &str,
    use_url_alphabet: bool,
    skip_padding: bool,
    skip_leading_zeros: bool,
) -> String {
    codec::to_base64(
        input,
        alphabet_for(use_url_alphabet),
        skip_padding,
        skip_leading_zeros,
    )
}

/// Decode base64 text into a byte-per-character string
///
/// Never fails; malformed symbols read as padding.
///
/// # Arguments
///
/// * `input` - Base64 text
/// * `use_url_alphabet` - Resolve against the URL-safe symbols
/// * `trim_trailing_zeros` - Drop trailing zero-value characters from the result
pub fn from_base64(input: &str, use_url_alphabet: bool, trim_trailing_zeros: bool) -> String {
    codec::from_base64(input, alphabet_for(use_url_alphabet), trim_trailing_zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_flag_selects_symbols() {
        let input = "\u{fb}\u{ff}";
        assert_eq!(to_base64(input, false, false, false), "+/8=");
        assert_eq!(to_base64(input, true, false, false), "-_8=");
    }

    #[test]
    fn test_facades_delegate() {
        assert_eq!(from_base64("AQID", false, false), "\u{1}\u{2}\u{3}");
        assert_eq!(from_base64("AAAA", false, true), "");
    }
}
