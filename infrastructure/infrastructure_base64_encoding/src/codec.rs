//! Base64 Character Codec
//!
//! Provides base64 encode/decode over byte-per-character strings: each
//! input character contributes its low byte and each decoded byte comes
//! back as the character with that code. Encoding slices 3-character
//! groups into 4 six-bit symbols; a short trailing group forces its
//! missing symbols to the padding index, which can be rendered as the
//! padding character or skipped. Decoding never fails: characters outside
//! the alphabet read as the padding index, and a truncated trailing group
//! reads missing symbols as index zero, which pads the decoded output
//! with zero-value characters.

use crate::alphabet::{Base64Alphabet, PAD_INDEX};

/// Encode a byte-per-character string as base64
///
/// Each character contributes its low byte to the bit stream. With
/// `skip_leading_zeros`, a leading run of zero-value characters is
/// stripped before encoding unless the whole input is zero-valued, in
/// which case nothing is stripped. With `skip_padding`, trailing symbols
/// that would render as the padding character are omitted.
///
/// # Arguments
///
/// * `input` - Text whose character codes carry the bytes to encode
/// * `alphabet` - Symbol table to render with
/// * `skip_padding` - Omit trailing padding symbols instead of rendering them
/// * `skip_leading_zeros` - Strip a leading zero-value run before encoding
///
/// # Returns
///
/// * The base64 rendering of the input
///
/// # Examples
///
/// ```rust
/// use infrastructure_base64_encoding::{to_base64, Base64Alphabet};
///
/// assert_eq!(
///     to_base64("\u{1}\u{2}\u{3}", Base64Alphabet::Standard, false, false),
///     "AQID"
/// );
/// ```
pub fn to_base64(
    input: &str,
    alphabet: Base64Alphabet,
    skip_padding: bool,
    skip_leading_zeros: bool,
) -> String {
    // Characters contribute their low byte, matching the string/byte mapping
    let mut codes: Vec<u32> = input.chars().map(|ch| u32::from(ch) & 0xFF).collect();

    if skip_leading_zeros {
        let mut cut = 0;
        for (index, &code) in codes.iter().enumerate() {
            if code != 0 {
                cut = index;
                break;
            }
        }
        // When every code is zero the cut point never moves and the
        // input is kept whole
        codes.drain(..cut);
    }

    let mut output = String::new();
    let mut index = 0;
    while index < codes.len() {
        let mut pad_last_two = false;
        let mut pad_last_one = false;

        let chr1 = codes[index];
        index += 1;
        if index >= codes.len() {
            pad_last_two = true;
        }
        let chr2 = codes.get(index).copied().unwrap_or(0);
        index += 1;
        if index >= codes.len() {
            pad_last_one = true;
        }
        let chr3 = codes.get(index).copied().unwrap_or(0);
        index += 1;

        let enc1 = chr1 >> 2;
        let enc2 = ((chr1 & 0x03) << 4) | (chr2 >> 4);
        let mut enc3 = ((chr2 & 0x0F) << 2) | (chr3 >> 6);
        let mut enc4 = chr3 & 0x3F;
        if pad_last_two {
            enc3 = PAD_INDEX;
            enc4 = PAD_INDEX;
        } else if pad_last_one {
            enc4 = PAD_INDEX;
        }

        // Symbol indices stay within the table, so each lookup appends
        // exactly one character
        if skip_padding && enc3 == PAD_INDEX {
            output.extend(alphabet.symbol(enc1));
            output.extend(alphabet.symbol(enc2));
        } else if skip_padding && enc4 == PAD_INDEX {
            output.extend(alphabet.symbol(enc1));
            output.extend(alphabet.symbol(enc2));
            output.extend(alphabet.symbol(enc3));
        } else {
            output.extend(alphabet.symbol(enc1));
            output.extend(alphabet.symbol(enc2));
            output.extend(alphabet.symbol(enc3));
            output.extend(alphabet.symbol(enc4));
        }
    }

    output
}

/// Read the symbol index at the cursor, advancing past it
///
/// A cursor already past the end reads as index zero without advancing,
/// so a truncated trailing group decodes as if completed with the first
/// data symbol rather than with padding.
fn next_index(symbols: &[char], position: &mut usize, alphabet: Base64Alphabet) -> u32 {
    if *position >= symbols.len() {
        return 0;
    }
    let index = alphabet.index_of(symbols[*position]);
    *position += 1;
    index
}

/// Data bits carried by a symbol index, zero for the padding index
fn data_bits(index: u32) -> u32 {
    if index == PAD_INDEX {
        0
    } else {
        index
    }
}

/// Decode base64 text into a byte-per-character string
///
/// Never fails. Characters outside the alphabet read as the padding
/// index: they contribute zero bits, and in the two trailing positions of
/// a group they suppress that group's optional output characters. A
/// group cut off by the end of input instead reads its missing symbols as
/// index zero, so the decoded output gains trailing zero-value
/// characters. With `trim_trailing_zeros`, a trailing run of zero-value
/// characters is removed afterwards; an all-zero decode becomes the
/// empty string.
///
/// # Arguments
///
/// * `input` - Base64 text
/// * `alphabet` - Symbol table to resolve against
/// * `trim_trailing_zeros` - Drop trailing zero-value characters from the result
///
/// # Returns
///
/// * The decoded byte-per-character string
///
/// # Examples
///
/// ```rust
/// use infrastructure_base64_encoding::{from_base64, Base64Alphabet};
///
/// assert_eq!(
///     from_base64("AQID", Base64Alphabet::Standard, false),
///     "\u{1}\u{2}\u{3}"
/// );
/// ```
pub fn from_base64(input: &str, alphabet: Base64Alphabet, trim_trailing_zeros: bool) -> String {
    let symbols: Vec<char> = input.chars().collect();
    let mut decoded: Vec<char> = Vec::new();
    let mut position = 0;

    while position < symbols.len() {
        let chr1 = next_index(&symbols, &mut position, alphabet);
        let chr2 = next_index(&symbols, &mut position, alphabet);
        let chr3 = next_index(&symbols, &mut position, alphabet);
        let chr4 = next_index(&symbols, &mut position, alphabet);

        let bin1 = (data_bits(chr1) << 2) | (data_bits(chr2) >> 4);
        let bin2 = ((data_bits(chr2) & 0x0F) << 4) | (data_bits(chr3) >> 2);
        let bin3 = ((data_bits(chr3) & 0x03) << 6) | data_bits(chr4);

        decoded.push(char::from(bin1 as u8));
        if chr3 != PAD_INDEX {
            decoded.push(char::from(bin2 as u8));
        }
        if chr4 != PAD_INDEX {
            decoded.push(char::from(bin3 as u8));
        }
    }

    if trim_trailing_zeros {
        match decoded.iter().rposition(|&ch| ch != '\0') {
            Some(last_nonzero) => decoded.truncate(last_nonzero + 1),
            None => decoded.clear(),
        }
    }

    decoded.into_iter().collect()
}
