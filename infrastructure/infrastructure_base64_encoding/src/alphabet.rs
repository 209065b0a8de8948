//! Base64 Symbol Tables
//!
//! Provides the standard and URL-safe base64 alphabets together with
//! symbol/index lookup in both directions. Each alphabet holds 64 data
//! symbols plus the padding symbol at index [`PAD_INDEX`]; reverse lookup
//! resolves any character outside the data symbols, the padding symbol
//! included, to [`PAD_INDEX`].

/// Index of the padding symbol; reverse lookup of unknown characters
/// resolves here as well
pub const PAD_INDEX: u32 = 64;

/// Standard alphabet per RFC 4648 section 4, padding symbol last
pub const STANDARD_SYMBOLS: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// URL-safe alphabet per RFC 4648 section 5, padding symbol last
pub const URL_SAFE_SYMBOLS: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_=";

lazy_static::lazy_static! {
    static ref STANDARD_INDICES: [u32; 256] = build_index_table(STANDARD_SYMBOLS);
    static ref URL_SAFE_INDICES: [u32; 256] = build_index_table(URL_SAFE_SYMBOLS);
}

/// Build the reverse lookup table for one alphabet
///
/// Every character code starts at [`PAD_INDEX`]; only the 64 data symbols
/// map back to their own index, so the padding symbol stays at
/// [`PAD_INDEX`] like any other non-data character.
fn build_index_table(symbols: &[u8; 65]) -> [u32; 256] {
    let mut table = [PAD_INDEX; 256];
    for (index, &symbol) in symbols.iter().take(64).enumerate() {
        table[symbol as usize] = index as u32;
    }
    table
}

/// Symbol table selector for the base64 codec
///
/// # Examples
///
/// ```rust
/// use infrastructure_base64_encoding::alphabet::Base64Alphabet;
///
/// assert_eq!(Base64Alphabet::Standard.symbol(63), Some('/'));
/// assert_eq!(Base64Alphabet::UrlSafe.symbol(63), Some('_'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Alphabet {
    /// RFC 4648 section 4 symbols, `+` and `/` for indices 62 and 63
    Standard,
    /// RFC 4648 section 5 symbols, `-` and `_` for indices 62 and 63
    UrlSafe,
}

impl Base64Alphabet {
    fn symbols(self) -> &'static [u8; 65] {
        match self {
            Base64Alphabet::Standard => STANDARD_SYMBOLS,
            Base64Alphabet::UrlSafe => URL_SAFE_SYMBOLS,
        }
    }

    /// Look up the symbol for an index
    ///
    /// # Arguments
    ///
    /// * `index` - Symbol index, 0 through 63 for data, [`PAD_INDEX`] for padding
    ///
    /// # Returns
    ///
    /// * `Some(symbol)` - The symbol at that index
    /// * `None` - Index beyond the table
    pub fn symbol(self, index: u32) -> Option<char> {
        self.symbols()
            .get(index as usize)
            .map(|&byte| char::from(byte))
    }

    /// Look up the index for a character
    ///
    /// Characters outside the 64 data symbols, including the padding
    /// symbol and codes above 255, resolve to [`PAD_INDEX`].
    ///
    /// # Arguments
    ///
    /// * `symbol` - Character to resolve
    ///
    /// # Returns
    ///
    /// * The data index, or [`PAD_INDEX`] for anything else
    pub fn index_of(self, symbol: char) -> u32 {
        let code = u32::from(symbol);
        if code >= 256 {
            return PAD_INDEX;
        }
        match self {
            Base64Alphabet::Standard => STANDARD_INDICES[code as usize],
            Base64Alphabet::UrlSafe => URL_SAFE_INDICES[code as usize],
        }
    }
}
