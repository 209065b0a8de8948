//! Integration tests for the api_facades crate
//!
//! Runs the whole public surface end to end with the reference vectors
//! the conversion was checked against: hex rendering, radix digits,
//! two's-complement bytes, buffer helpers, and base64 text.

use api_facades::{
    bytes_to_string, concat, decode_twos_complement, encode_twos_complement, equal_buffers,
    from_base, from_base64, hex_view, nearest_power_of_2, pad_number, string_to_bytes, to_base,
    to_base64, to_hex, DecodeContext, RadixError, LONG_FORMAT_WARNING,
};

const DATA: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];

#[test]
fn test_hex_rendering() {
    assert_eq!(to_hex(&DATA, false), "0102030405060708090A");
    assert_eq!(to_hex(&DATA, true), "01 02 03 04 05 06 07 08 09 0A");

    assert_eq!(hex_view(&DATA, 5, None, false), Some("060708090A".to_string()));
    assert_eq!(hex_view(&DATA, 5, Some(2), false), Some("0607".to_string()));
    assert_eq!(hex_view(&DATA, 11, None, false), None);
    assert_eq!(hex_view(&DATA, 5, Some(6), false), None);
}

#[test]
fn test_from_base() {
    assert_eq!(from_base(&[0x01], 7), Ok(1));
    assert_eq!(from_base(&[0x01, 0x01], 7), Ok(129));
    assert_eq!(from_base(&[0x01, 0x01, 0x01], 7), Ok(16513));
}

#[test]
fn test_to_base() {
    assert_eq!(to_hex(&to_base(1, 7, None).unwrap(), false), "01");
    assert_eq!(to_hex(&to_base(129, 7, None).unwrap(), false), "0101");
    assert_eq!(to_hex(&to_base(16513, 7, None).unwrap(), false), "010101");
    assert_eq!(
        to_hex(&to_base(16513, 7, Some(4)).unwrap(), false),
        "00010101"
    );

    assert_eq!(to_base(16513, 7, Some(0)), Err(RadixError::ReservedTooSmall));
    assert_eq!(to_base(16777218, 3, None), Err(RadixError::ValueTooLarge));
}

#[test]
fn test_concat() {
    let first = [0x01u8, 0x02];
    let second = [0x03u8];
    let third = [0x04u8, 0x05];

    assert_eq!(concat(&[&first]), vec![0x01, 0x02]);
    assert_eq!(concat(&[&first, &second]), vec![0x01, 0x02, 0x03]);
    assert_eq!(
        concat(&[&first, &second, &third]),
        vec![0x01, 0x02, 0x03, 0x04, 0x05]
    );
}

#[test]
fn test_decode_twos_complement() {
    let cases: Vec<(&[u8], i64)> = vec![
        (&[0x7F, 0x7F], 32639),
        (&[0x80, 0x81], -32639),
        (&[0x01, 0x00], 256),
        (&[0xFF, 0x00], -256),
        (&[0x00, 0x80], 128),
        (&[0x80], -128),
    ];

    for (bytes, expected) in cases {
        let mut ctx = DecodeContext::new(bytes);
        assert_eq!(decode_twos_complement(&mut ctx), Ok(expected));
        assert!(ctx.warnings.is_empty());
    }

    let mut ctx = DecodeContext::new(&[0xFF, 0x80]);
    assert_eq!(decode_twos_complement(&mut ctx), Ok(-128));
    assert_eq!(ctx.warnings, vec![LONG_FORMAT_WARNING.to_string()]);
}

#[test]
fn test_encode_twos_complement() {
    assert_eq!(to_hex(&encode_twos_complement(32639).unwrap(), false), "7F7F");
    assert_eq!(to_hex(&encode_twos_complement(-32639).unwrap(), false), "8081");
    assert_eq!(to_hex(&encode_twos_complement(256).unwrap(), false), "0100");
    assert_eq!(to_hex(&encode_twos_complement(-256).unwrap(), false), "FF00");
    assert_eq!(to_hex(&encode_twos_complement(128).unwrap(), false), "0080");

    assert_eq!(encode_twos_complement(1 << 57), Err(RadixError::ValueTooLarge));
}

#[test]
fn test_twos_complement_roundtrip() {
    for value in [-32639i64, -256, -128, -1, 0, 1, 127, 128, 256, 32639] {
        let encoded = encode_twos_complement(value).unwrap();
        let mut ctx = DecodeContext::new(&encoded);
        assert_eq!(decode_twos_complement(&mut ctx), Ok(value));
    }
}

#[test]
fn test_equal_buffers() {
    assert!(equal_buffers(&DATA, &DATA));
    assert!(!equal_buffers(&DATA, &DATA[..9]));
    let mut changed = DATA;
    changed[9] = 0x0B;
    assert!(!equal_buffers(&DATA, &changed));
}

#[test]
fn test_pad_number() {
    assert_eq!(pad_number(10, 1), "");
    assert_eq!(pad_number(1, 1), "1");
    assert_eq!(pad_number(1, 2), "01");
}

#[test]
fn test_to_base64() {
    let text = bytes_to_string(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xFF, 0xFF]);
    assert_eq!(to_base64(&text, false, false, false), "AQIDBAUGBwj//w==");
    assert_eq!(to_base64(&text, true, false, false), "AQIDBAUGBwj__w==");
    assert_eq!(to_base64(&text, true, true, false), "AQIDBAUGBwj__w");

    let longer = bytes_to_string(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(to_base64(&longer, true, true, false), "AQIDBAUG_____w");

    let longest = bytes_to_string(&[
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ]);
    assert_eq!(to_base64(&longest, true, true, false), "AQIDBAUG______8");
}

#[test]
fn test_from_base64() {
    let expected = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0xFF, 0xFF];

    // Unpadded input decodes with zero fill
    let filled = string_to_bytes(&from_base64("AQIDBAUGBwj__w", true, false));
    assert_eq!(filled, concat(&[&expected, &[0x00, 0x00]]));

    let trimmed = string_to_bytes(&from_base64("AQIDBAUGBwj__w", true, true));
    assert_eq!(trimmed, expected);

    let padded_tail = string_to_bytes(&from_base64("AQIDBAUGBwj__wAA", true, true));
    assert_eq!(padded_tail, expected);

    assert_eq!(from_base64("AAAAAA====", false, true), "");
}

#[test]
fn test_string_byte_mapping() {
    let text = bytes_to_string(&DATA);
    assert_eq!(string_to_bytes(&text), DATA);

    let every_byte: Vec<u8> = (0u8..=255).collect();
    assert_eq!(string_to_bytes(&bytes_to_string(&every_byte)), every_byte);
}

#[test]
fn test_nearest_power_of_2() {
    assert_eq!(nearest_power_of_2(7), 3);
    assert_eq!(nearest_power_of_2(5), 2);
    assert_eq!(nearest_power_of_2(8), 3);
}
