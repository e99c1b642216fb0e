//! Hex and byte codec
//!
//! Conversions between the 16-byte representation, four big-endian 32-bit
//! words, and hexadecimal text. Everything else in the crate builds on these.

use crate::error::ParseError;
use crate::params::{GROUPS, HEX_DIGITS, HYPHENATED_LENGTH, SIMPLE_LENGTH, UUID_BYTES};

const LOWER: &[u8; 16] = b"0123456789abcdef";

/// Pack 16 big-endian bytes into four 32-bit words
#[inline]
pub const fn bytes_to_words(bytes: &[u8; UUID_BYTES]) -> [u32; 4] {
    let mut words = [0u32; 4];
    let mut i = 0;
    while i < 4 {
        words[i] = u32::from_be_bytes([
            bytes[i * 4],
            bytes[i * 4 + 1],
            bytes[i * 4 + 2],
            bytes[i * 4 + 3],
        ]);
        i += 1;
    }
    words
}

/// Unpack four 32-bit words into 16 big-endian bytes
#[inline]
pub const fn words_to_bytes(words: &[u32; 4]) -> [u8; UUID_BYTES] {
    let mut bytes = [0u8; UUID_BYTES];
    let mut i = 0;
    while i < 4 {
        let be = words[i].to_be_bytes();
        bytes[i * 4] = be[0];
        bytes[i * 4 + 1] = be[1];
        bytes[i * 4 + 2] = be[2];
        bytes[i * 4 + 3] = be[3];
        i += 1;
    }
    bytes
}

/// Write the 32 lowercase hex digits of `bytes` into `out`
#[inline]
pub fn encode_simple(bytes: &[u8; UUID_BYTES], out: &mut [u8; SIMPLE_LENGTH]) {
    for (i, byte) in bytes.iter().enumerate() {
        out[i * 2] = LOWER[(byte >> 4) as usize];
        out[i * 2 + 1] = LOWER[(byte & 0x0F) as usize];
    }
}

/// Write the 8-4-4-4-12 hyphenated lowercase form of `bytes` into `out`
#[inline]
pub fn encode_hyphenated(bytes: &[u8; UUID_BYTES], out: &mut [u8; HYPHENATED_LENGTH]) {
    let mut pos = 0;
    for (group, &(start, end)) in GROUPS.iter().enumerate() {
        if group > 0 {
            out[pos] = b'-';
            pos += 1;
        }
        for byte in &bytes[start..end] {
            out[pos] = LOWER[(byte >> 4) as usize];
            out[pos + 1] = LOWER[(byte & 0x0F) as usize];
            pos += 2;
        }
    }
}

/// Decode exactly 32 hex digits into 16 bytes
///
/// Reports the first non-hex digit as [`ParseError::WrongFormat`].
pub fn decode_hex(digits: &[u8; HEX_DIGITS]) -> Result<[u8; UUID_BYTES], ParseError> {
    let mut bytes = [0u8; UUID_BYTES];
    hex::decode_to_slice(digits, &mut bytes).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            ParseError::WrongFormat { found: c, index }
        }
        // Both lengths are fixed by the signature
        _ => ParseError::WrongLength {
            found: digits.len(),
        },
    })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x12, 0x34, 0x56, 0x78, 0x12, 0x34, 0x42, 0x34, 0x88, 0x88, 0xab, 0xcd, 0xef, 0xab, 0xcd,
        0xef,
    ];

    #[test]
    fn test_words_match_big_endian_bytes() {
        let words = bytes_to_words(&SAMPLE);
        assert_eq!(words, [0x1234_5678, 0x1234_4234, 0x8888_abcd, 0xefab_cdef]);
        assert_eq!(words_to_bytes(&words), SAMPLE);
    }

    #[test]
    fn test_encode_forms() {
        let mut simple = [0u8; SIMPLE_LENGTH];
        encode_simple(&SAMPLE, &mut simple);
        assert_eq!(&simple, b"12345678123442348888abcdefabcdef");

        let mut hyphenated = [0u8; HYPHENATED_LENGTH];
        encode_hyphenated(&SAMPLE, &mut hyphenated);
        assert_eq!(&hyphenated, b"12345678-1234-4234-8888-abcdefabcdef");
    }

    #[test]
    fn test_decode_reports_first_bad_digit() {
        let mut digits = *b"12345678123442348888abcdefabcdef";
        assert_eq!(decode_hex(&digits), Ok(SAMPLE));

        digits[20] = b'g';
        assert_eq!(
            decode_hex(&digits),
            Err(ParseError::WrongFormat {
                found: 'g',
                index: 20
            })
        );
    }
}
