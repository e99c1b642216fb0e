//! Text parser
//!
//! Input is normalised before validation, in this order:
//!
//! 1. spaces, tabs, carriage returns and newlines are dropped anywhere
//! 2. hyphens are dropped anywhere
//! 3. ASCII letters are lowercased
//! 4. a surrounding `{` ... `}` pair is removed
//! 5. a leading `urn:uuid:` is removed
//!
//! Exactly 32 hex digits must remain. Two policies exist and are never
//! mixed: [`ParsePolicy::Permissive`] accepts any 128-bit value,
//! [`ParsePolicy::Strict`] additionally requires a non-nil value with a
//! version of 1-5 and the RFC 4122 variant.

use core::str::FromStr;

use crate::codec::decode_hex;
use crate::error::ParseError;
use crate::layout::Variant;
use crate::params::{HEX_DIGITS, URN_PREFIX, VARIANT_BYTE};
use crate::value::Uuid;

/// Longest normalised input that can still reduce to 32 digits:
/// `{urn:uuid:` + 32 + `}`
const MAX_NORMALISED: usize = 1 + URN_PREFIX.len() + HEX_DIGITS + 1;

/// Placeholder for non-ASCII characters in the normalised buffer
const NON_ASCII: u8 = 0xFF;

/// Which inputs count as a UUID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParsePolicy {
    /// Any 32 hex digits
    #[default]
    Permissive,
    /// Non-nil, version 1-5, RFC 4122 variant only
    Strict,
}

/// Normalised input: lowercased ASCII bytes plus the characters as written,
/// for error reports
struct Normalised {
    bytes: [u8; MAX_NORMALISED],
    chars: [char; MAX_NORMALISED],
    len: usize,
}

impl Normalised {
    fn new(input: &str) -> Result<Self, ParseError> {
        let mut out = Normalised {
            bytes: [0; MAX_NORMALISED],
            chars: ['\0'; MAX_NORMALISED],
            len: 0,
        };
        let mut total = 0;
        let mut last = '\0';

        for c in input.chars() {
            if matches!(c, ' ' | '\t' | '\r' | '\n' | '-') {
                continue;
            }
            if total < MAX_NORMALISED {
                let lower = c.to_ascii_lowercase();
                out.chars[total] = c;
                out.bytes[total] = if lower.is_ascii() { lower as u8 } else { NON_ASCII };
            }
            last = c;
            total += 1;
        }

        if total > MAX_NORMALISED {
            // Only the head is buffered; apply the wrapper rules to the counts
            let braced = out.bytes[0] == b'{' && last == '}';
            let start = usize::from(braced);
            let mut found = total - 2 * start;
            if out.bytes[start..].starts_with(URN_PREFIX.as_bytes()) {
                found -= URN_PREFIX.len();
            }
            return Err(ParseError::WrongLength { found });
        }
        out.len = total;
        Ok(out)
    }

    /// Range of the body left after removing braces and the URN prefix
    fn body(&self) -> (usize, usize) {
        let (mut start, mut end) = (0, self.len);
        let bytes = &self.bytes[..self.len];

        if end - start >= 2 && bytes[start] == b'{' && bytes[end - 1] == b'}' {
            start += 1;
            end -= 1;
        }
        if bytes[start..end].starts_with(URN_PREFIX.as_bytes()) {
            start += URN_PREFIX.len();
        }
        (start, end)
    }
}

/// Parse with the permissive policy
fn parse_permissive(input: &str) -> Result<Uuid, ParseError> {
    let normalised = Normalised::new(input)?;
    let (start, end) = normalised.body();

    if end - start != HEX_DIGITS {
        return Err(ParseError::WrongLength { found: end - start });
    }

    let body = &normalised.bytes[start..end];
    if let Some(index) = body.iter().position(|b| !b.is_ascii_hexdigit()) {
        return Err(ParseError::WrongFormat {
            found: normalised.chars[start + index],
            index,
        });
    }

    let mut digits = [0u8; HEX_DIGITS];
    digits.copy_from_slice(body);
    Ok(Uuid::from_bytes(decode_hex(&digits)?))
}

/// Check the tags of an already decoded value under the strict policy
pub(crate) fn validate_strict(uuid: Uuid) -> Result<Uuid, ParseError> {
    if uuid.is_nil() {
        return Err(ParseError::IsNil);
    }
    if uuid.version().is_none() {
        return Err(ParseError::NoVersion {
            nibble: uuid.version_nibble(),
        });
    }
    if uuid.variant() != Some(Variant::Rfc4122) {
        return Err(ParseError::UnsupportedVariant {
            byte: uuid.as_bytes()[VARIANT_BYTE],
        });
    }
    Ok(uuid)
}

impl Uuid {
    /// Parse any 32-hex-digit UUID text, in any of the accepted spellings
    ///
    /// Only fails with [`ParseError::WrongLength`] or
    /// [`ParseError::WrongFormat`]. Every output of the four formatters parses
    /// back to the same value.
    ///
    /// ```rust
    /// use uuidkit_core::Uuid;
    ///
    /// let a = Uuid::parse_str("{URN:UUID:12345678-1234-4234-8888-ABCDEFABCDEF}").unwrap();
    /// let b = Uuid::parse_str("12345678 1234 4234 8888 abcdefabcdef").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse_str(input: &str) -> Result<Self, ParseError> {
        parse_permissive(input)
    }

    /// Parse and require a valid RFC 4122 UUID
    ///
    /// Checks, in order: nil, version 1-5, variant `10xx`. Variant 2 values
    /// are rejected with [`ParseError::UnsupportedVariant`].
    pub fn parse_strict(input: &str) -> Result<Self, ParseError> {
        parse_permissive(input).and_then(validate_strict)
    }

    pub fn parse_with(input: &str, policy: ParsePolicy) -> Result<Self, ParseError> {
        match policy {
            ParsePolicy::Permissive => Self::parse_str(input),
            ParsePolicy::Strict => Self::parse_strict(input),
        }
    }

    /// Permissive parse of raw bytes
    ///
    /// Invalid UTF-8 is a [`ParseError::WrongFormat`] whose `index` is the
    /// byte offset of the first invalid byte in `input`, not a position in the
    /// stripped body.
    pub fn try_parse_ascii(input: &[u8]) -> Result<Self, ParseError> {
        let text = core::str::from_utf8(input).map_err(|e| ParseError::WrongFormat {
            found: char::REPLACEMENT_CHARACTER,
            index: e.valid_up_to(),
        })?;
        Self::parse_str(text)
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrappers_strip_in_order() {
        let expected = Uuid::from_u128(0x12345678_1234_4234_8888_abcdefabcdef);

        assert_eq!(
            Uuid::parse_str("{urn:uuid:12345678-1234-4234-8888-abcdefabcdef}"),
            Ok(expected)
        );
        // Braces are only stripped when they wrap everything
        assert_eq!(
            Uuid::parse_str("urn:uuid:{12345678-1234-4234-8888-abcdefabcdef}"),
            Err(ParseError::WrongLength { found: 34 })
        );
    }

    #[test]
    fn test_overlong_input_is_wrong_length() {
        let long = "a".repeat(500);
        assert_eq!(
            Uuid::parse_str(&long),
            Err(ParseError::WrongLength { found: 500 })
        );
    }

    #[test]
    fn test_overlong_wrapped_input_counts_body() {
        let braced = format!("{{{}}}", "a".repeat(42));
        assert_eq!(
            Uuid::parse_str(&braced),
            Err(ParseError::WrongLength { found: 42 })
        );
        let short = format!("{{{}}}", "a".repeat(40));
        assert_eq!(
            Uuid::parse_str(&short),
            Err(ParseError::WrongLength { found: 40 })
        );

        let urn = format!("{{urn:uuid:{}}}", "b".repeat(40));
        assert_eq!(
            Uuid::parse_str(&urn),
            Err(ParseError::WrongLength { found: 40 })
        );
        let urn = format!("URN:UUID:{}", "c-".repeat(50));
        assert_eq!(
            Uuid::parse_str(&urn),
            Err(ParseError::WrongLength { found: 50 })
        );

        // Unbalanced braces are not stripped
        let open_only = format!("{{{}", "a".repeat(44));
        assert_eq!(
            Uuid::parse_str(&open_only),
            Err(ParseError::WrongLength { found: 45 })
        );
    }

    #[test]
    fn test_uppercase_reported_as_written() {
        assert_eq!(
            Uuid::parse_str("12345678-1234-4234-8888-ABCDEFABCDEG"),
            Err(ParseError::WrongFormat {
                found: 'G',
                index: 31
            })
        );
    }

    #[test]
    fn test_non_ascii_reported_as_written() {
        let text = "12345678-1234-4234-8888-abcdefabcdeé";
        assert_eq!(
            Uuid::parse_str(text),
            Err(ParseError::WrongFormat {
                found: 'é',
                index: 31
            })
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let mut bytes = *b"12345678123442348888abcdefabcdef";
        bytes[3] = 0xFF;
        assert_eq!(
            Uuid::try_parse_ascii(&bytes),
            Err(ParseError::WrongFormat {
                found: char::REPLACEMENT_CHARACTER,
                index: 3
            })
        );
    }
}
