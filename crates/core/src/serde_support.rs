//! Serde adapter
//!
//! Human-readable formats carry the canonical string and decode with the
//! permissive parser. Binary formats carry the 16 raw bytes.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::params::HYPHENATED_LENGTH;
use crate::value::Uuid;

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut buf = [0u8; HYPHENATED_LENGTH];
            serializer.serialize_str(self.hyphenated().encode_lower(&mut buf))
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UuidStringVisitor)
        } else {
            deserializer.deserialize_bytes(UuidBytesVisitor)
        }
    }
}

struct UuidStringVisitor;

impl<'vi> de::Visitor<'vi> for UuidStringVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a UUID string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Uuid, E> {
        Uuid::parse_str(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Uuid, E> {
        Uuid::from_slice(value).map_err(E::custom)
    }
}

struct UuidBytesVisitor;

impl<'vi> de::Visitor<'vi> for UuidBytesVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("16 bytes")
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Uuid, E> {
        Uuid::from_slice(value).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{Configure, Token, assert_de_tokens_error, assert_tokens};

    use crate::Uuid;

    #[test]
    fn test_serialize_readable() {
        let text = "f9168c5e-ceb2-4faa-b6bf-329bf39fa1e4";
        let u = Uuid::parse_str(text).unwrap();
        assert_tokens(&u.readable(), &[Token::Str(text)]);
    }

    #[test]
    fn test_serialize_compact() {
        let bytes = b"F9168C5E-CEB2-4F";
        let u = Uuid::from_slice(bytes).unwrap();
        assert_tokens(&u.compact(), &[Token::Bytes(bytes)]);
    }

    #[test]
    fn test_json_accepts_lenient_spellings() {
        let u: Uuid = serde_json::from_str("\"{F9168C5E-CEB2-4FAA-B6BF-329BF39FA1E4}\"").unwrap();
        assert_eq!(
            serde_json::to_string(&u).unwrap(),
            "\"f9168c5e-ceb2-4faa-b6bf-329bf39fa1e4\""
        );
    }

    #[test]
    fn test_parse_errors_surface() {
        assert_de_tokens_error::<serde_test::Readable<Uuid>>(
            &[Token::Str("f9168c5e-ceb2-4faa-b6bf-329bf39fa1e")],
            "invalid length: expected 32 hex digits, found 31",
        );
    }
}
