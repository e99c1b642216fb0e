//! The UUID value type and its binary conversions

use core::fmt;

use crate::codec::{bytes_to_words, words_to_bytes};
use crate::error::ParseError;
use crate::format::{Braced, Hyphenated, Simple, Urn};
use crate::params::UUID_BYTES;

/// Raw 16-byte buffer, big-endian
pub type Bytes = [u8; UUID_BYTES];

/// A 128-bit universally unique identifier
///
/// Stored as 16 big-endian bytes. The value is immutable: every operation
/// that changes a tag returns a new `Uuid`. Ordering compares the bytes
/// lexicographically, which is the same as comparing the canonical strings.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uuid(Bytes);

/// Namespace for fully-qualified domain names
pub const NAMESPACE_DNS: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for URLs
pub const NAMESPACE_URL: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for ISO object identifiers
pub const NAMESPACE_OID: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for X.500 distinguished names (DER or text)
pub const NAMESPACE_X500: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// The four namespaces above, by their short names
pub const WELL_KNOWN_NAMESPACES: [(&str, Uuid); 4] = [
    ("dns", NAMESPACE_DNS),
    ("url", NAMESPACE_URL),
    ("oid", NAMESPACE_OID),
    ("x500", NAMESPACE_X500),
];

/// Resolve `dns`, `url`, `oid` or `x500` (any case, surrounding whitespace
/// ignored), or parse the text as a UUID
pub fn resolve_namespace(text: &str) -> Result<Uuid, ParseError> {
    let key = text.trim();
    match WELL_KNOWN_NAMESPACES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
    {
        Some((_, uuid)) => Ok(*uuid),
        None => Uuid::parse_str(key),
    }
}

/// Short name of a well-known namespace, if `uuid` is one
pub fn namespace_name(uuid: &Uuid) -> Option<&'static str> {
    WELL_KNOWN_NAMESPACES
        .iter()
        .find(|(_, known)| known == uuid)
        .map(|(name, _)| *name)
}

impl Uuid {
    /// The nil UUID: all 128 bits zero
    pub const fn nil() -> Self {
        Uuid([0; UUID_BYTES])
    }

    pub const fn from_bytes(bytes: Bytes) -> Self {
        Uuid(bytes)
    }

    /// Build a UUID from a slice that must hold exactly 16 bytes
    ///
    /// # Errors
    ///
    /// [`ParseError::WrongLength`] with the slice length otherwise.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let bytes: Bytes = bytes
            .try_into()
            .map_err(|_| ParseError::WrongLength { found: bytes.len() })?;
        Ok(Uuid(bytes))
    }

    pub const fn from_u128(value: u128) -> Self {
        Uuid(value.to_be_bytes())
    }

    /// Build a UUID from four 32-bit words, most significant first
    pub const fn from_words(words: [u32; 4]) -> Self {
        Uuid(words_to_bytes(&words))
    }

    /// Build a UUID from the field values of the 8-4-4-4-12 grouping
    ///
    /// `d4` carries the last two groups (2 + 6 bytes).
    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: &[u8; 8]) -> Self {
        let d1 = d1.to_be_bytes();
        let d2 = d2.to_be_bytes();
        let d3 = d3.to_be_bytes();
        Uuid([
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ])
    }

    pub const fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    pub const fn into_bytes(self) -> Bytes {
        self.0
    }

    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    pub const fn as_words(&self) -> [u32; 4] {
        bytes_to_words(&self.0)
    }

    /// The field values of the 8-4-4-4-12 grouping, inverse of [`Uuid::from_fields`]
    pub const fn as_fields(&self) -> (u32, u16, u16, [u8; 8]) {
        let b = &self.0;
        (
            u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            u16::from_be_bytes([b[4], b[5]]),
            u16::from_be_bytes([b[6], b[7]]),
            [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        )
    }

    /// Canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` adapter
    pub const fn hyphenated(self) -> Hyphenated {
        Hyphenated::from_uuid(self)
    }

    /// `urn:uuid:` + canonical adapter
    pub const fn urn(self) -> Urn {
        Urn::from_uuid(self)
    }

    /// Microsoft GUID `{canonical}` adapter
    pub const fn braced(self) -> Braced {
        Braced::from_uuid(self)
    }

    /// Compact 32-digit adapter
    pub const fn simple(self) -> Simple {
        Simple::from_uuid(self)
    }
}

impl From<Bytes> for Uuid {
    fn from(bytes: Bytes) -> Self {
        Uuid::from_bytes(bytes)
    }
}

impl From<Uuid> for Bytes {
    fn from(uuid: Uuid) -> Self {
        uuid.into_bytes()
    }
}

impl From<u128> for Uuid {
    fn from(value: u128) -> Self {
        Uuid::from_u128(value)
    }
}

impl From<Uuid> for u128 {
    fn from(uuid: Uuid) -> Self {
        uuid.as_u128()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hyphenated(), f)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hyphenated(), f)
    }
}

impl fmt::LowerHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.simple(), f)
    }
}

impl fmt::UpperHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.simple(), f)
    }
}
