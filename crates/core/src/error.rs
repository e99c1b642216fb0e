//! Error types

use thiserror::Error;

use crate::layout::{Variant, Version};

/// Why a piece of text (or a byte slice) could not become a [`Uuid`](crate::Uuid)
///
/// The set is closed. The permissive parser only ever returns
/// [`WrongLength`](ParseError::WrongLength) and
/// [`WrongFormat`](ParseError::WrongFormat); the remaining variants come from
/// strict validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// After stripping separators and wrappers, the input did not hold exactly
    /// 32 characters (or, for binary input, exactly 16 bytes).
    #[error("invalid length: expected 32 hex digits, found {found}")]
    WrongLength { found: usize },

    /// The input had 32 characters but at least one is not a hex digit.
    /// `index` is the position within the stripped 32-digit body, except for
    /// invalid UTF-8 passed to [`Uuid::try_parse_ascii`](crate::Uuid::try_parse_ascii),
    /// where it is the byte offset in the raw input.
    #[error("invalid character `{found}` at offset {index}")]
    WrongFormat { found: char, index: usize },

    /// All 128 bits are zero.
    #[error("the nil UUID is not accepted")]
    IsNil,

    /// The version nibble is outside 1-5.
    #[error("no valid version: version nibble is {nibble:#x}")]
    NoVersion { nibble: u8 },

    /// The variant bits are not the RFC 4122 pattern `10xx`.
    #[error("unsupported variant: variant byte is {byte:#04x}")]
    UnsupportedVariant { byte: u8 },
}

/// Why an untyped [`Uuid`](crate::Uuid) does not fit a
/// [`TaggedUuid`](crate::TaggedUuid) type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagError {
    #[error("expected a version {expected} UUID, found {}", .found.map_or("no valid version", Version::name))]
    Version {
        expected: Version,
        found: Option<Version>,
    },

    #[error("expected the {expected} variant, found {}", .found.map_or("an unsupported variant", Variant::name))]
    Variant {
        expected: Variant,
        found: Option<Variant>,
    },
}
