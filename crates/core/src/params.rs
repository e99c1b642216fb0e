//! UUID layout parameters
//!
//! Sizes, group boundaries and tag positions of the RFC 4122 layout.
//! Byte indices count from the most significant byte (big-endian).

/// Size of a UUID in bytes
pub const UUID_BYTES: usize = 16;

/// Number of hex digits in a UUID
pub const HEX_DIGITS: usize = 32;

/// Length of the compact form (`xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`)
pub const SIMPLE_LENGTH: usize = HEX_DIGITS;

/// Length of the canonical form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`)
pub const HYPHENATED_LENGTH: usize = HEX_DIGITS + 4;

/// Length of the URN form (`urn:uuid:` + canonical)
pub const URN_LENGTH: usize = URN_PREFIX.len() + HYPHENATED_LENGTH;

/// Length of the Microsoft GUID form (`{` + canonical + `}`)
pub const BRACED_LENGTH: usize = HYPHENATED_LENGTH + 2;

/// URN namespace prefix
pub const URN_PREFIX: &str = "urn:uuid:";

/// Byte ranges of the five hyphen-separated groups (4-2-2-2-6 bytes)
pub const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// Byte holding the version nibble (high 4 bits, bits 48-51)
pub const VERSION_BYTE: usize = 6;

/// Byte holding the variant bits (top bits, bits 64-66)
pub const VARIANT_BYTE: usize = 8;

/// Variant 1 (RFC 4122): keeps the low 6 bits of the variant byte
pub const RFC4122_MASK: u8 = 0x3F;

/// Variant 1 (RFC 4122): top bits `10`
pub const RFC4122_BITS: u8 = 0x80;

/// Variant 2 (Microsoft): keeps the low 5 bits of the variant byte
pub const MICROSOFT_MASK: u8 = 0x1F;

/// Variant 2 (Microsoft): top bits `110`
pub const MICROSOFT_BITS: u8 = 0xC0;
