//! Version and variant tags
//!
//! The version lives in the high nibble of byte 6 (the first digit of the
//! third group). The variant lives in the top bits of byte 8 (the first digit
//! of the fourth group):
//!
//! ```text
//! byte 8    variant
//! 0xxx      reserved (NCS)          -> None
//! 10xx      1, RFC 4122             -> Some(Variant::Rfc4122)
//! 110x      2, Microsoft            -> Some(Variant::Microsoft)
//! 111x      reserved (future)       -> None
//! ```
//!
//! Tagging is pure bit surgery: the setters touch only their own bits and
//! never fail.

use core::fmt;

use crate::params::{
    MICROSOFT_BITS, MICROSOFT_MASK, RFC4122_BITS, RFC4122_MASK, VARIANT_BYTE, VERSION_BYTE,
};
use crate::value::Uuid;

/// How the non-tag bits of a UUID were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Version {
    /// Timestamp and MAC address (recognised, never generated here)
    Mac = 1,
    /// DCE security (recognised, never generated here)
    Dce = 2,
    /// MD5 of namespace + name
    Md5 = 3,
    /// Random
    Random = 4,
    /// SHA-1 of namespace + name
    Sha1 = 5,
}

impl Version {
    /// Map a raw nibble to a version; `None` outside 1-5
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            1 => Some(Version::Mac),
            2 => Some(Version::Dce),
            3 => Some(Version::Md5),
            4 => Some(Version::Random),
            5 => Some(Version::Sha1),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Version::Mac => "version 1",
            Version::Dce => "version 2",
            Version::Md5 => "version 3",
            Version::Random => "version 4",
            Version::Sha1 => "version 5",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which layout family a UUID belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Variant {
    /// Variant 1, `10xx`
    #[default]
    Rfc4122 = 1,
    /// Variant 2, `110x` (Microsoft backward compatibility)
    Microsoft = 2,
}

impl Variant {
    /// Map a variant number (1 or 2) to a variant
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Variant::Rfc4122),
            2 => Some(Variant::Microsoft),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Rfc4122 => "RFC 4122",
            Variant::Microsoft => "Microsoft",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw version nibble, 0-15
#[inline]
pub const fn version_nibble(uuid: &Uuid) -> u8 {
    uuid.as_bytes()[VERSION_BYTE] >> 4
}

/// The version tag, `None` when the nibble is outside 1-5
#[inline]
pub const fn get_version(uuid: &Uuid) -> Option<Version> {
    Version::from_nibble(version_nibble(uuid))
}

/// The variant tag, `None` for the reserved patterns `0xxx` and `111x`
#[inline]
pub const fn get_variant(uuid: &Uuid) -> Option<Variant> {
    let byte = uuid.as_bytes()[VARIANT_BYTE];
    if byte & 0xC0 == RFC4122_BITS {
        Some(Variant::Rfc4122)
    } else if byte & 0xE0 == MICROSOFT_BITS {
        Some(Variant::Microsoft)
    } else {
        None
    }
}

/// Return `uuid` with its version nibble replaced
#[inline]
pub const fn set_version(uuid: Uuid, version: Version) -> Uuid {
    let mut bytes = uuid.into_bytes();
    bytes[VERSION_BYTE] = (bytes[VERSION_BYTE] & 0x0F) | (version.number() << 4);
    Uuid::from_bytes(bytes)
}

/// Return `uuid` with its variant bits replaced
#[inline]
pub const fn set_variant(uuid: Uuid, variant: Variant) -> Uuid {
    let mut bytes = uuid.into_bytes();
    bytes[VARIANT_BYTE] = match variant {
        Variant::Rfc4122 => (bytes[VARIANT_BYTE] & RFC4122_MASK) | RFC4122_BITS,
        Variant::Microsoft => (bytes[VARIANT_BYTE] & MICROSOFT_MASK) | MICROSOFT_BITS,
    };
    Uuid::from_bytes(bytes)
}

impl Uuid {
    /// Same bits with the version nibble replaced
    pub const fn with_version(self, version: Version) -> Self {
        set_version(self, version)
    }

    /// Same bits with the variant bits replaced
    pub const fn with_variant(self, variant: Variant) -> Self {
        set_variant(self, variant)
    }

    /// Stamp both tags, variant first
    pub(crate) const fn tagged(self, version: Version, variant: Variant) -> Self {
        set_version(set_variant(self, variant), version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_patterns() {
        let with_byte8 = |b: u8| {
            let mut bytes = [0xFFu8; 16];
            bytes[VARIANT_BYTE] = b;
            Uuid::from_bytes(bytes)
        };

        for b in 0x00..=0x7Fu8 {
            assert_eq!(get_variant(&with_byte8(b)), None, "byte {:#04x}", b);
        }
        for b in 0x80..=0xBFu8 {
            assert_eq!(get_variant(&with_byte8(b)), Some(Variant::Rfc4122));
        }
        for b in 0xC0..=0xDFu8 {
            assert_eq!(get_variant(&with_byte8(b)), Some(Variant::Microsoft));
        }
        for b in 0xE0..=0xFFu8 {
            assert_eq!(get_variant(&with_byte8(b)), None, "byte {:#04x}", b);
        }
    }

    #[test]
    fn test_setters_touch_only_their_bits() {
        let all_ones = Uuid::from_u128(u128::MAX);

        let v = set_version(all_ones, Version::Random);
        assert_eq!(v.as_u128() ^ all_ones.as_u128(), 0xB << 76);

        let r = set_variant(all_ones, Variant::Rfc4122);
        assert_eq!(r.as_bytes()[VARIANT_BYTE], 0xBF);
        assert_eq!(r.as_u128() | (0x40 << 56), u128::MAX);

        let m = set_variant(Uuid::nil(), Variant::Microsoft);
        assert_eq!(m.as_bytes()[VARIANT_BYTE], 0xC0);
        assert_eq!(m.as_u128(), 0xC0 << 56);
    }

    #[test]
    fn test_version_nibble_range() {
        for nibble in 0..16u8 {
            let mut bytes = [0u8; 16];
            bytes[VERSION_BYTE] = nibble << 4 | 0x0A;
            let uuid = Uuid::from_bytes(bytes);
            assert_eq!(version_nibble(&uuid), nibble);
            assert_eq!(get_version(&uuid).is_some(), (1..=5).contains(&nibble));
        }
    }
}
