//! Text representations
//!
//! Four adapters, all lowercase and all total:
//!
//! | adapter        | example                                         |
//! |----------------|-------------------------------------------------|
//! | [`Hyphenated`] | `a6c0426f-f9a3-3b59-a62f-4807c382b768`          |
//! | [`Urn`]        | `urn:uuid:a6c0426f-f9a3-3b59-a62f-4807c382b768` |
//! | [`Braced`]     | `{a6c0426f-f9a3-3b59-a62f-4807c382b768}`        |
//! | [`Simple`]     | `a6c0426ff9a33b59a62f4807c382b768`              |
//!
//! Each adapter can write into a caller buffer without allocating, or be used
//! through `Display`.

use core::fmt;

use crate::codec::{encode_hyphenated, encode_simple};
use crate::params::{BRACED_LENGTH, HYPHENATED_LENGTH, SIMPLE_LENGTH, URN_LENGTH, URN_PREFIX};
use crate::value::Uuid;

fn ascii_str(buf: &mut [u8]) -> &mut str {
    // SAFETY: callers only pass buffers filled from the hex table, hyphens,
    // braces and the ASCII URN prefix
    unsafe { core::str::from_utf8_unchecked_mut(buf) }
}

macro_rules! adapter {
    ($name:ident, $len:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Length of the rendered text in bytes
            pub const LENGTH: usize = $len;

            pub const fn from_uuid(uuid: Uuid) -> Self {
                $name(uuid)
            }

            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub const fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                $name(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(adapter: $name) -> Self {
                adapter.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buf = [0u8; $len];
                f.write_str(self.encode_lower(&mut buf))
            }
        }
    };
}

adapter!(
    Hyphenated,
    HYPHENATED_LENGTH,
    "Canonical form: 8-4-4-4-12 lowercase hex digits joined by hyphens"
);
adapter!(Urn, URN_LENGTH, "Canonical form prefixed with `urn:uuid:`");
adapter!(Braced, BRACED_LENGTH, "Microsoft GUID form: canonical wrapped in braces");
adapter!(Simple, SIMPLE_LENGTH, "Compact form: 32 lowercase hex digits, no separators");

impl Hyphenated {
    pub fn encode_lower<'b>(&self, buf: &'b mut [u8; HYPHENATED_LENGTH]) -> &'b mut str {
        encode_hyphenated(self.0.as_bytes(), buf);
        ascii_str(buf)
    }
}

impl Urn {
    pub fn encode_lower<'b>(&self, buf: &'b mut [u8; URN_LENGTH]) -> &'b mut str {
        let (prefix, body) = buf.split_at_mut(URN_PREFIX.len());
        prefix.copy_from_slice(URN_PREFIX.as_bytes());
        let mut canonical = [0u8; HYPHENATED_LENGTH];
        encode_hyphenated(self.0.as_bytes(), &mut canonical);
        body.copy_from_slice(&canonical);
        ascii_str(buf)
    }
}

impl Braced {
    pub fn encode_lower<'b>(&self, buf: &'b mut [u8; BRACED_LENGTH]) -> &'b mut str {
        let mut canonical = [0u8; HYPHENATED_LENGTH];
        encode_hyphenated(self.0.as_bytes(), &mut canonical);
        buf[0] = b'{';
        buf[1..=HYPHENATED_LENGTH].copy_from_slice(&canonical);
        buf[BRACED_LENGTH - 1] = b'}';
        ascii_str(buf)
    }
}

impl Simple {
    pub fn encode_lower<'b>(&self, buf: &'b mut [u8; SIMPLE_LENGTH]) -> &'b mut str {
        encode_simple(self.0.as_bytes(), buf);
        ascii_str(buf)
    }

    pub fn encode_upper<'b>(&self, buf: &'b mut [u8; SIMPLE_LENGTH]) -> &'b mut str {
        encode_simple(self.0.as_bytes(), buf);
        buf.make_ascii_uppercase();
        ascii_str(buf)
    }
}

impl fmt::UpperHex for Simple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; SIMPLE_LENGTH];
        f.write_str(self.encode_upper(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: Uuid = Uuid::from_u128(0xa6c0426f_f9a3_3b59_a62f_4807c382b768);

    #[test]
    fn test_buffer_encoders_match_display() {
        let mut buf = [0u8; URN_LENGTH];
        assert_eq!(
            ID.urn().encode_lower(&mut buf),
            "urn:uuid:a6c0426f-f9a3-3b59-a62f-4807c382b768"
        );

        let mut buf = [0u8; BRACED_LENGTH];
        assert_eq!(
            ID.braced().encode_lower(&mut buf),
            "{a6c0426f-f9a3-3b59-a62f-4807c382b768}"
        );

        let mut buf = [0u8; SIMPLE_LENGTH];
        assert_eq!(
            ID.simple().encode_upper(&mut buf),
            "A6C0426FF9A33B59A62F4807C382B768"
        );
    }

    #[test]
    fn test_lengths() {
        assert_eq!(Hyphenated::LENGTH, 36);
        assert_eq!(Urn::LENGTH, 45);
        assert_eq!(Braced::LENGTH, 38);
        assert_eq!(Simple::LENGTH, 32);
    }
}
