//! Name-based (version 3 and 5) constructors
//!
//! `hash(namespace bytes || name bytes)`, truncated to 16 bytes, then tagged.
//! Text names hash as their UTF-8 bytes, so `&str` and `&[u8]` give the same
//! result for the same text. No randomness and no platform dependence: equal
//! inputs always give equal outputs.

use digest::Digest;

use crate::layout::{Variant, Version};
use crate::params::UUID_BYTES;
use crate::value::Uuid;

/// Digest `namespace || name` with `D` and stamp the tags
///
/// `D` must produce at least 16 bytes; both callers use MD5 (16) or SHA-1 (20).
fn from_digest<D: Digest>(
    namespace: &Uuid,
    name: &[u8],
    version: Version,
    variant: Variant,
) -> Uuid {
    let mut hasher = D::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    let mut bytes = [0u8; UUID_BYTES];
    bytes.copy_from_slice(&digest[..UUID_BYTES]);
    Uuid::from_bytes(bytes).tagged(version, variant)
}

#[cfg(feature = "v3")]
impl Uuid {
    /// RFC 4122 name-based UUID using MD5
    ///
    /// ```rust
    /// use uuidkit_core::Uuid;
    ///
    /// let id = Uuid::new_v3(&Uuid::nil(), "hello");
    /// assert_eq!(id.to_string(), "a6c0426f-f9a3-3b59-a62f-4807c382b768");
    /// ```
    pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::new_v3_with_variant(namespace, name, Variant::Rfc4122)
    }

    pub fn new_v3_with_variant(namespace: &Uuid, name: impl AsRef<[u8]>, variant: Variant) -> Self {
        from_digest::<md5::Md5>(namespace, name.as_ref(), Version::Md5, variant)
    }
}

#[cfg(feature = "v5")]
impl Uuid {
    /// RFC 4122 name-based UUID using SHA-1 (first 16 of 20 digest bytes)
    ///
    /// ```rust
    /// use uuidkit_core::{NAMESPACE_DNS, Uuid};
    ///
    /// let id = Uuid::new_v5(&NAMESPACE_DNS, "python.org");
    /// assert_eq!(id.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::new_v5_with_variant(namespace, name, Variant::Rfc4122)
    }

    pub fn new_v5_with_variant(namespace: &Uuid, name: impl AsRef<[u8]>, variant: Variant) -> Self {
        from_digest::<sha1::Sha1>(namespace, name.as_ref(), Version::Sha1, variant)
    }
}
