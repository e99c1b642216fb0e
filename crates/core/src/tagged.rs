//! Compile-time version and variant tags
//!
//! `TaggedUuid<V4, RfcVariant>` and `TaggedUuid<V5, MicrosoftVariant>` are
//! different types, so a random RFC 4122 UUID cannot be passed where a
//! name-based one is expected. The markers are zero-sized; a tagged UUID has
//! the same size and layout as [`Uuid`].
//!
//! ```rust
//! use uuidkit_core::{RfcVariant, TaggedUuid, Uuid, V3, V5, NAMESPACE_URL};
//!
//! let id: TaggedUuid<V5, RfcVariant> =
//!     TaggedUuid::<V5, RfcVariant>::from_name(&NAMESPACE_URL, "https://example.org/");
//! let untyped: Uuid = id.into_inner();
//! assert!(TaggedUuid::<V5, RfcVariant>::try_from(untyped).is_ok());
//! assert!(TaggedUuid::<V3, RfcVariant>::try_from(untyped).is_err());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

use crate::error::TagError;
use crate::layout::{Variant, Version};
use crate::value::Uuid;

/// A version marker type
pub trait VersionTag {
    const VERSION: Version;
}

/// A variant marker type
pub trait VariantTag {
    const VARIANT: Variant;
}

/// Name-based, MD5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V3 {}

impl VersionTag for V3 {
    const VERSION: Version = Version::Md5;
}

/// Random
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V4 {}

impl VersionTag for V4 {
    const VERSION: Version = Version::Random;
}

/// Name-based, SHA-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V5 {}

impl VersionTag for V5 {
    const VERSION: Version = Version::Sha1;
}

/// Variant 1, `10xx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RfcVariant {}

impl VariantTag for RfcVariant {
    const VARIANT: Variant = Variant::Rfc4122;
}

/// Variant 2, `110x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MicrosoftVariant {}

impl VariantTag for MicrosoftVariant {
    const VARIANT: Variant = Variant::Microsoft;
}

/// A [`Uuid`] whose version and variant are fixed by its type
#[repr(transparent)]
pub struct TaggedUuid<V, R> {
    uuid: Uuid,
    tags: PhantomData<(V, R)>,
}

impl<V: VersionTag, R: VariantTag> TaggedUuid<V, R> {
    /// Stamp the type's tags onto arbitrary bits
    pub const fn stamp(uuid: Uuid) -> Self {
        Self::new_unchecked(uuid.tagged(V::VERSION, R::VARIANT))
    }

    pub const fn version(&self) -> Version {
        V::VERSION
    }

    pub const fn variant(&self) -> Variant {
        R::VARIANT
    }
}

impl<V, R> TaggedUuid<V, R> {
    const fn new_unchecked(uuid: Uuid) -> Self {
        TaggedUuid {
            uuid,
            tags: PhantomData,
        }
    }

    /// Forget the tags
    pub fn into_inner(self) -> Uuid {
        self.uuid
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }
}

#[cfg(feature = "v4")]
impl<R: VariantTag> TaggedUuid<V4, R> {
    pub fn from_rng<G: rand_core::RngCore + ?Sized>(rng: &mut G) -> Self {
        Self::new_unchecked(Uuid::new_v4_from_rng_with_variant(rng, R::VARIANT))
    }
}

#[cfg(feature = "v3")]
impl<R: VariantTag> TaggedUuid<V3, R> {
    pub fn from_name(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::new_unchecked(Uuid::new_v3_with_variant(namespace, name, R::VARIANT))
    }
}

#[cfg(feature = "v5")]
impl<R: VariantTag> TaggedUuid<V5, R> {
    pub fn from_name(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        Self::new_unchecked(Uuid::new_v5_with_variant(namespace, name, R::VARIANT))
    }
}

impl<V: VersionTag, R: VariantTag> TryFrom<Uuid> for TaggedUuid<V, R> {
    type Error = TagError;

    /// Accept `uuid` only if both tags already match
    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        let version = uuid.version();
        if version != Some(V::VERSION) {
            return Err(TagError::Version {
                expected: V::VERSION,
                found: version,
            });
        }
        let variant = uuid.variant();
        if variant != Some(R::VARIANT) {
            return Err(TagError::Variant {
                expected: R::VARIANT,
                found: variant,
            });
        }
        Ok(Self::new_unchecked(uuid))
    }
}

impl<V, R> From<TaggedUuid<V, R>> for Uuid {
    fn from(tagged: TaggedUuid<V, R>) -> Self {
        tagged.uuid
    }
}

impl<V, R> Deref for TaggedUuid<V, R> {
    type Target = Uuid;

    fn deref(&self) -> &Uuid {
        &self.uuid
    }
}

// Manual impls: derives would demand the same traits of the marker types.

impl<V, R> Clone for TaggedUuid<V, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, R> Copy for TaggedUuid<V, R> {}

impl<V, R> PartialEq for TaggedUuid<V, R> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<V, R> Eq for TaggedUuid<V, R> {}

impl<V, R> PartialOrd for TaggedUuid<V, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, R> Ord for TaggedUuid<V, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<V, R> Hash for TaggedUuid<V, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<V, R> fmt::Debug for TaggedUuid<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.uuid, f)
    }
}

impl<V, R> fmt::Display for TaggedUuid<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "v5")]
    use crate::NAMESPACE_DNS;

    #[test]
    fn test_stamp_sets_both_tags() {
        let tagged = TaggedUuid::<V4, MicrosoftVariant>::stamp(Uuid::from_u128(u128::MAX));
        assert_eq!(tagged.as_uuid().version(), Some(Version::Random));
        assert_eq!(tagged.as_uuid().variant(), Some(Variant::Microsoft));
        assert_eq!(core::mem::size_of::<TaggedUuid<V4, MicrosoftVariant>>(), 16);
    }

    #[cfg(feature = "v5")]
    #[test]
    fn test_try_from_reports_mismatch() {
        let v5 = Uuid::new_v5(&NAMESPACE_DNS, "example.com");

        assert_eq!(
            TaggedUuid::<V3, RfcVariant>::try_from(v5),
            Err(TagError::Version {
                expected: Version::Md5,
                found: Some(Version::Sha1),
            })
        );
        assert_eq!(
            TaggedUuid::<V5, MicrosoftVariant>::try_from(v5),
            Err(TagError::Variant {
                expected: Variant::Microsoft,
                found: Some(Variant::Rfc4122),
            })
        );
        assert_eq!(
            TaggedUuid::<V5, RfcVariant>::try_from(v5).map(TaggedUuid::into_inner),
            Ok(v5)
        );
    }
}
