//! Random (version 4) constructor
//!
//! Entropy comes from a caller-supplied [`RngCore`]; seeding that generator
//! makes generation reproducible. A variant-1 result keeps 122 random bits,
//! a variant-2 result keeps 121.

use rand_core::RngCore;

use crate::layout::{Variant, Version};
use crate::value::{Bytes, Uuid};

impl Uuid {
    /// Tag 16 random bytes as a version 4 UUID of the given variant
    pub const fn from_random_bytes(bytes: Bytes, variant: Variant) -> Self {
        Uuid::from_bytes(bytes).tagged(Version::Random, variant)
    }

    /// Random RFC 4122 UUID drawn from `rng`
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use uuidkit_core::Uuid;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let id = Uuid::new_v4_from_rng(&mut rng);
    /// assert!(id.is_version(4) && id.is_variant(1));
    /// ```
    pub fn new_v4_from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new_v4_from_rng_with_variant(rng, Variant::Rfc4122)
    }

    /// Random UUID of the given variant drawn from `rng`
    pub fn new_v4_from_rng_with_variant<R: RngCore + ?Sized>(
        rng: &mut R,
        variant: Variant,
    ) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self::from_random_bytes(bytes, variant)
    }
}

#[cfg(feature = "getrandom")]
impl Uuid {
    /// Random RFC 4122 UUID from operating-system entropy
    ///
    /// # Panics
    ///
    /// If the operating system cannot provide entropy. Use
    /// [`Uuid::try_new_v4`] to handle that case.
    pub fn new_v4() -> Self {
        Self::new_v4_from_rng(&mut rand_core::OsRng)
    }

    /// Random UUID of the given variant from operating-system entropy
    ///
    /// # Panics
    ///
    /// If the operating system cannot provide entropy.
    pub fn new_v4_with_variant(variant: Variant) -> Self {
        Self::new_v4_from_rng_with_variant(&mut rand_core::OsRng, variant)
    }

    /// Random RFC 4122 UUID from operating-system entropy, reporting failure
    pub fn try_new_v4() -> Result<Self, getrandom::Error> {
        Self::try_new_v4_with_variant(Variant::Rfc4122)
    }

    pub fn try_new_v4_with_variant(variant: Variant) -> Result<Self, getrandom::Error> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes)?;
        Ok(Self::from_random_bytes(bytes, variant))
    }
}
