//! Read-only queries

use crate::layout::{self, Variant, Version};
use crate::value::Uuid;

impl Uuid {
    /// True iff all 128 bits are zero
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// The version tag, `None` when the nibble is outside 1-5
    ///
    /// The nil UUID has no version.
    pub const fn version(&self) -> Option<Version> {
        layout::get_version(self)
    }

    /// The raw version nibble, 0-15, for diagnostics
    pub const fn version_nibble(&self) -> u8 {
        layout::version_nibble(self)
    }

    /// The variant tag, `None` for the reserved bit patterns
    pub const fn variant(&self) -> Option<Variant> {
        layout::get_variant(self)
    }

    /// True iff the version tag equals `n`; always false outside 1-5
    pub const fn is_version(&self, n: u8) -> bool {
        match self.version() {
            Some(v) => v.number() == n,
            None => false,
        }
    }

    /// True iff the variant tag equals `n`; always false outside 1-2
    pub const fn is_variant(&self, n: u8) -> bool {
        match self.variant() {
            Some(v) => v.number() == n,
            None => false,
        }
    }

    /// Non-nil with a valid version and a supported variant
    pub const fn is_valid(&self) -> bool {
        !self.is_nil() && self.version().is_some() && self.variant().is_some()
    }
}
