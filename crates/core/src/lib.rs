//! # uuidkit core
//!
//! A 128-bit UUID value type with bit-exact parsing, formatting and
//! generation.
//!
//! ## Features
//!
//! - **Lenient parsing**: whitespace, hyphens, case, `{...}` and `urn:uuid:`
//!   are all accepted, with a permissive and a strict policy
//! - **Four text forms**: canonical, URN, Microsoft GUID and compact
//! - **Name-based UUIDs**: version 3 (MD5) and version 5 (SHA-1)
//! - **Random UUIDs**: version 4 from any `rand_core::RngCore`
//! - **Typed tags**: `TaggedUuid<V, R>` fixes version and variant at compile time
//!
//! ## Layout
//!
//! ```text
//! xxxxxxxx-xxxx-Vxxx-Rxxx-xxxxxxxxxxxx
//! ^^^^^^^^ ^^^^ ^    ^    ^^^^^^^^^^^^
//! 4 bytes  2    2    2    6 bytes (big-endian)
//!               |    variant bits, byte 8 (10xx = RFC 4122, 110x = Microsoft)
//!               version nibble, byte 6 (1-5)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use uuidkit_core::{NAMESPACE_DNS, ParseError, Uuid};
//!
//! let id = Uuid::new_v5(&NAMESPACE_DNS, "example.com");
//! assert_eq!(id.version().map(|v| v.number()), Some(5));
//!
//! // Any spelling of the same value parses back to it
//! let urn = id.urn().to_string();
//! assert_eq!(urn.parse::<Uuid>(), Ok(id));
//!
//! // Strict parsing refuses the nil UUID
//! assert_eq!(Uuid::parse_strict(&Uuid::nil().to_string()), Err(ParseError::IsNil));
//! ```
//!
//! ## no_std Support
//!
//! Without the default `std` feature the crate builds against `core` only:
//!
//! ```toml
//! [dependencies]
//! uuidkit-core = { version = "0.2", default-features = false, features = ["v5"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod codec;
mod error;
mod format;
mod inspect;
mod layout;
mod params;
mod parse;
mod tagged;
mod value;

#[cfg(any(feature = "v3", feature = "v5"))]
mod name;
#[cfg(feature = "v4")]
mod random;
#[cfg(feature = "serde")]
mod serde_support;

#[cfg(feature = "std")]
pub mod ffi;

pub use error::{ParseError, TagError};
pub use format::{Braced, Hyphenated, Simple, Urn};
pub use layout::{Variant, Version, get_variant, get_version, set_variant, set_version};
pub use params::{
    BRACED_LENGTH, HYPHENATED_LENGTH, SIMPLE_LENGTH, URN_LENGTH, URN_PREFIX, UUID_BYTES,
};
pub use parse::ParsePolicy;
pub use tagged::{MicrosoftVariant, RfcVariant, TaggedUuid, V3, V4, V5, VariantTag, VersionTag};
pub use value::{
    Bytes, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500, Uuid,
    WELL_KNOWN_NAMESPACES, namespace_name, resolve_namespace,
};
