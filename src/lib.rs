//! uuidkit
//!
//! UUID generation, parsing and inspection.
//!
//! # Overview
//!
//! The value type and all bit-level operations live in the `uuidkit-core`
//! crate, re-exported here as [`engine`]. This crate adds the configuration
//! file read by the command-line tool.
//!
//! # Example
//!
//! ```rust
//! use uuidkit::{Uuid, resolve_namespace};
//!
//! let ns = resolve_namespace("dns").unwrap();
//! let id = Uuid::new_v5(&ns, "python.org");
//! assert_eq!(id.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! ```

// Re-export the value type crate
pub use uuidkit_core as engine;

pub mod config;

// Convenience re-exports
pub use engine::{
    ParseError, ParsePolicy, Uuid, Variant, Version, namespace_name, resolve_namespace,
};
