//! C FFI bindings
//!
//! UUIDs cross the boundary as 16-byte buffers. Every function returns a
//! status code: `UUIDKIT_OK` (0) or one of the negative `UUIDKIT_ERR_*`
//! values. `uuidkit_format` returns the text length on success.

use core::slice;

use crate::error::ParseError;
use crate::params::{BRACED_LENGTH, HYPHENATED_LENGTH, SIMPLE_LENGTH, URN_LENGTH, UUID_BYTES};
use crate::{ParsePolicy, Uuid};

pub const UUIDKIT_OK: i32 = 0;
pub const UUIDKIT_ERR_NULL: i32 = -1;
pub const UUIDKIT_ERR_WRONG_LENGTH: i32 = -2;
pub const UUIDKIT_ERR_WRONG_FORMAT: i32 = -3;
pub const UUIDKIT_ERR_IS_NIL: i32 = -4;
pub const UUIDKIT_ERR_NO_VERSION: i32 = -5;
pub const UUIDKIT_ERR_UNSUPPORTED_VARIANT: i32 = -6;
pub const UUIDKIT_ERR_BUFFER_TOO_SMALL: i32 = -7;
pub const UUIDKIT_ERR_UNKNOWN_FORMAT: i32 = -8;
pub const UUIDKIT_ERR_ENTROPY: i32 = -9;

/// Format selectors for `uuidkit_format`
pub const UUIDKIT_FORMAT_CANONICAL: u32 = 0;
pub const UUIDKIT_FORMAT_URN: u32 = 1;
pub const UUIDKIT_FORMAT_BRACED: u32 = 2;
pub const UUIDKIT_FORMAT_COMPACT: u32 = 3;

fn error_code(err: ParseError) -> i32 {
    match err {
        ParseError::WrongLength { .. } => UUIDKIT_ERR_WRONG_LENGTH,
        ParseError::WrongFormat { .. } => UUIDKIT_ERR_WRONG_FORMAT,
        ParseError::IsNil => UUIDKIT_ERR_IS_NIL,
        ParseError::NoVersion { .. } => UUIDKIT_ERR_NO_VERSION,
        ParseError::UnsupportedVariant { .. } => UUIDKIT_ERR_UNSUPPORTED_VARIANT,
    }
}

/// Copy a UUID into a caller buffer
///
/// Caller guarantees `output` points to 16 writable bytes.
unsafe fn write_uuid(uuid: Uuid, output: *mut u8) {
    unsafe {
        slice::from_raw_parts_mut(output, UUID_BYTES).copy_from_slice(uuid.as_bytes());
    }
}

/// Caller guarantees `input` points to 16 readable bytes.
unsafe fn read_uuid(input: *const u8) -> Uuid {
    let mut bytes = [0u8; UUID_BYTES];
    unsafe {
        bytes.copy_from_slice(slice::from_raw_parts(input, UUID_BYTES));
    }
    Uuid::from_bytes(bytes)
}

/// Parse UUID text
/// - input: pointer to UTF-8 text (need not be NUL-terminated)
/// - input_len: length of the text in bytes
/// - strict: non-zero selects the strict policy
/// - output: pointer to a 16-byte buffer for the result
#[unsafe(no_mangle)]
pub extern "C" fn uuidkit_parse(
    input: *const u8,
    input_len: usize,
    strict: i32,
    output: *mut u8,
) -> i32 {
    if input.is_null() || output.is_null() {
        return UUIDKIT_ERR_NULL;
    }

    let text = unsafe { slice::from_raw_parts(input, input_len) };
    let policy = if strict != 0 {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Permissive
    };

    let parsed = core::str::from_utf8(text)
        .map_err(|_| UUIDKIT_ERR_WRONG_FORMAT)
        .and_then(|text| Uuid::parse_with(text, policy).map_err(error_code));

    match parsed {
        Ok(uuid) => {
            unsafe { write_uuid(uuid, output) };
            UUIDKIT_OK
        }
        Err(code) => code,
    }
}

/// Format a UUID as NUL-terminated text
/// - uuid: pointer to 16 bytes
/// - format: one of the `UUIDKIT_FORMAT_*` selectors
/// - output: pointer to a buffer of `output_len` bytes
///
/// Returns the text length (without the NUL) or a negative error code.
#[unsafe(no_mangle)]
pub extern "C" fn uuidkit_format(
    uuid: *const u8,
    format: u32,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    if uuid.is_null() || output.is_null() {
        return UUIDKIT_ERR_NULL;
    }

    let uuid = unsafe { read_uuid(uuid) };
    let mut canonical = [0u8; HYPHENATED_LENGTH];
    let mut urn = [0u8; URN_LENGTH];
    let mut braced = [0u8; BRACED_LENGTH];
    let mut compact = [0u8; SIMPLE_LENGTH];
    let text: &str = match format {
        UUIDKIT_FORMAT_CANONICAL => uuid.hyphenated().encode_lower(&mut canonical),
        UUIDKIT_FORMAT_URN => uuid.urn().encode_lower(&mut urn),
        UUIDKIT_FORMAT_BRACED => uuid.braced().encode_lower(&mut braced),
        UUIDKIT_FORMAT_COMPACT => uuid.simple().encode_lower(&mut compact),
        _ => return UUIDKIT_ERR_UNKNOWN_FORMAT,
    };

    if output_len < text.len() + 1 {
        return UUIDKIT_ERR_BUFFER_TOO_SMALL;
    }

    unsafe {
        let output_slice = slice::from_raw_parts_mut(output, text.len() + 1);
        output_slice[..text.len()].copy_from_slice(text.as_bytes());
        output_slice[text.len()] = 0;
    }

    text.len() as i32
}

/// Generate a random RFC 4122 UUID from OS entropy into a 16-byte buffer
#[cfg(feature = "getrandom")]
#[unsafe(no_mangle)]
pub extern "C" fn uuidkit_new_v4(output: *mut u8) -> i32 {
    if output.is_null() {
        return UUIDKIT_ERR_NULL;
    }

    match Uuid::try_new_v4() {
        Ok(uuid) => {
            unsafe { write_uuid(uuid, output) };
            UUIDKIT_OK
        }
        Err(_) => UUIDKIT_ERR_ENTROPY,
    }
}

/// Shared argument handling of the name-based constructors
#[cfg(any(feature = "v3", feature = "v5"))]
fn name_based(
    namespace: *const u8,
    name: *const u8,
    name_len: usize,
    output: *mut u8,
    derive: fn(&Uuid, &[u8]) -> Uuid,
) -> i32 {
    if namespace.is_null() || output.is_null() || (name.is_null() && name_len != 0) {
        return UUIDKIT_ERR_NULL;
    }

    let namespace = unsafe { read_uuid(namespace) };
    let name: &[u8] = if name_len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(name, name_len) }
    };

    unsafe { write_uuid(derive(&namespace, name), output) };
    UUIDKIT_OK
}

/// Derive an MD5 name-based UUID
/// - namespace: pointer to 16 bytes
/// - name, name_len: the name bytes (UTF-8 for text names); may be null when empty
/// - output: pointer to a 16-byte buffer
#[cfg(feature = "v3")]
#[unsafe(no_mangle)]
pub extern "C" fn uuidkit_new_v3(
    namespace: *const u8,
    name: *const u8,
    name_len: usize,
    output: *mut u8,
) -> i32 {
    name_based(namespace, name, name_len, output, |ns, name| Uuid::new_v3(ns, name))
}

/// Derive a SHA-1 name-based UUID; arguments as for `uuidkit_new_v3`
#[cfg(feature = "v5")]
#[unsafe(no_mangle)]
pub extern "C" fn uuidkit_new_v5(
    namespace: *const u8,
    name: *const u8,
    name_len: usize,
    output: *mut u8,
) -> i32 {
    name_based(namespace, name, name_len, output, |ns, name| Uuid::new_v5(ns, name))
}
