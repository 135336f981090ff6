//! C ABI bridge for pgcopy-codec.
//!
//! Exposes the field codec through `extern "C"` so that non-Rust dump and
//! restore tools can share a single implementation. All functions work on
//! caller-provided buffers; nothing is allocated on the Rust side.

use std::slice;
use std::str;

use pgcopy_codec::{DecodeErrorKind, DecodeOptions, EmptyHex, UnknownEscape};

// ---------------------------------------------------------------------------
// Error codes (negative = error, non-negative = bytes written)
// ---------------------------------------------------------------------------

pub const PGCOPY_OK: i32 = 0;
pub const PGCOPY_ERR_UNTERMINATED_ESCAPE: i32 = -1;
pub const PGCOPY_ERR_INVALID_ESCAPE_VALUE: i32 = -2;
pub const PGCOPY_ERR_UNRECOGNIZED_ESCAPE: i32 = -3;
pub const PGCOPY_ERR_BUFFER_TOO_SMALL: i32 = -4;
pub const PGCOPY_ERR_INVALID_INPUT: i32 = -5;

// ---------------------------------------------------------------------------
// Decode flags
// ---------------------------------------------------------------------------

/// Fail on `\` followed by a character with no escape meaning.
pub const PGCOPY_FLAG_REJECT_UNKNOWN_ESCAPE: u32 = 1 << 0;
/// Decode `\x` without hex digits as a literal `x` instead of failing.
pub const PGCOPY_FLAG_LITERAL_EMPTY_HEX: u32 = 1 << 1;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn decode_error_to_code(kind: DecodeErrorKind) -> i32 {
    match kind {
        DecodeErrorKind::UnterminatedEscape => PGCOPY_ERR_UNTERMINATED_ESCAPE,
        DecodeErrorKind::InvalidEscapeValue => PGCOPY_ERR_INVALID_ESCAPE_VALUE,
        DecodeErrorKind::UnrecognizedEscape => PGCOPY_ERR_UNRECOGNIZED_ESCAPE,
        DecodeErrorKind::BufferTooSmall => PGCOPY_ERR_BUFFER_TOO_SMALL,
    }
}

fn options_from_flags(flags: u32) -> DecodeOptions {
    let unknown_escape = if flags & PGCOPY_FLAG_REJECT_UNKNOWN_ESCAPE != 0 {
        UnknownEscape::Reject
    } else {
        UnknownEscape::PassThrough
    };
    let empty_hex = if flags & PGCOPY_FLAG_LITERAL_EMPTY_HEX != 0 {
        EmptyHex::Literal
    } else {
        EmptyHex::Reject
    };
    DecodeOptions::new()
        .unknown_escape(unknown_escape)
        .empty_hex(empty_hex)
}

fn written_to_code(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(PGCOPY_ERR_INVALID_INPUT)
}

/// View `len` bytes at `ptr` as UTF-8. A null pointer is only accepted with `len == 0`.
///
/// # Safety
/// - If non-null, `ptr` must point to `len` readable bytes.
unsafe fn input_str<'a>(ptr: *const u8, len: usize) -> Option<&'a str> {
    if ptr.is_null() {
        return if len == 0 { Some("") } else { None };
    }
    let bytes = unsafe { slice::from_raw_parts(ptr, len) };
    str::from_utf8(bytes).ok()
}

/// # Safety
/// - If non-null, `ptr` must point to `len` writeable bytes.
unsafe fn output_buf<'a>(ptr: *mut u8, len: usize) -> &'a mut [u8] {
    if ptr.is_null() || len == 0 {
        &mut []
    } else {
        unsafe { slice::from_raw_parts_mut(ptr, len) }
    }
}

// ---------------------------------------------------------------------------
// FFI functions
// ---------------------------------------------------------------------------

/// Decode one `COPY` field.
///
/// On success `*is_null` is set to 1 for the `\N` sentinel (nothing is
/// written) and to 0 otherwise. A buffer of `input_len` bytes is always
/// large enough.
///
/// # Safety
/// - `input_ptr` must point to a valid UTF-8 byte array of `input_len` bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
/// - `is_null` must point to a writeable `u8`.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pgcopy_decode(
    input_ptr: *const u8,
    input_len: usize,
    flags: u32,
    buf_ptr: *mut u8,
    buf_len: usize,
    is_null: *mut u8,
) -> i32 {
    let Some(input) = (unsafe { input_str(input_ptr, input_len) }) else {
        return PGCOPY_ERR_INVALID_INPUT;
    };
    if is_null.is_null() {
        return PGCOPY_ERR_INVALID_INPUT;
    }
    let buf = unsafe { output_buf(buf_ptr, buf_len) };
    let is_null = unsafe { &mut *is_null };

    match pgcopy_codec::decode_into_with(input, buf, &options_from_flags(flags)) {
        Ok(None) => {
            *is_null = 1;
            PGCOPY_OK
        }
        Ok(Some(n)) => {
            *is_null = 0;
            written_to_code(n)
        }
        Err(e) => decode_error_to_code(e.kind),
    }
}

/// Encode one field. A non-zero `is_null` encodes NULL and ignores the input.
///
/// # Safety
/// - Unless `is_null` is non-zero, `input_ptr` must point to a valid UTF-8
///   byte array of `input_len` bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pgcopy_encode(
    input_ptr: *const u8,
    input_len: usize,
    is_null: u8,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let value = if is_null == 0 {
        match unsafe { input_str(input_ptr, input_len) } {
            Some(s) => Some(s),
            None => return PGCOPY_ERR_INVALID_INPUT,
        }
    } else {
        None
    };
    let buf = unsafe { output_buf(buf_ptr, buf_len) };

    match pgcopy_codec::encode_into(value, buf) {
        Ok(n) => written_to_code(n),
        Err(_) => PGCOPY_ERR_BUFFER_TOO_SMALL,
    }
}

/// Size of the buffer `pgcopy_encode` needs for the same arguments.
///
/// # Safety
/// - Same requirements on `input_ptr`/`input_len` as `pgcopy_encode`.
///
/// Returns the size, or a negative error code for invalid input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pgcopy_encoded_len(
    input_ptr: *const u8,
    input_len: usize,
    is_null: u8,
) -> i64 {
    if is_null != 0 {
        return pgcopy_codec::encoded_len(None) as i64;
    }
    match unsafe { input_str(input_ptr, input_len) } {
        Some(s) => pgcopy_codec::encoded_len(Some(s)) as i64,
        None => i64::from(PGCOPY_ERR_INVALID_INPUT),
    }
}
