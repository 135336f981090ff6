//! Field value → wire token.
//!
//! Only `\` and the six control characters with a named escape are escaped.
//! Everything else, including other control characters, is written as is.

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, string::String};

use crate::consts::{NULL_SENTINEL, escape_letter};
use crate::error::EncodeError;
use crate::sink::{Overflow, Sink, SliceSink};

/// Returns `true` if the value contains a character that must be escaped.
#[must_use]
pub fn needs_escape(value: &str) -> bool {
    value.bytes().any(|b| escape_letter(b).is_some())
}

/// Exact number of bytes [`encode_into`] writes for `value`.
#[must_use]
pub fn encoded_len(value: Option<&str>) -> usize {
    match value {
        None => NULL_SENTINEL.len(),
        Some(v) => v.len() + v.bytes().filter(|&b| escape_letter(b).is_some()).count(),
    }
}

/// Encode one field for a `COPY` stream.
///
/// `None` becomes the NULL sentinel `\N`. A value with nothing to escape is
/// returned borrowed.
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode_copy_value(value: Option<&str>) -> Cow<'_, str> {
    let Some(value) = value else {
        return Cow::Borrowed(NULL_SENTINEL);
    };

    let Some(first) = value.bytes().position(|b| escape_letter(b).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut out = String::with_capacity(encoded_len(Some(value)));
    out.push_str(&value[..first]);
    // Writing into a `String` can not overflow.
    let _ = encode_from(value, first, &mut out);
    Cow::Owned(out)
}

/// Encode a field into a caller-provided buffer.
///
/// Returns the number of bytes written. Size the buffer with [`encoded_len`].
pub fn encode_into(value: Option<&str>, out: &mut [u8]) -> Result<usize, EncodeError> {
    let mut sink = SliceSink::new(out);
    let result = match value {
        None => sink.push_str(NULL_SENTINEL),
        Some(v) => encode_from(v, 0, &mut sink),
    };
    result.map_err(|_| EncodeError::buffer_too_small())?;
    Ok(sink.written())
}

fn encode_from<S: Sink>(value: &str, start: usize, sink: &mut S) -> Result<(), Overflow> {
    let mut run = start;
    for (i, b) in value.bytes().enumerate().skip(start) {
        let Some(letter) = escape_letter(b) else {
            continue;
        };
        // Escaped bytes are ASCII, so `i` is a char boundary.
        sink.push_str(&value[run..i])?;
        sink.push_escape(letter)?;
        run = i + 1;
    }
    sink.push_str(&value[run..])
}
