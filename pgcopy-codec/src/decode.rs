//! Wire token → field value.

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, string::String};

use crate::consts::{
    ESCAPE, MAX_HEX_DIGITS, MAX_OCTAL_DIGITS, NULL_SENTINEL, digit_value, is_octal_digit,
    named_escape,
};
use crate::error::{DecodeError, DecodeErrorKind};
use crate::options::{DecodeOptions, EmptyHex, UnknownEscape};
use crate::sink::{Sink, SliceSink};

/// Returns `true` if the token is the NULL sentinel.
#[must_use]
pub fn is_null(token: &str) -> bool {
    token == NULL_SENTINEL
}

/// Returns `true` if the token contains any escape sequence.
#[must_use]
pub fn needs_unescape(token: &str) -> bool {
    token.as_bytes().contains(&ESCAPE)
}

/// Decode one field as read from a `COPY` stream.
///
/// Returns `Ok(None)` for the NULL sentinel `\N`. A token without any `\`
/// is handed back borrowed; an owned string is only built once the first
/// escape is seen.
///
/// Decoding uses [`DecodeOptions::default()`]: unknown escapes such as `\q`
/// pass through as the bare character and `\x` without digits is an error.
#[cfg(feature = "alloc")]
pub fn decode_copy_value(token: &str) -> Result<Option<Cow<'_, str>>, DecodeError> {
    decode_copy_value_with(token, &DecodeOptions::default())
}

/// [`decode_copy_value`] with explicit leniency settings.
#[cfg(feature = "alloc")]
pub fn decode_copy_value_with<'a>(
    token: &'a str,
    options: &DecodeOptions,
) -> Result<Option<Cow<'a, str>>, DecodeError> {
    if is_null(token) {
        return Ok(None);
    }

    let Some(first) = token.bytes().position(|b| b == ESCAPE) else {
        return Ok(Some(Cow::Borrowed(token)));
    };

    let mut out = String::with_capacity(token.len());
    out.push_str(&token[..first]);
    decode_from(token, first, options, &mut out)?;
    Ok(Some(Cow::Owned(out)))
}

/// Decode a token into a caller-provided buffer.
///
/// Returns `Ok(None)` for the NULL sentinel, otherwise the number of bytes
/// written to `out`. The decoded value is never longer than the token, so a
/// buffer of `token.len()` bytes always suffices.
pub fn decode_into(token: &str, out: &mut [u8]) -> Result<Option<usize>, DecodeError> {
    decode_into_with(token, out, &DecodeOptions::default())
}

/// [`decode_into`] with explicit leniency settings.
pub fn decode_into_with(
    token: &str,
    out: &mut [u8],
    options: &DecodeOptions,
) -> Result<Option<usize>, DecodeError> {
    if is_null(token) {
        return Ok(None);
    }
    let mut sink = SliceSink::new(out);
    decode_from(token, 0, options, &mut sink)?;
    Ok(Some(sink.written()))
}

/// Single pass over `token[start..]`. Runs of plain text are copied as whole
/// slices; `start` must sit on a char boundary.
fn decode_from<S: Sink>(
    token: &str,
    start: usize,
    options: &DecodeOptions,
    sink: &mut S,
) -> Result<(), DecodeError> {
    let bytes = token.as_bytes();
    let mut run = start;
    let mut i = start;

    while i < bytes.len() {
        if bytes[i] != ESCAPE {
            i += 1;
            continue;
        }

        // `\` is ASCII, so `i` is a char boundary.
        sink.push_str(&token[run..i])
            .map_err(|_| DecodeError::new(DecodeErrorKind::BufferTooSmall, run))?;

        let (decoded, consumed) = decode_escape(token, i, options)?;
        sink.push_char(decoded)
            .map_err(|_| DecodeError::new(DecodeErrorKind::BufferTooSmall, i))?;

        i += consumed;
        run = i;
    }

    sink.push_str(&token[run..])
        .map_err(|_| DecodeError::new(DecodeErrorKind::BufferTooSmall, run))
}

/// Decodes the escape sequence starting at `pos` (which holds `\`).
///
/// Returns the decoded character and the number of bytes consumed,
/// including the `\`.
fn decode_escape(
    token: &str,
    pos: usize,
    options: &DecodeOptions,
) -> Result<(char, usize), DecodeError> {
    let bytes = token.as_bytes();
    let Some(&next) = bytes.get(pos + 1) else {
        return Err(DecodeError::new(DecodeErrorKind::UnterminatedEscape, pos));
    };

    if let Some(c) = named_escape(next) {
        return Ok((c, 2));
    }

    match next {
        b'x' => {
            let digits = digit_run(&bytes[pos + 2..], MAX_HEX_DIGITS, u8::is_ascii_hexdigit);
            if digits.is_empty() {
                return match options.empty_hex {
                    EmptyHex::Reject => Err(DecodeError::new(
                        DecodeErrorKind::InvalidEscapeValue,
                        pos,
                    )),
                    EmptyHex::Literal => Ok(('x', 2)),
                };
            }
            let c = code_point(digits, 16, pos)?;
            Ok((c, 2 + digits.len()))
        }
        b'0'..=b'7' => {
            // The first digit is already known; take up to two more.
            let extra = digit_run(&bytes[pos + 2..], MAX_OCTAL_DIGITS - 1, |b| {
                is_octal_digit(*b)
            });
            let digits = &bytes[pos + 1..pos + 2 + extra.len()];
            let c = code_point(digits, 8, pos)?;
            Ok((c, 1 + digits.len()))
        }
        _ => match options.unknown_escape {
            UnknownEscape::Reject => Err(DecodeError::new(
                DecodeErrorKind::UnrecognizedEscape,
                pos,
            )),
            UnknownEscape::PassThrough => {
                // `next` may be the lead byte of a multi-byte character.
                let c = token[pos + 1..]
                    .chars()
                    .next()
                    .ok_or(DecodeError::new(DecodeErrorKind::UnterminatedEscape, pos))?;
                Ok((c, 1 + c.len_utf8()))
            }
        },
    }
}

/// Longest prefix of `bytes`, at most `max` long, whose bytes all satisfy `accept`.
fn digit_run(bytes: &[u8], max: usize, accept: impl Fn(&u8) -> bool) -> &[u8] {
    let len = bytes.iter().take(max).take_while(|b| accept(*b)).count();
    &bytes[..len]
}

fn code_point(digits: &[u8], radix: u32, pos: usize) -> Result<char, DecodeError> {
    let value = digits
        .iter()
        .fold(0u32, |acc, &d| acc * radix + digit_value(d));
    char::from_u32(value).ok_or(DecodeError::new(DecodeErrorKind::InvalidEscapeValue, pos))
}
