/// Wire representation of a NULL field.
pub const NULL_SENTINEL: &str = "\\N";

/// The escape character.
pub const ESCAPE: u8 = b'\\';

/// Maximum digits in an octal escape, including the first one (`\377`).
pub const MAX_OCTAL_DIGITS: usize = 3;

/// Maximum digits following `\x` in a hexadecimal escape (`\xff`).
pub const MAX_HEX_DIGITS: usize = 2;

/// Escape letter for every ASCII byte the encoder has to escape, `0` otherwise.
///
/// Bytes `>= 0x80` are never looked up: UTF-8 continuation and lead bytes
/// can not collide with any of the escaped characters.
const ENCODE_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];
    table[b'\\' as usize] = b'\\';
    table[0x08] = b'b';
    table[0x0C] = b'f';
    table[b'\n' as usize] = b'n';
    table[b'\r' as usize] = b'r';
    table[b'\t' as usize] = b't';
    table[0x0B] = b'v';
    table
};

/// Returns the letter to put after `\` when `b` has to be escaped.
#[inline]
#[must_use]
pub const fn escape_letter(b: u8) -> Option<u8> {
    if b >= 0x80 {
        return None;
    }
    match ENCODE_TABLE[b as usize] {
        0 => None,
        letter => Some(letter),
    }
}

/// Returns the character a named escape (`\n`, `\t`, ...) stands for.
#[inline]
#[must_use]
pub const fn named_escape(letter: u8) -> Option<char> {
    match letter {
        b'\\' => Some('\\'),
        b'b' => Some('\u{08}'),
        b'f' => Some('\u{0C}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'v' => Some('\u{0B}'),
        _ => None,
    }
}

#[inline]
pub(crate) const fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// Numeric value of an ASCII hex (or octal) digit. Callers validate first.
#[inline]
pub(crate) const fn digit_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a' + 10) as u32,
        b'A'..=b'F' => (b - b'A' + 10) as u32,
        _ => 0,
    }
}
