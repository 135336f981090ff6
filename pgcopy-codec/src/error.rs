use core::fmt;

/// Specific kind of decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The token ends with a lone `\`.
    UnterminatedEscape,
    /// A numeric escape has no digits or does not name a valid code point.
    InvalidEscapeValue,
    /// `\` followed by a character with no defined meaning (strict mode only).
    UnrecognizedEscape,
    /// Output buffer is too small.
    BufferTooSmall,
}

impl DecodeErrorKind {
    /// Short snake_case name, stable across releases.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnterminatedEscape => "unterminated_escape",
            Self::InvalidEscapeValue => "invalid_escape_value",
            Self::UnrecognizedEscape => "unrecognized_escape",
            Self::BufferTooSmall => "buffer_too_small",
        }
    }
}

/// Error returned by decoding functions.
///
/// A malformed escape invalidates the whole field; no partial value is ever
/// returned alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    /// Byte offset in the token of the `\` that started the bad sequence.
    pub position: usize,
}

impl DecodeError {
    #[must_use]
    pub fn new(kind: DecodeErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            DecodeErrorKind::UnterminatedEscape => "unterminated escape sequence",
            DecodeErrorKind::InvalidEscapeValue => "invalid escape value",
            DecodeErrorKind::UnrecognizedEscape => "unrecognized escape sequence",
            DecodeErrorKind::BufferTooSmall => "output buffer too small",
        };
        write!(f, "{} at byte {}", desc, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Specific kind of encode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// Output buffer is too small.
    BufferTooSmall,
}

/// Error returned by [`encode_into`](crate::encode::encode_into).
///
/// The allocating encoder is total and never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeError {
    pub kind: EncodeErrorKind,
}

impl EncodeError {
    #[must_use]
    pub fn buffer_too_small() -> Self {
        Self {
            kind: EncodeErrorKind::BufferTooSmall,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EncodeErrorKind::BufferTooSmall => write!(f, "output buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
