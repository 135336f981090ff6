//! Decoder leniency settings.
//!
//! The server itself is lenient about both cases covered here, but dumps
//! produced by `pg_dump` never contain either, so a caller validating
//! third-party input may want to refuse them.

/// What to do with `\` followed by a character that has no escape meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownEscape {
    /// Emit the following character literally (`\q` decodes to `q`).
    #[default]
    PassThrough,
    /// Fail with [`UnrecognizedEscape`](crate::DecodeErrorKind::UnrecognizedEscape).
    Reject,
}

/// What to do with `\x` not followed by any hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyHex {
    /// Fail with [`InvalidEscapeValue`](crate::DecodeErrorKind::InvalidEscapeValue).
    #[default]
    Reject,
    /// Decode `\x` as a literal `x`.
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub unknown_escape: UnknownEscape,
    pub empty_hex: EmptyHex,
}

impl DecodeOptions {
    /// Rejects every escape the format does not define.
    pub const STRICT: Self = Self {
        unknown_escape: UnknownEscape::Reject,
        empty_hex: EmptyHex::Reject,
    };

    /// Accepts everything the server accepts.
    pub const LENIENT: Self = Self {
        unknown_escape: UnknownEscape::PassThrough,
        empty_hex: EmptyHex::Literal,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self {
            unknown_escape: UnknownEscape::PassThrough,
            empty_hex: EmptyHex::Reject,
        }
    }

    #[must_use]
    pub const fn unknown_escape(mut self, policy: UnknownEscape) -> Self {
        self.unknown_escape = policy;
        self
    }

    #[must_use]
    pub const fn empty_hex(mut self, policy: EmptyHex) -> Self {
        self.empty_hex = policy;
        self
    }
}
