//! Leniency settings and malformed tokens.

use std::borrow::Cow;

use pgcopy_codec::{
    DecodeErrorKind, DecodeOptions, EmptyHex, UnknownEscape, decode_copy_value,
    decode_copy_value_with,
};

fn decode_with(token: &str, options: &DecodeOptions) -> Result<Option<String>, DecodeErrorKind> {
    decode_copy_value_with(token, options)
        .map(|v| v.map(Cow::into_owned))
        .map_err(|e| e.kind)
}

#[test]
fn default_options() {
    let options = DecodeOptions::default();
    assert_eq!(options, DecodeOptions::new());
    assert_eq!(options.unknown_escape, UnknownEscape::PassThrough);
    assert_eq!(options.empty_hex, EmptyHex::Reject);
}

#[test]
fn builder_sets_policies() {
    let options = DecodeOptions::new()
        .unknown_escape(UnknownEscape::Reject)
        .empty_hex(EmptyHex::Literal);
    assert_eq!(options.unknown_escape, UnknownEscape::Reject);
    assert_eq!(options.empty_hex, EmptyHex::Literal);
}

#[test]
fn strict_rejects_unknown_escape() {
    assert_eq!(
        decode_with(r"ok\q", &DecodeOptions::STRICT),
        Err(DecodeErrorKind::UnrecognizedEscape)
    );
}

#[test]
fn strict_still_accepts_defined_escapes() {
    assert_eq!(
        decode_with(r"\\\b\f\n\r\t\v\x41\101", &DecodeOptions::STRICT),
        Ok(Some("\\\u{08}\u{0C}\n\r\t\u{0B}AA".into()))
    );
}

#[test]
fn strict_still_decodes_null() {
    assert_eq!(decode_with(r"\N", &DecodeOptions::STRICT), Ok(None));
}

#[test]
fn lenient_hex_without_digits_is_literal_x() {
    assert_eq!(
        decode_with(r"\x", &DecodeOptions::LENIENT),
        Ok(Some("x".into()))
    );
    assert_eq!(
        decode_with(r"a\xg", &DecodeOptions::LENIENT),
        Ok(Some("axg".into()))
    );
}

#[test]
fn lenient_hex_with_digits_is_unchanged() {
    assert_eq!(
        decode_with(r"\x41", &DecodeOptions::LENIENT),
        Ok(Some("A".into()))
    );
}

#[test]
fn unterminated_fails_under_every_policy() {
    for options in [
        DecodeOptions::default(),
        DecodeOptions::STRICT,
        DecodeOptions::LENIENT,
    ] {
        assert_eq!(
            decode_with(r"x\", &options),
            Err(DecodeErrorKind::UnterminatedEscape)
        );
    }
}

#[test]
fn error_positions_point_at_the_backslash() {
    let err = decode_copy_value(r"\t\t\xq").unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::InvalidEscapeValue);
    assert_eq!(err.position, 4);

    let err = decode_copy_value_with("ä\\q", &DecodeOptions::STRICT).unwrap_err();
    assert_eq!(err.position, 2);
}

#[test]
fn no_partial_result_on_error() {
    // A valid prefix does not leak out when a later escape is malformed.
    assert!(decode_copy_value(r"\n\n\n\").is_err());
}

#[test]
fn escaped_newline_character_passes_through() {
    // A raw newline after `\` is not a named escape; it is taken literally.
    assert_eq!(
        decode_with("a\\\nb", &DecodeOptions::default()),
        Ok(Some("a\nb".into()))
    );
    assert_eq!(
        decode_with("a\\\nb", &DecodeOptions::STRICT),
        Err(DecodeErrorKind::UnrecognizedEscape)
    );
}

#[test]
fn nul_code_point_is_allowed() {
    assert_eq!(
        decode_with(r"\000\x0", &DecodeOptions::default()),
        Ok(Some("\0\0".into()))
    );
}

#[test]
fn backslash_runs() {
    assert_eq!(
        decode_with(r"\\\\\\", &DecodeOptions::default()),
        Ok(Some(r"\\\".into()))
    );
    assert_eq!(
        decode_with(r"\\\\\", &DecodeOptions::default()),
        Err(DecodeErrorKind::UnterminatedEscape)
    );
}
