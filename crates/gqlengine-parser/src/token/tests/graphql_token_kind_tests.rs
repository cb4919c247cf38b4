//! Tests for decoding string and block-string token text.

use crate::token::GraphQLTokenKind;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;

fn decode_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    GraphQLTokenKind::StringValue(Cow::Borrowed(raw))
        .parse_string_value()
        .unwrap()
}

fn decode_block(raw: &str) -> String {
    GraphQLTokenKind::BlockStringValue(Cow::Borrowed(raw))
        .parse_string_value()
        .unwrap()
        .unwrap()
}

#[test]
fn simple_escapes_decode() {
    assert_eq!(
        decode_string(r#""a\"b\\c\/d\n\t""#).unwrap(),
        "a\"b\\c/d\n\t",
    );
}

#[test]
fn fixed_width_unicode_escape_decodes() {
    assert_eq!(decode_string(r#""\u00e9t\u00E9""#).unwrap(), "été");
}

#[test]
fn braced_unicode_escape_decodes() {
    assert_eq!(decode_string(r#""\u{1F600}""#).unwrap(), "😀");
}

#[test]
fn surrogate_pair_escape_decodes() {
    assert_eq!(decode_string(r#""\uD83D\uDE00""#).unwrap(), "😀");
}

#[test]
fn lone_surrogate_is_rejected() {
    assert!(matches!(
        decode_string(r#""\uD83D""#),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn unknown_escape_is_rejected() {
    assert_eq!(
        decode_string(r#""\q""#),
        Err(GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string())),
    );
}

#[test]
fn non_string_tokens_do_not_decode() {
    assert!(GraphQLTokenKind::Null.parse_string_value().is_none());
}

#[test]
fn block_string_strips_common_indent() {
    let raw = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
    assert_eq!(
        decode_block(raw),
        "Hello,\n  World!\n\nYours,\n  GraphQL.",
    );
}

#[test]
fn block_string_first_line_keeps_its_indent() {
    assert_eq!(decode_block("\"\"\"  first\n  second\"\"\""), "  first\nsecond");
}

#[test]
fn block_string_does_not_process_escapes() {
    assert_eq!(decode_block(r#""""a\nb""""#), "a\\nb");
}

#[test]
fn block_string_unescapes_triple_quote() {
    assert_eq!(decode_block(r#""""say \""" please""""#), "say \"\"\" please");
}

#[test]
fn block_string_normalizes_line_endings() {
    assert_eq!(decode_block("\"\"\"\r\n  a\r  b\r\n\"\"\""), "a\nb");
}

#[test]
fn punctuator_display() {
    assert_eq!(GraphQLTokenKind::Ellipsis.display(), "...");
    assert_eq!(GraphQLTokenKind::Eof.display(), "end of input");
    assert!(GraphQLTokenKind::Pipe.is_punctuator());
    assert!(!GraphQLTokenKind::True.is_punctuator());
}
