use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;

fn lex(source: &str) -> Vec<GraphQLToken<'_>> {
    StrGraphQLTokenSource::new(source).collect()
}

fn kinds(source: &str) -> Vec<GraphQLTokenKind<'_>> {
    lex(source).into_iter().map(|token| token.kind).collect()
}

fn name(s: &str) -> GraphQLTokenKind<'_> {
    GraphQLTokenKind::Name(Cow::Borrowed(s))
}

#[test]
fn punctuators_and_names() {
    assert_eq!(
        kinds("query Q($id: ID!) { ...F @skip }"),
        vec![
            name("query"),
            name("Q"),
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::Dollar,
            name("id"),
            GraphQLTokenKind::Colon,
            name("ID"),
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Ellipsis,
            name("F"),
            GraphQLTokenKind::At,
            name("skip"),
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn commas_comments_and_bom_are_ignored() {
    assert_eq!(
        kinds("\u{FEFF}a,,b # trailing comment\n,c"),
        vec![name("a"), name("b"), name("c"), GraphQLTokenKind::Eof],
    );
}

#[test]
fn keywords_true_false_null_are_distinct_tokens() {
    assert_eq!(
        kinds("true false null nullable"),
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            name("nullable"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn numbers_keep_raw_text() {
    assert_eq!(
        kinds("0 -12 1.5 -2e10 3.0E-2"),
        vec![
            GraphQLTokenKind::IntValue(Cow::Borrowed("0")),
            GraphQLTokenKind::IntValue(Cow::Borrowed("-12")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("1.5")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("-2e10")),
            GraphQLTokenKind::FloatValue(Cow::Borrowed("3.0E-2")),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn leading_zero_is_an_error() {
    let tokens = kinds("007");
    assert!(tokens[0].is_error());
}

#[test]
fn number_followed_by_name_is_an_error() {
    assert!(kinds("123abc")[0].is_error());
    assert!(kinds("1.2.3")[0].is_error());
}

#[test]
fn strings_and_block_strings() {
    assert_eq!(
        kinds(r#""a\"b" """block""""#),
        vec![
            GraphQLTokenKind::StringValue(Cow::Borrowed(r#""a\"b""#)),
            GraphQLTokenKind::BlockStringValue(Cow::Borrowed(r#""""block""""#)),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let tokens = lex("\"abc\nnext");
    match &tokens[0].kind {
        GraphQLTokenKind::Error { message, error_notes } => {
            assert!(message.contains("unterminated string"));
            assert!(!error_notes.is_empty());
        },
        other => panic!("expected an error token, got {other:?}"),
    }
}

#[test]
fn double_dot_suggests_ellipsis() {
    match &kinds("..")[0] {
        GraphQLTokenKind::Error { message, error_notes } => {
            assert_eq!(message, "unexpected `..`");
            assert_eq!(error_notes.len(), 1);
        },
        other => panic!("expected an error token, got {other:?}"),
    }
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = lex("{\n  hello\r\n  world }");
    let hello = &tokens[1];
    assert_eq!(hello.span.start_inclusive.line(), 1);
    assert_eq!(hello.span.start_inclusive.col_utf8(), 2);
    let world = &tokens[2];
    assert_eq!(world.span.start_inclusive.line(), 2);
    assert_eq!(world.span.start_inclusive.col_utf8(), 2);
    assert_eq!(world.span.location().line, 3);
    assert_eq!(world.span.location().column, 3);
}

#[test]
fn spans_end_after_the_last_character() {
    let tokens = lex("query  ...");
    assert_eq!(tokens[0].span.start_inclusive.byte_offset(), 0);
    assert_eq!(tokens[0].span.end_exclusive.byte_offset(), 5);
    assert_eq!(tokens[1].span.start_inclusive.col_utf8(), 7);
    assert_eq!(tokens[1].span.end_exclusive.col_utf8(), 10);
}

#[test]
fn comment_advances_column() {
    let tokens = lex("# é comment\nx");
    assert_eq!(tokens[0].span.start_inclusive.line(), 1);
    assert_eq!(tokens[0].span.start_inclusive.col_utf8(), 0);
}

#[test]
fn eof_is_emitted_exactly_once() {
    let mut source = StrGraphQLTokenSource::new("");
    assert_eq!(source.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(source.next().is_none());
}

#[test]
fn control_characters_in_strings_are_rejected() {
    assert!(kinds("\"a\u{0007}b\"")[0].is_error());
}
