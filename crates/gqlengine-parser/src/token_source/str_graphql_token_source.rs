//! A [`GraphQLTokenSource`](super::GraphQLTokenSource) that lexes from a
//! `&str`.
//!
//! Token values borrow directly from the source string, so names, numbers
//! and strings are never copied during lexing.
//!
//! ```rust
//! use gqlengine_parser::token::GraphQLTokenKind;
//! use gqlengine_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 4);
//! assert_eq!(kinds[3], GraphQLTokenKind::Eof);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;
use std::borrow::Cow;

const INT_VALUE_SPEC_URL: &str =
    "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str =
    "https://spec.graphql.org/October2021/#sec-Float-Value";

/// Lexes a GraphQL document held in memory.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[byte_offset..]`.
    byte_offset: usize,

    /// 0-based line.
    line: usize,

    /// 0-based column, counted in characters.
    col: usize,

    /// Set after consuming `\r` so that a following `\n` does not count as a
    /// second line break.
    after_cr: bool,

    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            byte_offset: 0,
            line: 0,
            col: 0,
            after_cr: false,
            finished: false,
        }
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.byte_offset..]
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col, self.byte_offset)
    }

    fn span_from(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.current_position())
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        match ch {
            '\n' if self.after_cr => self.after_cr = false,
            '\n' | '\r' => {
                self.line += 1;
                self.col = 0;
                self.after_cr = ch == '\r';
            },
            _ => {
                self.col += 1;
                self.after_cr = false;
            },
        }
        self.byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Skips whitespace, line terminators, commas, comments and BOMs.
    fn skip_ignored(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}') => {
                    self.bump();
                },
                Some('#') => {
                    // A comment never spans a line terminator, so the column
                    // advances by the number of characters skipped.
                    let rest = self.remaining().as_bytes();
                    let len = memchr::memchr2(b'\n', b'\r', rest)
                        .unwrap_or(rest.len());
                    let comment = &self.remaining()[..len];
                    self.col += comment.chars().count();
                    self.byte_offset += len;
                    self.after_cr = false;
                },
                _ => return,
            }
        }
    }

    fn token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.span_from(start))
    }

    fn error(
        &self,
        message: impl Into<String>,
        notes: GraphQLErrorNotes,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.token(GraphQLTokenKind::error(message, notes), start)
    }

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.current_position();

        let Some(ch) = self.peek() else {
            return self.token(GraphQLTokenKind::Eof, start);
        };

        if let Some(kind) = single_char_punctuator(ch) {
            self.bump();
            return self.token(kind, start);
        }

        match ch {
            '.' => self.lex_ellipsis(start),
            '"' if self.remaining().starts_with("\"\"\"") => {
                self.lex_block_string(start)
            },
            '"' => self.lex_string(start),
            '-' | '0'..='9' => self.lex_number(start),
            c if is_name_start(c) => self.lex_name(start),
            c => {
                self.bump();
                self.error(
                    format!("unexpected character {}", describe_char(c)),
                    smallvec![],
                    start,
                )
            },
        }
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            for _ in 0..3 {
                self.bump();
            }
            return self.token(GraphQLTokenKind::Ellipsis, start);
        }

        self.bump_while(|c| c == '.');
        let dots = self.source[start.byte_offset()..self.byte_offset].len();
        let notes = if dots == 2 {
            smallvec![GraphQLErrorNote::help(
                "add one more `.` to form the spread operator `...`",
            )]
        } else {
            smallvec![]
        };
        self.error(
            format!("unexpected `{}`", ".".repeat(dots)),
            notes,
            start,
        )
    }

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.bump_while(is_name_continue);
        let name = &self.source[start.byte_offset()..self.byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.token(kind, start)
    }

    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.peek() == Some('-') {
            self.bump();
        }

        match self.peek() {
            Some('0') => {
                self.bump();
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return self.number_error(
                        "leading zeros are not allowed",
                        INT_VALUE_SPEC_URL,
                        start,
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => {
                self.bump_while(|c| c.is_ascii_digit());
            },
            _ => return self.error("unexpected `-`", smallvec![], start),
        }

        let mut is_float = false;

        if self.peek() == Some('.') {
            if !self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
                return self.number_error(
                    "a `.` must be followed by at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                    start,
                );
            }
            is_float = true;
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return self.number_error(
                    "an exponent must have at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                    start,
                );
            }
            self.bump_while(|c| c.is_ascii_digit());
        }

        // A number immediately followed by a name character or `.` is not a
        // valid token boundary (e.g. `123abc`, `1.2.3`).
        if self.peek().is_some_and(|c| c == '.' || is_name_start(c)) {
            return self.number_error(
                "a number must not be followed by a name or `.`",
                if is_float { FLOAT_VALUE_SPEC_URL } else { INT_VALUE_SPEC_URL },
                start,
            );
        }

        let text = Cow::Borrowed(&self.source[start.byte_offset()..self.byte_offset]);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(text)
        } else {
            GraphQLTokenKind::IntValue(text)
        };
        self.token(kind, start)
    }

    fn number_error(
        &mut self,
        message: &str,
        spec_url: &str,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.bump_while(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_')
        });
        let text = &self.source[start.byte_offset()..self.byte_offset];
        self.error(
            format!("invalid number `{text}`: {message}"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
            start,
        )
    }

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.bump();
        loop {
            match self.peek() {
                None | Some('\n' | '\r') => {
                    let open_span = GraphQLSourceSpan::new(
                        start,
                        SourcePosition::new(
                            start.line(),
                            start.col_utf8() + 1,
                            start.byte_offset() + 1,
                        ),
                    );
                    return self.error(
                        "unterminated string",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "string started here",
                                open_span,
                            ),
                            GraphQLErrorNote::help(
                                "use a block string (`\"\"\"`) for multi-line \
                                 text, or escape the newline with `\\n`",
                            ),
                        ],
                        start,
                    );
                },
                Some('"') => {
                    self.bump();
                    break;
                },
                Some('\\') => {
                    self.bump();
                    if self.peek().is_some_and(|c| c != '\n' && c != '\r') {
                        self.bump();
                    }
                },
                Some(c) if is_disallowed_source_char(c) => {
                    let char_start = self.current_position();
                    self.bump();
                    return self.error(
                        format!(
                            "invalid character {} in string",
                            describe_char(c),
                        ),
                        smallvec![],
                        char_start,
                    );
                },
                Some(_) => {
                    self.bump();
                },
            }
        }

        let text = &self.source[start.byte_offset()..self.byte_offset];
        self.token(GraphQLTokenKind::StringValue(Cow::Borrowed(text)), start)
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.bump();
        }
        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.error(
                    "unterminated block string",
                    smallvec![GraphQLErrorNote::help("add a closing `\"\"\"`")],
                    start,
                );
            }
            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.bump();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.bump();
                }
                break;
            } else {
                self.bump();
            }
        }

        let text = &self.source[start.byte_offset()..self.byte_offset];
        self.token(
            GraphQLTokenKind::BlockStringValue(Cow::Borrowed(text)),
            start,
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == GraphQLTokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn single_char_punctuator<'src>(ch: char) -> Option<GraphQLTokenKind<'src>> {
    Some(match ch {
        '&' => GraphQLTokenKind::Ampersand,
        '@' => GraphQLTokenKind::At,
        '!' => GraphQLTokenKind::Bang,
        ':' => GraphQLTokenKind::Colon,
        '}' => GraphQLTokenKind::CurlyBraceClose,
        '{' => GraphQLTokenKind::CurlyBraceOpen,
        '$' => GraphQLTokenKind::Dollar,
        '=' => GraphQLTokenKind::Equals,
        ')' => GraphQLTokenKind::ParenClose,
        '(' => GraphQLTokenKind::ParenOpen,
        '|' => GraphQLTokenKind::Pipe,
        ']' => GraphQLTokenKind::SquareBracketClose,
        '[' => GraphQLTokenKind::SquareBracketOpen,
        _ => return None,
    })
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters other than tab may not appear in string literals.
fn is_disallowed_source_char(ch: char) -> bool {
    (ch < '\u{0020}' && ch != '\t') || ch == '\u{007F}'
}

fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("U+{:04X}", ch as u32)
    } else {
        format!("`{ch}`")
    }
}
