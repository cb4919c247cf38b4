use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`,
/// `BlockStringValue`) store only the raw source text; decoding happens in
/// the parser via the `parse_*` helpers below.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using
/// `Cow::Borrowed`.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a single-line string literal, including quotes.
    StringValue(Cow<'src, str>),

    /// Raw source text of a block string literal, including the surrounding
    /// triple quotes.
    BlockStringValue(Cow<'src, str>),

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    True,
    False,
    Null,

    /// End of input.
    Eof,

    /// A lexer error. The parser converts the first one it encounters into a
    /// [`GraphQLParseError`](crate::GraphQLParseError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::BlockStringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// A short, human-readable rendering used in "expected X, found Y"
    /// messages.
    pub fn display(&self) -> String {
        match self {
            GraphQLTokenKind::Name(name) => name.to_string(),
            GraphQLTokenKind::IntValue(raw)
            | GraphQLTokenKind::FloatValue(raw)
            | GraphQLTokenKind::StringValue(raw)
            | GraphQLTokenKind::BlockStringValue(raw) => raw.to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => message.clone(),
            punctuator => {
                punctuator.as_punctuator_str().unwrap_or_default().to_string()
            },
        }
    }

    /// Decode a `StringValue` or `BlockStringValue` token's raw text.
    ///
    /// Returns `None` if this is not a string token.
    pub fn parse_string_value(
        &self,
    ) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => {
                Some(parse_single_line_string(raw))
            },
            GraphQLTokenKind::BlockStringValue(raw) => {
                Some(parse_block_string(raw))
            },
            _ => None,
        }
    }
}

/// Parse a single-line string literal, processing escape sequences.
fn parse_single_line_string(
    raw: &str,
) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => {
                let code_point = parse_unicode_escape(&mut chars)?;
                result.push(decode_code_point(code_point, &mut chars)?);
            },
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(result)
}

/// Turns an escaped code point into a `char`, combining a leading surrogate
/// with a `\uXXXX` trailing surrogate that follows it.
fn decode_code_point(
    code_point: u32,
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, GraphQLStringParsingError> {
    let invalid = || {
        GraphQLStringParsingError::InvalidUnicodeEscape(format!(
            "\\u{code_point:04X}",
        ))
    };
    if !(0xD800..=0xDBFF).contains(&code_point) {
        return char::from_u32(code_point).ok_or_else(invalid);
    }
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
        return Err(invalid());
    }
    let trailing = parse_unicode_escape(&mut lookahead)?;
    if !(0xDC00..=0xDFFF).contains(&trailing) {
        return Err(invalid());
    }
    *chars = lookahead;
    let combined = 0x10000 + ((code_point - 0xD800) << 10) + (trailing - 0xDC00);
    char::from_u32(combined).ok_or_else(invalid)
}

/// Parse a Unicode escape sequence after seeing `\u`, either the fixed
/// `\uXXXX` form or the variable-length `\u{X...}` form.
fn parse_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::new();
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
    } else {
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}"),
                    ));
                },
            }
        }
    }

    let invalid = || {
        GraphQLStringParsingError::InvalidUnicodeEscape(if braced {
            format!("\\u{{{hex}}}")
        } else {
            format!("\\u{hex}")
        })
    };
    if hex.is_empty() || hex.len() > 6 {
        return Err(invalid());
    }
    u32::from_str_radix(&hex, 16).map_err(|_| invalid())
}

/// Decode a block string literal: strip the common indentation and leading
/// and trailing blank lines, and unescape `\"""`.
///
/// See [BlockStringValue()](https://spec.graphql.org/October2021/#BlockStringValue()).
pub(crate) fn parse_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 6 || !raw.starts_with("\"\"\"") || !raw.ends_with("\"\"\"") {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");

    let lines: Vec<&str> = split_block_string_lines(&content);
    let is_blank = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');
    let indent_of = |line: &str| {
        line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
    };

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_of(line))
        .min();

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            Some(indent) if i > 0 => {
                // Indentation characters are single-byte (space/tab).
                let strip = indent.min(indent_of(line));
                &line[strip..]
            },
            _ => line,
        })
        .collect();

    while result_lines.first().is_some_and(|l| is_blank(l)) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| is_blank(l)) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn split_block_string_lines(content: &str) -> Vec<&str> {
    let mut lines = vec![];
    let bytes = content.as_bytes();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[line_start..i]);
                line_start = i + 1;
            },
            b'\r' => {
                lines.push(&content[line_start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i + 1;
            },
            _ => (),
        }
        i += 1;
    }
    lines.push(&content[line_start..]);
    lines
}
