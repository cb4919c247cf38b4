use crate::GraphQLStringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` of [`GraphQLParseError`].
///
/// [`GraphQLParseError`]: crate::GraphQLParseError
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected a specific token but found something else.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not form a valid token. The lexer's message and notes
    /// are preserved on the parent error.
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but never closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal could not be decoded (integer overflow, bad escape, ...).
    #[error("invalid value: {0}")]
    InvalidValue(ValueParsingError),

    /// A construct that must contain at least one item was empty (e.g. `{}`).
    #[error("empty {construct}")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A name with special meaning was used where it is not allowed
    /// (e.g. a fragment named `on`).
    #[error("reserved name `{name}`")]
    ReservedName {
        name: String,
    },

    /// Definitions of the wrong kind for the requested document kind, e.g. a
    /// type definition inside an executable document.
    #[error("{definition} is not allowed in {document_kind} documents")]
    WrongDefinitionKind {
        definition: String,
        document_kind: &'static str,
    },

    /// An unknown directive location name.
    #[error("unknown directive location `{0}`")]
    UnknownDirectiveLocation(String),

    /// Nesting exceeded the parser's recursion limit.
    #[error("nesting too deep")]
    RecursionLimitExceeded,
}

/// Errors produced while decoding literal token text into a value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    #[error("integer `{0}` does not fit in 64 bits")]
    IntOverflow(String),

    #[error("float `{0}` is not finite")]
    InvalidFloat(String),

    #[error(transparent)]
    String(#[from] GraphQLStringParsingError),
}
