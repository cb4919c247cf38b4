use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::Location;

/// A syntax error with location information and contextual notes.
///
/// Parsing stops at the first error, so a failed parse produces exactly one
/// of these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{} (at {})", self.message, self.location())]
pub struct GraphQLParseError {
    /// Human-readable primary error message, e.g. "expected `:`".
    message: String,

    /// The primary span where the error was detected.
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// The 1-based location at which the error was detected.
    pub fn location(&self) -> Location {
        self.span.location()
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a multi-line diagnostic, optionally quoting the
    /// offending source line.
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> 1:18
    ///    |
    ///  1 | type User { name String }
    ///    |                  ^
    ///    = help: ...
    /// ```
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let loc = self.location();
        let mut out = format!("error: {}\n  --> {loc}\n", self.message);
        if let Some(line_text) =
            source.and_then(|src| src.lines().nth(loc.line - 1)) {
            let gutter = loc.line.to_string();
            let pad = " ".repeat(gutter.len());
            out.push_str(&format!("{pad} |\n{gutter} | {line_text}\n"));
            out.push_str(&format!(
                "{pad} | {}^\n",
                " ".repeat(loc.column.saturating_sub(1)),
            ));
        }
        for note in &self.notes {
            let prefix = match note.kind {
                crate::GraphQLErrorNoteKind::General => "note",
                crate::GraphQLErrorNoteKind::Help => "help",
                crate::GraphQLErrorNoteKind::Spec => "spec",
            };
            match &note.span {
                Some(span) => out.push_str(&format!(
                    "   = {prefix}: {} (at {})\n",
                    note.message,
                    span.location(),
                )),
                None => out.push_str(&format!(
                    "   = {prefix}: {}\n",
                    note.message,
                )),
            }
        }
        out
    }
}
