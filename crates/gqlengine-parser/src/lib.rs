//! A GraphQL parsing library for schema documents, executable documents and
//! documents that mix both together.
//!
//! The lexer ([`token_source::StrGraphQLTokenSource`]) feeds a single-token
//! lookahead [`GraphQLTokenStream`], which the recursive descent
//! [`GraphQLParser`] turns into an owned [`ast::Document`]. Every AST node
//! can be printed back to GraphQL text via [`ast::AstNode`].

pub mod ast;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod location;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parse_error_kind::ValueParsingError;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::MAX_RECURSION_DEPTH;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use location::Location;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parse a document of operations and fragments.
pub fn parse_executable_document(
    source: &str,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

/// Parse a type-system (SDL) document.
pub fn parse_schema_document(
    source: &str,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_schema_document()
}

/// Parse a document that may contain both executable and type-system
/// definitions.
pub fn parse_mixed_document(
    source: &str,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_mixed_document()
}

#[cfg(test)]
mod tests;
