use crate::token::GraphQLToken;

/// Marker trait for anything that produces a stream of GraphQL tokens.
///
/// Implementors must:
/// - skip ignored tokens (whitespace, commas, comments, a leading BOM)
/// - emit `GraphQLTokenKind::Error` tokens for lexical errors rather than
///   panicking
/// - emit exactly one `Eof` token as the final item, then return `None`
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T
where
    T: Iterator<Item = GraphQLToken<'src>>,
{}
