//! A single-token lookahead buffer over a [`GraphQLTokenSource`].

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLSourceSpan;

/// Wraps any [`GraphQLTokenSource`] and exposes exactly one token of
/// lookahead, which is all the GraphQL grammar needs.
///
/// Once the underlying source is exhausted the stream keeps yielding `Eof`
/// tokens positioned at the end of input, so the parser never has to handle
/// a missing token.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    current: GraphQLToken<'src>,
    prev_span: GraphQLSourceSpan,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLTokenStream<'src, TTokenSource>
{
    pub fn new(mut token_source: TTokenSource) -> Self {
        let current = token_source.next().unwrap_or_else(|| {
            GraphQLToken::new(GraphQLTokenKind::Eof, GraphQLSourceSpan::default())
        });
        Self {
            token_source,
            current,
            prev_span: GraphQLSourceSpan::default(),
        }
    }

    /// The next unconsumed token.
    #[inline]
    pub fn peek(&self) -> &GraphQLToken<'src> {
        &self.current
    }

    /// Advance past the current token and return it.
    pub fn consume(&mut self) -> GraphQLToken<'src> {
        let eof_span = GraphQLSourceSpan::new(
            self.current.span.end_exclusive,
            self.current.span.end_exclusive,
        );
        let next = self.token_source.next().unwrap_or_else(|| {
            GraphQLToken::new(GraphQLTokenKind::Eof, eof_span)
        });
        let token = std::mem::replace(&mut self.current, next);
        self.prev_span = token.span;
        token
    }

    /// The span of the most recently consumed token.
    pub fn prev_span(&self) -> GraphQLSourceSpan {
        self.prev_span
    }

    pub fn is_at_end(&self) -> bool {
        self.current.kind == GraphQLTokenKind::Eof
    }
}
