use crate::Location;
use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A span covering everything from the start of `self` to the end of
    /// `other`.
    pub fn to(&self, other: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        GraphQLSourceSpan {
            start_inclusive: self.start_inclusive,
            end_exclusive: other.end_exclusive,
        }
    }

    /// The 1-based location of the first character in this span.
    pub fn location(&self) -> Location {
        self.start_inclusive.to_location()
    }
}
