use crate::Location;

/// Source position information for a single point in a GraphQL document.
///
/// This is a pure data struct with no mutation methods. Lexers are responsible
/// for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// User-facing error locations are 1-based; use
/// [`to_location()`](Self::to_location) to convert.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(line: usize, col_utf8: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    ///
    /// This increments by 1 for each character regardless of byte
    /// representation.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Convert to a 1-based [`Location`] suitable for error responses.
    pub fn to_location(&self) -> Location {
        Location {
            line: self.line + 1,
            column: self.col_utf8 + 1,
        }
    }
}
