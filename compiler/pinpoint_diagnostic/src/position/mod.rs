//! Resolved source positions.
//!
//! A [`Position`] is a line/column range inside a named file. Unlike a byte
//! span it is already resolved, so it can be rendered without the source.

use std::cmp::Ordering;
use std::fmt;

/// File name used when a position is not tied to any real file.
pub const NO_FILE: &str = "<no-file>";

/// A 1-based `(line, column)` pair.
pub type LineCol = (u32, u32);

/// A resolved source range.
///
/// Layout:
/// - `begin`: first `(line, column)` covered
/// - `end`: `(line, column)` one past the last covered character
/// - `file`: name of the file the range lives in
///
/// Equality and hashing use every field, so two positions in different files
/// are distinct map keys. Ordering is only available through
/// [`Position::compare`], which ignores the file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub begin: LineCol,
    pub end: LineCol,
    pub file: String,
}

impl Position {
    /// Create a new position.
    ///
    /// `begin` must not come after `end`.
    pub fn new(begin: LineCol, end: LineCol, file: impl Into<String>) -> Self {
        debug_assert!(
            begin <= end,
            "position begins after it ends: {begin:?} > {end:?}"
        );
        Position {
            begin,
            end,
            file: file.into(),
        }
    }

    /// Create a one-character position starting at `(line, column)`.
    pub fn point(line: u32, column: u32, file: impl Into<String>) -> Self {
        Self::new((line, column), (line, column.saturating_add(1)), file)
    }

    /// Compare two positions by `(begin, end)`, ignoring the file.
    ///
    /// This is a total order: lexicographic on begin, then on end.
    pub fn compare(&self, other: &Position) -> Ordering {
        (self.begin, self.end).cmp(&(other.begin, other.end))
    }

    /// Check whether the range covers more than one line.
    #[inline]
    pub fn is_multiline(&self) -> bool {
        self.begin.0 != self.end.0
    }

    /// Check whether the range is tied to a real file.
    #[inline]
    pub fn has_file(&self) -> bool {
        self.file != NO_FILE
    }
}

impl Default for Position {
    fn default() -> Self {
        Position {
            begin: (1, 1),
            end: (1, 1),
            file: NO_FILE.to_string(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}-{}:{}",
            self.file, self.begin.0, self.begin.1, self.end.0, self.end.1
        )
    }
}

#[cfg(test)]
mod tests;
