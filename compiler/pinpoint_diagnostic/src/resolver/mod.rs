//! Offset-to-position resolution.
//!
//! The bundle converter never looks at source text itself; it asks a
//! [`PositionResolver`] to turn each failure offset into a line, a column,
//! and a file name. Any `Fn(usize) -> SourcePos` closure is a resolver.
//! [`SourceResolver`] is the stock implementation over in-memory text.
//!
//! ## Performance
//!
//! [`SourceResolver`] pre-computes a [`LineOffsetTable`] once, giving
//! O(log L) line lookup per failure instead of rescanning the source.

/// A resolved offset: 1-based line and column plus the file name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
    pub file: String,
}

impl SourcePos {
    pub fn new(line: u32, column: u32, file: impl Into<String>) -> Self {
        SourcePos {
            line,
            column,
            file: file.into(),
        }
    }
}

/// Turns an input offset into a [`SourcePos`].
///
/// Must be deterministic for a fixed `(offset, source)` pair. Behaviour for
/// offsets outside the source is up to the implementation.
pub trait PositionResolver {
    fn resolve(&self, offset: usize) -> SourcePos;
}

impl<F> PositionResolver for F
where
    F: Fn(usize) -> SourcePos,
{
    fn resolve(&self, offset: usize) -> SourcePos {
        self(offset)
    }
}

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use pinpoint_diagnostic::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));  // 'l' in line1
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));  // 'l' in line2
/// assert_eq!(table.offset_to_line_col(source, 12), (3, 1)); // 'l' in line3
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        to_u32(line_idx) + 1
    }

    /// 1-based `(line, column)` of `offset`.
    ///
    /// Columns count characters, not bytes. Offsets past the end of `source`
    /// are clamped to its length; an offset inside a multi-byte character
    /// resolves to the column of that character's successor.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (u32, u32) {
        let offset = offset.min(source.len());
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0);

        // Count char starts, so a mid-character offset never splits a slice.
        let chars = source.as_bytes()[line_start..offset]
            .iter()
            .filter(|&&b| (b & 0xC0) != 0x80)
            .count();

        (line, to_u32(chars).saturating_add(1))
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start_offset(&self, line: u32) -> Option<usize> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Resolver over a single in-memory file.
#[derive(Clone, Debug)]
pub struct SourceResolver<'a> {
    file: String,
    source: &'a str,
    table: LineOffsetTable,
}

impl<'a> SourceResolver<'a> {
    pub fn new(file: impl Into<String>, source: &'a str) -> Self {
        SourceResolver {
            file: file.into(),
            source,
            table: LineOffsetTable::build(source),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}

impl PositionResolver for SourceResolver<'_> {
    fn resolve(&self, offset: usize) -> SourcePos {
        let (line, column) = self.table.offset_to_line_col(self.source, offset);
        SourcePos::new(line, column, self.file.clone())
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX - 1)
}

#[cfg(test)]
mod tests;
