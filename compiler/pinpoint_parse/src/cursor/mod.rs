//! Character cursor over the input text.
//!
//! Tracks a byte offset into the source; every offset it hands out is a
//! valid char boundary, so failures can be resolved without slicing errors.

use tracing::trace;

/// Cursor for navigating source characters.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the source.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The character under the cursor, if any.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds, returning the consumed text.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    /// Skip whitespace, returning whether any was consumed.
    pub fn skip_whitespace(&mut self) -> bool {
        !self.eat_while(char::is_whitespace).is_empty()
    }

    /// Skip to the next whitespace character or the end of input.
    ///
    /// Used to resynchronize after a malformed number.
    pub fn skip_to_whitespace(&mut self) {
        let from = self.pos;
        self.eat_while(|c| !c.is_whitespace());
        trace!(from, to = self.pos, "skipped malformed input");
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

#[cfg(test)]
mod tests;
