//! Rune cursor over source text.

use crate::lexer::span::ByteOffset;

/// Byte-position cursor that advances one Unicode scalar value at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the rune at cursor position, or `None` at end of input.
    pub(crate) fn peek_char(&self, input: &str) -> Option<char> {
        input.get(self.offset.as_usize()..)?.chars().next()
    }

    /// Advances past the rune at cursor position.
    pub(crate) fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = self.peek_char(input)?;
        let next = self
            .offset
            .as_usize()
            .saturating_add(ch.len_utf8())
            .min(input.len());
        self.offset = ByteOffset::from_usize(next);
        Some(ch)
    }
}
