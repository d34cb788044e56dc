//! Immutable source location primitives.

use std::ops::Range;

/// Largest source length, in bytes, whose offsets fit in a [`ByteOffset`].
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Byte offset within a single source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteOffset(u32);

impl ByteOffset {
    /// Creates a byte offset value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an offset from `usize` with saturation.
    pub fn from_usize(value: usize) -> Self {
        match u32::try_from(value) {
            Ok(offset) => Self(offset),
            Err(_) => Self(u32::MAX),
        }
    }

    /// Returns the raw offset value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the offset to `usize`.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Immutable source span using byte offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: ByteOffset,
    /// Exclusive end byte offset.
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span and normalizes offset ordering.
    pub fn new(start: ByteOffset, end: ByteOffset) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Creates an empty span positioned at `offset`.
    pub fn empty_at(offset: ByteOffset) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the span length in bytes.
    pub fn len(self) -> u32 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` when the span contains no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range for slicing source text.
    pub fn as_range(self) -> Range<usize> {
        self.start.as_usize()..self.end.as_usize()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(
            ByteOffset::from_usize(range.start),
            ByteOffset::from_usize(range.end),
        )
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start.as_usize(), span.len() as usize).into()
    }
}
