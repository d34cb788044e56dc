//! Byte-offset to line/column mapping and compiler-style rendering.
//!
//! Everything here is a pure function of its arguments.

use crate::lexer::{ByteOffset, Span};
use crate::parser::SyntaxError;

/// Position of a byte offset within its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// Full text of the containing line, including its newline if present.
    pub line_text: &'a str,
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column, counted in runes.
    pub column: usize,
}

/// Maps `offset` in `source` to its line and column.
///
/// Offsets past the end are clamped to the end. An offset that falls inside a
/// multi-byte rune is treated as pointing at that rune.
pub fn locate(source: &str, offset: ByteOffset) -> Location<'_> {
    let mut offset = offset.as_usize().min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map_or(0, |index| index + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |index| offset + index + 1);
    let line = source[..line_start].matches('\n').count();
    let column = source[line_start..offset].chars().count();

    Location {
        line_text: &source[line_start..line_end],
        line,
        column,
    }
}

/// Formats `name:line:col` with one-based line and column numbers.
pub fn format_location(name: &str, location: &Location<'_>) -> String {
    format!("{name}:{}:{}", location.line + 1, location.column + 1)
}

/// Builds the two-line sample: the source line and a tilde underline.
///
/// The underline is as wide as the spanned text in runes, and at least one
/// column wide so empty spans stay visible.
pub fn sample(source: &str, span: Span) -> String {
    let location = locate(source, span.start);
    let width = source
        .get(span.as_range())
        .map_or(0, |text| text.chars().count())
        .max(1);

    let mut out = String::with_capacity(location.line_text.len() + location.column + width + 2);
    out.push_str(location.line_text);
    if !location.line_text.ends_with('\n') {
        out.push('\n');
    }
    out.extend(std::iter::repeat_n(' ', location.column));
    out.extend(std::iter::repeat_n('~', width));
    out.push('\n');
    out
}

/// Renders a diagnostic as three lines of text.
pub fn render(error: &SyntaxError) -> String {
    format!("{}: {}\n{}", error.location, error.message, error.sample)
}
