//! Offset and line/column conversion.
//!
//! Lines are separated by `\n` only; a `\r` before it stays part of the line.
//! Positions are zero-based and columns count characters, not bytes.


use std::fmt;

use bdl_ir::Span;

/// Zero-based line and column of a position in a text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct LineCol {
    pub line: usize,
    /// Character count from the start of the line.
    pub column: usize,
}

impl LineCol {
    pub const fn new(line: usize, column: usize) -> Self {
        LineCol { line, column }
    }
}

/// Formats as one-based `line:column`, the way editors show positions.
impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Compute the position of a byte offset.
///
/// Walks the lines, subtracting each line's length plus its terminator until
/// the offset falls inside (or at the end of) the current line. Offsets past
/// the end of `text` clamp to the end of the last line.
pub fn offset_to_line_col(text: &str, offset: usize) -> LineCol {
    let mut remaining = offset;
    let mut last = LineCol::default();

    for (index, line) in text.split('\n').enumerate() {
        if remaining <= line.len() {
            return LineCol::new(index, char_count_before(line, remaining));
        }
        remaining -= line.len() + 1;
        last = LineCol::new(index, line.chars().count());
    }

    last
}

/// Compute the byte offset of a position.
///
/// Columns past the end of their line clamp to the line end, and lines past
/// the end of `text` clamp to `text.len()`.
pub fn line_col_to_offset(text: &str, position: LineCol) -> usize {
    let mut line_start = 0;

    for (index, line) in text.split('\n').enumerate() {
        if index == position.line {
            let column_bytes = line
                .char_indices()
                .nth(position.column)
                .map_or(line.len(), |(byte, _)| byte);
            return line_start + column_bytes;
        }
        line_start += line.len() + 1;
    }

    text.len()
}

/// Positions of both ends of a span.
pub fn span_to_line_cols(text: &str, span: Span) -> (LineCol, LineCol) {
    (
        offset_to_line_col(text, span.start as usize),
        offset_to_line_col(text, span.end as usize),
    )
}

/// Characters of `line` that start before byte `offset`.
fn char_count_before(line: &str, offset: usize) -> usize {
    line.char_indices()
        .take_while(|(byte, _)| *byte < offset)
        .count()
}
