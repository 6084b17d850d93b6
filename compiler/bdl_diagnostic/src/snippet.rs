//! Source context rendering.
//!
//! ```text
//! 1 | struct S {
//! 2 |   a: }
//!          ^
//! 3 | enum E {}
//! ```


use std::fmt::Write;

use crate::span_utils::offset_to_line_col;

/// Lines of context shown around a failure by default.
pub const DEFAULT_WINDOW: usize = 5;

/// Caret width used when nothing better is known.
pub const DEFAULT_CARET_WIDTH: usize = 1;

/// Render the lines around `offset` with a caret line under it.
///
/// Shows the failing line, the line before it (when `window > 0`), and up to
/// `window / 2` lines after it, clipped to the document. Line numbers are
/// one-based and right-aligned to the widest number displayed.
pub fn render_context(text: &str, offset: usize, caret_width: usize, window: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let position = offset_to_line_col(text, offset);

    let head_count = ((window >> 1) + (window % 2)).min(1);
    let tail_count = window >> 1;

    let head_start = position.line.saturating_sub(head_count);
    let tail_start = position.line + 1;
    let tail_end = lines.len().min(position.line + tail_count + 1);
    let digits = tail_end.to_string().len();

    let mut out = String::new();
    for number in head_start..tail_start {
        push_line(&mut out, &lines, number, digits);
        out.push('\n');
    }
    out.push_str(&" ".repeat(digits + 3 + position.column));
    out.push_str(&"^".repeat(caret_width));
    for number in tail_start..tail_end {
        out.push('\n');
        push_line(&mut out, &lines, number, digits);
    }
    out
}

/// Append `"{n} | {line}"` for the zero-based line `index`, unterminated.
fn push_line(out: &mut String, lines: &[&str], index: usize, digits: usize) {
    let text = lines.get(index).copied().unwrap_or_default();
    // Writing to a String cannot fail.
    let _ = write!(out, "{:>digits$} | {text}", index + 1);
}
