//! Diagnostic support for BDL tooling.
//!
//! Maps byte offsets to line/column positions and renders a window of source
//! lines with a caret under the failing column. Nothing here knows about the
//! grammar; the parser builds its syntax errors on top of these helpers.

mod snippet;
pub mod span_utils;

pub use snippet::{render_context, DEFAULT_CARET_WIDTH, DEFAULT_WINDOW};
pub use span_utils::{line_col_to_offset, offset_to_line_col, span_to_line_cols, LineCol};
