//! Parse errors.
//!
//! A parse stops at the first failure. [`ParseError::Syntax`] is the only
//! variant a schema author can cause; the others report inputs or grammar
//! wiring the parser cannot handle at all.

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use std::fmt;

use bdl_diagnostic::LineCol;

use crate::pattern::Pattern;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(Box<SyntaxError>),

    /// The attempt counter passed its budget. Indicates a production that
    /// loops without consuming input.
    #[error("parser made {attempts} match attempts, exceeding its budget of {budget}")]
    Runaway { attempts: usize, budget: usize },

    /// Spans are `u32` offsets, so longer sources cannot be addressed.
    #[error("source of {0} bytes exceeds the u32::MAX byte limit")]
    SourceTooLarge(usize),
}

impl ParseError {
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(error: SyntaxError) -> Self {
        ParseError::Syntax(Box::new(error))
    }
}

/// What was found at the failing offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Found {
    Text(String),
    Eof,
}

impl Found {
    /// Width of the caret drawn under the finding.
    pub fn caret_width(&self) -> usize {
        match self {
            Found::Text(text) => text.chars().count().max(1),
            Found::Eof => 1,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Text(text) => write!(f, "{text:?}"),
            Found::Eof => f.write_str("<EOF>"),
        }
    }
}

/// The input does not match the grammar at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset of the failure.
    pub offset: usize,
    /// Zero-based position of `offset`.
    pub position: LineCol,
    /// Patterns that would have let the parse continue.
    pub expected: Vec<Pattern>,
    /// Patterns tried against the input to describe `found`.
    pub mistakes: Vec<Pattern>,
    pub found: Found,
    /// Source lines around the failure with a caret under `found`.
    pub snippet: String,
}

impl SyntaxError {
    /// `expected "}" or identifier` without the `expected` prefix.
    pub fn expected_text(&self) -> String {
        self.expected
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at line {}, column {}:\n\nexpected {}, got {}\n\n{}",
            self.position.line + 1,
            self.position.column + 1,
            self.expected_text(),
            self.found,
            self.snippet
        )
    }
}

impl std::error::Error for SyntaxError {}
