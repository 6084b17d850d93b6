//! BDL Parser
//!
//! Recursive-descent parser from schema text to the [`bdl_ir::ast`] tree.
//! There is no token stream; productions match patterns straight against the
//! source through a [`Cursor`], backtracking with offset snapshots.
//!
//! ```
//! let source = "struct Point { x: Int, y: Int }";
//! let module = bdl_parse::parse(source).unwrap();
//! assert_eq!(module.statements.len(), 1);
//! ```
//!
//! Parsing stops at the first error. A [`SyntaxError`] carries the failing
//! offset, the patterns that would have been accepted there, and a rendered
//! source snippet ready to print.

pub mod combinator;
mod cursor;
mod error;
mod grammar;
mod pattern;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, Snapshot};
pub use error::{Found, ParseError, SyntaxError};
pub use pattern::{Pattern, TokenRegex};

use bdl_ir::ast::Module;
use tracing::debug;

pub type ParseResult<T> = Result<T, ParseError>;

/// Parser tuning.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParseOptions {
    /// Match attempts allowed per source byte (plus one) before the parse
    /// is aborted as runaway.
    pub attempt_factor: usize,
    /// Lines of context rendered into syntax error snippets.
    pub context_window: usize,
}

impl ParseOptions {
    pub const DEFAULT_ATTEMPT_FACTOR: usize = 32;
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            attempt_factor: Self::DEFAULT_ATTEMPT_FACTOR,
            context_window: bdl_diagnostic::DEFAULT_WINDOW,
        }
    }
}

/// Parse a schema document with default options.
pub fn parse(source: &str) -> ParseResult<Module> {
    parse_with(source, &ParseOptions::default())
}

/// Parse a schema document.
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseResult<Module> {
    debug!(len = source.len(), "parse");
    let mut cursor = Cursor::new(source, options)?;
    let module = grammar::module(&mut cursor)?;
    debug!(
        statements = module.statements.len(),
        attributes = module.attributes.len(),
        attempts = cursor.attempts(),
        "parse finished"
    );
    Ok(module)
}
