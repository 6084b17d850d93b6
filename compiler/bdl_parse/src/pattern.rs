//! Token patterns.
//!
//! The parser has no separate lexer. Every production asks the cursor to
//! match a [`Pattern`] directly at the current offset.


use std::fmt;

use once_cell::sync::OnceCell;
use regex::Regex;

/// Something the cursor can match at its current offset.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Pattern {
    /// Exact text.
    Literal(&'static str),
    /// Exact text not followed by an identifier character.
    Keyword(&'static str),
    /// Named regular expression, anchored at the offset.
    Regex(&'static TokenRegex),
    /// End of input. Matches with a zero-width span.
    Eof,
}

impl Pattern {
    /// Byte offset just past the match at `pos`, if the pattern matches there.
    pub fn match_at(self, source: &str, pos: usize) -> Option<usize> {
        let rest = source.get(pos..)?;
        match self {
            Pattern::Literal(text) => rest.starts_with(text).then_some(pos + text.len()),
            Pattern::Keyword(text) => {
                let after = rest.strip_prefix(text)?;
                (!after.starts_with(is_ident_char)).then_some(pos + text.len())
            }
            Pattern::Regex(token) => token.find_prefix(rest).map(|len| pos + len),
            Pattern::Eof => rest.is_empty().then_some(pos),
        }
    }
}

/// Literals and keywords are quoted, regexes show their name.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) | Pattern::Keyword(text) => write!(f, "{text:?}"),
            Pattern::Regex(token) => f.write_str(token.name),
            Pattern::Eof => f.write_str("<EOF>"),
        }
    }
}

/// A regular expression with a display name, compiled on first use.
///
/// Sources must start with `^` so matches are anchored at the offset.
pub struct TokenRegex {
    name: &'static str,
    source: &'static str,
    compiled: OnceCell<Regex>,
}

impl TokenRegex {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        TokenRegex {
            name,
            source,
            compiled: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    #[expect(
        clippy::expect_used,
        reason = "sources are string constants, each one compiled by the grammar token tests"
    )]
    fn regex(&self) -> &Regex {
        self.compiled
            .get_or_init(|| Regex::new(self.source).expect("token regex source must compile"))
    }

    /// Length of the match at the very start of `text`.
    fn find_prefix(&self, text: &str) -> Option<usize> {
        self.regex()
            .find(text)
            .filter(|found| found.start() == 0)
            .map(|found| found.end())
    }
}

impl PartialEq for TokenRegex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.source == other.source
    }
}

impl Eq for TokenRegex {}

impl fmt::Debug for TokenRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRegex")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
