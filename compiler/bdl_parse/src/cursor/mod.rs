//! Cursor over the schema source.
//!
//! The cursor owns the only mutable parse state: the byte offset and the
//! attempt counter. The offset moves on a confirmed match or an explicit
//! [`Cursor::restore`]; the counter only ever grows.


use bdl_diagnostic::{offset_to_line_col, render_context};
use bdl_ir::Span;
use tracing::{debug, trace};

use crate::error::{Found, SyntaxError};
use crate::pattern::Pattern;
use crate::{ParseError, ParseOptions, ParseResult};

/// Saved cursor offset for backtracking.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Snapshot {
    pos: usize,
}

pub struct Cursor<'s> {
    source: &'s str,
    pos: usize,
    /// Match attempts so far, never reset by backtracking.
    attempts: usize,
    budget: usize,
    context_window: usize,
}

impl<'s> Cursor<'s> {
    /// Create a cursor at the start of `source`.
    ///
    /// Fails if `source` is too long for `u32` spans.
    pub fn new(source: &'s str, options: &ParseOptions) -> ParseResult<Self> {
        if u32::try_from(source.len()).is_err() {
            return Err(ParseError::SourceTooLarge(source.len()));
        }
        Ok(Cursor {
            source,
            pos: 0,
            attempts: 0,
            budget: options.attempt_factor.saturating_mul(source.len() + 1),
            context_window: options.context_window,
        })
    }

    #[inline]
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Source text of `span`.
    pub fn text(&self, span: Span) -> &'s str {
        span.text(self.source)
    }

    /// Unconsumed input.
    fn rest(&self) -> &'s str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    // Backtracking

    pub fn snapshot(&self) -> Snapshot {
        Snapshot { pos: self.pos }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        debug_assert!(
            snapshot.pos <= self.source.len(),
            "snapshot offset {} out of bounds",
            snapshot.pos
        );
        self.pos = snapshot.pos;
    }

    /// Run `f` and put the offset back where it was, whatever `f` returned.
    pub fn look<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    // Matching

    /// Consume `pattern` if it matches at the current offset.
    ///
    /// Every call counts against the attempt budget, matched or not.
    pub fn accept(&mut self, pattern: Pattern) -> ParseResult<Option<Span>> {
        self.attempts += 1;
        if self.attempts > self.budget {
            return Err(ParseError::Runaway {
                attempts: self.attempts,
                budget: self.budget,
            });
        }

        let Some(end) = pattern.match_at(self.source, self.pos) else {
            return Ok(None);
        };
        let span = self.span(self.pos, end)?;
        trace!(offset = self.pos, span = ?span, pattern = %pattern, "accept");
        self.pos = end;
        Ok(Some(span))
    }

    /// Consume `pattern` or fail with a syntax error.
    ///
    /// The error expects `pattern` followed by `extra_expected`, and tries
    /// `mistakes` to describe what was found instead.
    pub fn expect(
        &mut self,
        pattern: Pattern,
        extra_expected: &[Pattern],
        mistakes: &[Pattern],
    ) -> ParseResult<Span> {
        if let Some(span) = self.accept(pattern)? {
            return Ok(span);
        }
        let mut expected = Vec::with_capacity(extra_expected.len() + 1);
        expected.push(pattern);
        expected.extend_from_slice(extra_expected);
        Err(self.syntax_error(expected, mistakes))
    }

    /// Match without consuming and without counting an attempt.
    pub fn peek(&self, pattern: Pattern) -> Option<Span> {
        let end = pattern.match_at(self.source, self.pos)?;
        self.span(self.pos, end).ok()
    }

    fn span(&self, start: usize, end: usize) -> ParseResult<Span> {
        Span::try_from_range(start..end).map_err(|_| ParseError::SourceTooLarge(self.source.len()))
    }

    // Errors

    /// Syntax error at the current offset.
    pub fn syntax_error(&self, expected: Vec<Pattern>, mistakes: &[Pattern]) -> ParseError {
        let found = self.found(mistakes);
        let position = offset_to_line_col(self.source, self.pos);
        let snippet = render_context(
            self.source,
            self.pos,
            found.caret_width(),
            self.context_window,
        );
        debug!(
            offset = self.pos,
            line = position.line,
            column = position.column,
            found = %found,
            "syntax error"
        );
        SyntaxError {
            offset: self.pos,
            position,
            expected,
            mistakes: mistakes.to_vec(),
            found,
            snippet,
        }
        .into()
    }

    /// The first mistake pattern that matches here, else the next character.
    fn found(&self, mistakes: &[Pattern]) -> Found {
        let mistake = mistakes
            .iter()
            .filter_map(|&pattern| self.peek(pattern))
            .find(|span| !span.is_empty());
        if let Some(span) = mistake {
            return Found::Text(self.text(span).to_owned());
        }
        match self.rest().chars().next() {
            Some(next) => Found::Text(next.to_string()),
            None => Found::Eof,
        }
    }
}
