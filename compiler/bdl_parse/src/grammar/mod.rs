//! Grammar Productions
//!
//! One function per production over a [`Cursor`]. Productions return
//! `Ok(Some(node))` when they matched, `Ok(None)` when the input does not
//! start with them (nothing consumed), and `Err` once they have committed
//! and the input turns out malformed.
//!
//! - [`attr`]: `#inner` / `@outer` attributes and their content
//! - [`block`]: the attributed item loop shared by the document and bodies
//! - [`item`]: statements (`import`, `custom`, `enum`, `oneof`, `proc`,
//!   `struct`, `union`)
//! - [`ty`]: type expressions and dotted paths
//!
//! Trivia (whitespace and `//` comments) is skipped explicitly between
//! tokens and never appears in a span.

mod attr;
mod block;
mod item;
mod tokens;
mod ty;


use bdl_ir::ast::{Module, Statement};
use bdl_ir::Span;
use tracing::debug;

use crate::combinator::{choice, ParseFn};
use crate::pattern::Pattern;
use crate::{Cursor, ParseResult};

use tokens::{COMMENT, IDENT, STATEMENT_KEYWORDS, WHITESPACE};

/// Parse a whole document.
pub(crate) fn module(cursor: &mut Cursor<'_>) -> ParseResult<Module> {
    let block = block::attributed_items(cursor, &STATEMENT_KEYWORDS, statement)?;
    cursor.expect(Pattern::Eof, &STATEMENT_KEYWORDS, &[IDENT])?;
    Ok(Module {
        attributes: block.attributes,
        statements: block.items,
    })
}

/// Any statement, tried in keyword order.
fn statement(cursor: &mut Cursor<'_>) -> ParseResult<Option<Statement>> {
    let alternatives: [ParseFn<'_, Statement>; 7] = [
        |cursor| Ok(item::custom(cursor)?.map(Statement::Custom)),
        |cursor| Ok(item::enum_def(cursor)?.map(Statement::Enum)),
        |cursor| Ok(item::import(cursor)?.map(Statement::Import)),
        |cursor| Ok(item::oneof(cursor)?.map(Statement::Oneof)),
        |cursor| Ok(item::proc_def(cursor)?.map(Statement::Proc)),
        |cursor| Ok(item::struct_def(cursor)?.map(Statement::Struct)),
        |cursor| Ok(item::union_def(cursor)?.map(Statement::Union)),
    ];
    let statement = choice(cursor, &alternatives)?;
    if let Some(statement) = &statement {
        debug!(
            keyword = statement.keyword_str(),
            span = ?statement.span(),
            "statement"
        );
    }
    Ok(statement)
}

/// Skip whitespace and line comments.
pub(crate) fn skip_trivia(cursor: &mut Cursor<'_>) -> ParseResult<()> {
    loop {
        if cursor.accept(WHITESPACE)?.is_some() {
            continue;
        }
        if cursor.accept(COMMENT)?.is_some() {
            continue;
        }
        return Ok(());
    }
}

pub(crate) fn accept_ident(cursor: &mut Cursor<'_>) -> ParseResult<Option<Span>> {
    cursor.accept(IDENT)
}

pub(crate) fn expect_ident(cursor: &mut Cursor<'_>) -> ParseResult<Span> {
    cursor.expect(IDENT, &[], &[])
}

/// Optional trailing comma after trivia.
pub(crate) fn trailing_comma(cursor: &mut Cursor<'_>) -> ParseResult<Option<Span>> {
    skip_trivia(cursor)?;
    cursor.accept(tokens::COMMA)
}
