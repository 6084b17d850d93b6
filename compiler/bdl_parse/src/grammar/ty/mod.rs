//! Type expressions and paths.
//!
//! Grammar:
//! ```text
//! type_expr = identifier [ "[" [ identifier ] "]" ] .
//! path      = identifier { "." identifier } [ "." ] .
//! ```

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use bdl_ir::ast::{Container, Path, PathItem, TypeExpression};

use super::tokens::{BRACKET_CLOSE, BRACKET_OPEN, DOT, IDENT};
use super::{accept_ident, skip_trivia};
use crate::combinator::flip_flop;
use crate::{Cursor, ParseResult};

/// `Name`, `Name[]` or `Name[Key]`.
pub(crate) fn type_expression(cursor: &mut Cursor<'_>) -> ParseResult<Option<TypeExpression>> {
    let Some(value_type) = accept_ident(cursor)? else {
        return Ok(None);
    };

    let before_suffix = cursor.snapshot();
    skip_trivia(cursor)?;
    let Some(bracket_open) = cursor.accept(BRACKET_OPEN)? else {
        cursor.restore(before_suffix);
        return Ok(Some(TypeExpression {
            value_type,
            container: None,
        }));
    };
    skip_trivia(cursor)?;
    let key_type = accept_ident(cursor)?;
    skip_trivia(cursor)?;
    let bracket_close = cursor.expect(BRACKET_CLOSE, &[], &[IDENT])?;

    Ok(Some(TypeExpression {
        value_type,
        container: Some(Container {
            bracket_open,
            key_type,
            bracket_close,
        }),
    }))
}

pub(crate) fn expect_type_expression(cursor: &mut Cursor<'_>) -> ParseResult<TypeExpression> {
    match type_expression(cursor)? {
        Some(ty) => Ok(ty),
        None => Err(cursor.syntax_error(vec![IDENT], &[])),
    }
}

/// Dotted path with at least one identifier.
pub(crate) fn expect_path(cursor: &mut Cursor<'_>) -> ParseResult<Path> {
    let separated = flip_flop(cursor, accept_ident, |cursor| cursor.accept(DOT), skip_trivia)?;
    if separated.is_empty() {
        return Err(cursor.syntax_error(vec![IDENT], &[]));
    }
    Ok(Path {
        items: separated.interleave(PathItem::Identifier, PathItem::Dot),
    })
}
