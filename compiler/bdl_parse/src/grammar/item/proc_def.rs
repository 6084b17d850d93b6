//! `proc Name = Input -> Output throws Error`

use bdl_ir::ast::{Proc, ThrowsClause};

use crate::grammar::tokens::{ARROW, EQ, IDENT, KW_PROC, KW_THROWS};
use crate::grammar::ty::expect_type_expression;
use crate::grammar::{expect_ident, skip_trivia};
use crate::{Cursor, ParseResult};

pub(crate) fn proc_def(cursor: &mut Cursor<'_>) -> ParseResult<Option<Proc>> {
    let Some(keyword) = cursor.accept(KW_PROC)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let eq = cursor.expect(EQ, &[], &[IDENT])?;
    skip_trivia(cursor)?;
    let input_type = expect_type_expression(cursor)?;
    skip_trivia(cursor)?;
    let arrow = cursor.expect(ARROW, &[], &[IDENT])?;
    skip_trivia(cursor)?;
    let output_type = expect_type_expression(cursor)?;
    let error = throws_clause(cursor)?;

    Ok(Some(Proc {
        attributes: Vec::new(),
        keyword,
        name,
        eq,
        input_type,
        arrow,
        output_type,
        error,
    }))
}

fn throws_clause(cursor: &mut Cursor<'_>) -> ParseResult<Option<ThrowsClause>> {
    let before = cursor.snapshot();
    skip_trivia(cursor)?;
    let Some(keyword_throws) = cursor.accept(KW_THROWS)? else {
        cursor.restore(before);
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let error_type = expect_type_expression(cursor)?;
    Ok(Some(ThrowsClause {
        keyword_throws,
        error_type,
    }))
}
