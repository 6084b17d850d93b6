//! `custom Name = Original`

use bdl_ir::ast::Custom;

use crate::grammar::tokens::{EQ, IDENT, KW_CUSTOM};
use crate::grammar::ty::expect_type_expression;
use crate::grammar::{expect_ident, skip_trivia};
use crate::{Cursor, ParseResult};

pub(crate) fn custom(cursor: &mut Cursor<'_>) -> ParseResult<Option<Custom>> {
    let Some(keyword) = cursor.accept(KW_CUSTOM)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let eq = cursor.expect(EQ, &[], &[IDENT])?;
    skip_trivia(cursor)?;
    let original_type = expect_type_expression(cursor)?;

    Ok(Some(Custom {
        attributes: Vec::new(),
        keyword,
        name,
        eq,
        original_type,
    }))
}
