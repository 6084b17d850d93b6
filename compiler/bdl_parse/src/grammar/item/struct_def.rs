//! `struct Name { field: Type, optional?: Type[] }`
//!
//! Fields are shared with union item bodies.

use bdl_ir::ast::{Struct, StructField};

use crate::grammar::block::attributed_items;
use crate::grammar::tokens::{BRACE_CLOSE, BRACE_OPEN, COLON, IDENT, KW_STRUCT, QUESTION};
use crate::grammar::ty::expect_type_expression;
use crate::grammar::{accept_ident, expect_ident, skip_trivia, trailing_comma};
use crate::{Cursor, ParseResult};

pub(crate) fn struct_def(cursor: &mut Cursor<'_>) -> ParseResult<Option<Struct>> {
    let Some(keyword) = cursor.accept(KW_STRUCT)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let bracket_open = cursor.expect(BRACE_OPEN, &[], &[IDENT])?;
    let body = attributed_items(cursor, &[BRACE_CLOSE], struct_field)?;
    let bracket_close = cursor.expect(BRACE_CLOSE, &[], &[IDENT])?;

    Ok(Some(Struct {
        attributes: body.attributes,
        keyword,
        name,
        bracket_open,
        fields: body.items,
        bracket_close,
    }))
}

/// `name?: Type,`
pub(crate) fn struct_field(cursor: &mut Cursor<'_>) -> ParseResult<Option<StructField>> {
    let Some(name) = accept_ident(cursor)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let question = cursor.accept(QUESTION)?;
    skip_trivia(cursor)?;
    let colon = cursor.expect(COLON, &[], &[IDENT])?;
    skip_trivia(cursor)?;
    let field_type = expect_type_expression(cursor)?;
    let comma = trailing_comma(cursor)?;

    Ok(Some(StructField {
        attributes: Vec::new(),
        name,
        question,
        colon,
        field_type,
        comma,
    }))
}
