//! `oneof Name { TypeA, TypeB[] }`

use bdl_ir::ast::{Oneof, OneofItem};

use crate::grammar::block::attributed_items;
use crate::grammar::tokens::{BRACE_CLOSE, BRACE_OPEN, IDENT, KW_ONEOF};
use crate::grammar::ty::type_expression;
use crate::grammar::{expect_ident, skip_trivia, trailing_comma};
use crate::{Cursor, ParseResult};

pub(crate) fn oneof(cursor: &mut Cursor<'_>) -> ParseResult<Option<Oneof>> {
    let Some(keyword) = cursor.accept(KW_ONEOF)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let bracket_open = cursor.expect(BRACE_OPEN, &[], &[IDENT])?;
    let body = attributed_items(cursor, &[BRACE_CLOSE], oneof_item)?;
    let bracket_close = cursor.expect(BRACE_CLOSE, &[], &[IDENT])?;

    Ok(Some(Oneof {
        attributes: body.attributes,
        keyword,
        name,
        bracket_open,
        items: body.items,
        bracket_close,
    }))
}

fn oneof_item(cursor: &mut Cursor<'_>) -> ParseResult<Option<OneofItem>> {
    let Some(item_type) = type_expression(cursor)? else {
        return Ok(None);
    };
    let comma = trailing_comma(cursor)?;
    Ok(Some(OneofItem {
        attributes: Vec::new(),
        item_type,
        comma,
    }))
}
