//! `enum Name { A, B }`

use bdl_ir::ast::{Enum, EnumItem};

use crate::grammar::block::attributed_items;
use crate::grammar::tokens::{BRACE_CLOSE, BRACE_OPEN, IDENT, KW_ENUM};
use crate::grammar::{accept_ident, expect_ident, skip_trivia, trailing_comma};
use crate::{Cursor, ParseResult};

pub(crate) fn enum_def(cursor: &mut Cursor<'_>) -> ParseResult<Option<Enum>> {
    let Some(keyword) = cursor.accept(KW_ENUM)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let bracket_open = cursor.expect(BRACE_OPEN, &[], &[IDENT])?;
    let body = attributed_items(cursor, &[BRACE_CLOSE], enum_item)?;
    let bracket_close = cursor.expect(BRACE_CLOSE, &[], &[IDENT])?;

    Ok(Some(Enum {
        attributes: body.attributes,
        keyword,
        name,
        bracket_open,
        items: body.items,
        bracket_close,
    }))
}

fn enum_item(cursor: &mut Cursor<'_>) -> ParseResult<Option<EnumItem>> {
    let Some(name) = accept_ident(cursor)? else {
        return Ok(None);
    };
    let comma = trailing_comma(cursor)?;
    Ok(Some(EnumItem {
        attributes: Vec::new(),
        name,
        comma,
    }))
}
