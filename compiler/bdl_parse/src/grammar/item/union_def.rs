//! `union Name { Unit, WithFields(a: A, b?: B) }`

use bdl_ir::ast::{Union, UnionItem, UnionItemStruct};

use super::struct_def::struct_field;
use crate::grammar::block::attributed_items;
use crate::grammar::tokens::{
    BRACE_CLOSE, BRACE_OPEN, IDENT, KW_UNION, PAREN_CLOSE, PAREN_OPEN,
};
use crate::grammar::{accept_ident, expect_ident, skip_trivia, trailing_comma};
use crate::{Cursor, ParseResult};

pub(crate) fn union_def(cursor: &mut Cursor<'_>) -> ParseResult<Option<Union>> {
    let Some(keyword) = cursor.accept(KW_UNION)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let bracket_open = cursor.expect(BRACE_OPEN, &[], &[IDENT])?;
    let body = attributed_items(cursor, &[BRACE_CLOSE], union_item)?;
    let bracket_close = cursor.expect(BRACE_CLOSE, &[], &[IDENT])?;

    Ok(Some(Union {
        attributes: body.attributes,
        keyword,
        name,
        bracket_open,
        items: body.items,
        bracket_close,
    }))
}

fn union_item(cursor: &mut Cursor<'_>) -> ParseResult<Option<UnionItem>> {
    let Some(name) = accept_ident(cursor)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let body = union_item_struct(cursor)?;
    let comma = trailing_comma(cursor)?;
    Ok(Some(UnionItem {
        attributes: Vec::new(),
        name,
        body,
        comma,
    }))
}

fn union_item_struct(cursor: &mut Cursor<'_>) -> ParseResult<Option<UnionItemStruct>> {
    let Some(bracket_open) = cursor.accept(PAREN_OPEN)? else {
        return Ok(None);
    };
    let body = attributed_items(cursor, &[PAREN_CLOSE], struct_field)?;
    let bracket_close = cursor.expect(PAREN_CLOSE, &[], &[IDENT])?;
    Ok(Some(UnionItemStruct {
        attributes: body.attributes,
        bracket_open,
        fields: body.items,
        bracket_close,
    }))
}
