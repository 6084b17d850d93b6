//! `import pkg.module { Name, Other as Alias }`
//!
//! Import lists take no attributes.

use bdl_ir::ast::{Import, ImportAlias, ImportItem};

use crate::combinator::zero_or_more;
use crate::grammar::tokens::{BRACE_CLOSE, BRACE_OPEN, IDENT, KW_AS, KW_IMPORT};
use crate::grammar::ty::expect_path;
use crate::grammar::{accept_ident, expect_ident, skip_trivia, trailing_comma};
use crate::{Cursor, ParseResult};

pub(crate) fn import(cursor: &mut Cursor<'_>) -> ParseResult<Option<Import>> {
    let Some(keyword) = cursor.accept(KW_IMPORT)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let path = expect_path(cursor)?;
    skip_trivia(cursor)?;
    let bracket_open = cursor.expect(BRACE_OPEN, &[], &[IDENT])?;
    let items = zero_or_more(cursor, |cursor| {
        skip_trivia(cursor)?;
        import_item(cursor)
    })?;
    let bracket_close = cursor.expect(BRACE_CLOSE, &[], &[IDENT])?;

    Ok(Some(Import {
        attributes: Vec::new(),
        keyword,
        path,
        bracket_open,
        items,
        bracket_close,
    }))
}

fn import_item(cursor: &mut Cursor<'_>) -> ParseResult<Option<ImportItem>> {
    let Some(name) = accept_ident(cursor)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let alias = import_alias(cursor)?;
    let comma = trailing_comma(cursor)?;
    Ok(Some(ImportItem { name, alias, comma }))
}

fn import_alias(cursor: &mut Cursor<'_>) -> ParseResult<Option<ImportAlias>> {
    let Some(keyword_as) = cursor.accept(KW_AS)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    Ok(Some(ImportAlias { keyword_as, name }))
}
