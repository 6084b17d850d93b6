//! Attribute parsing.
//!
//! Grammar: `attribute = ("#" | "@") identifier [ content ] .`
//!
//! Content is either one `- text` line or a run of `| text` lines:
//!
//! ```text
//! @doc - single line
//! @doc
//! | first line
//! | second line
//! ```


use bdl_ir::ast::{Attribute, AttributeKind};
use bdl_ir::Span;

use super::tokens::{ATTRIBUTE_CONTENT, AT, SHARP};
use super::{expect_ident, skip_trivia};
use crate::combinator::{choice, zero_or_more, ParseFn};
use crate::{Cursor, ParseResult};

/// Skip trivia and collect consecutive attributes, split into
/// `(inner, outer)` lists in source order.
pub(crate) fn collect_attributes(
    cursor: &mut Cursor<'_>,
) -> ParseResult<(Vec<Attribute>, Vec<Attribute>)> {
    let attributes = zero_or_more(cursor, |cursor| {
        skip_trivia(cursor)?;
        attribute(cursor)
    })?;
    Ok(attributes
        .into_iter()
        .partition(|attribute| attribute.kind.is_inner()))
}

fn attribute(cursor: &mut Cursor<'_>) -> ParseResult<Option<Attribute>> {
    let introducers: [ParseFn<'_, (AttributeKind, Span)>; 2] = [
        |cursor| Ok(cursor.accept(SHARP)?.map(|span| (AttributeKind::Sharp, span))),
        |cursor| Ok(cursor.accept(AT)?.map(|span| (AttributeKind::At, span))),
    ];
    let Some((kind, symbol)) = choice(cursor, &introducers)? else {
        return Ok(None);
    };
    skip_trivia(cursor)?;
    let name = expect_ident(cursor)?;
    skip_trivia(cursor)?;
    let content = cursor.accept(ATTRIBUTE_CONTENT)?;
    Ok(Some(Attribute {
        kind,
        symbol,
        name,
        content,
    }))
}
