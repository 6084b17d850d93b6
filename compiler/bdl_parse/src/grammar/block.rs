//! Attributed item loop.
//!
//! The document and every bracketed body share one shape: a run of items,
//! each optionally preceded by attributes. `#` attributes found along the way
//! belong to the enclosing block, `@` attributes to the item that follows.

use bdl_ir::ast::{Attribute, Attributed};

use super::attr::collect_attributes;
use super::tokens::IDENT;
use crate::pattern::Pattern;
use crate::{Cursor, ParseResult};

/// Items of a block plus the inner attributes collected between them.
pub(crate) struct Block<T> {
    pub attributes: Vec<Attribute>,
    pub items: Vec<T>,
}

/// Parse items until `item` stops matching.
///
/// `@` attributes with no item after them are an error expecting
/// `orphan_expected` (the block's closing token, or the statement keywords
/// at document scope). A stray word in its place is reported whole.
pub(crate) fn attributed_items<'s, T: Attributed>(
    cursor: &mut Cursor<'s>,
    orphan_expected: &[Pattern],
    mut item: impl FnMut(&mut Cursor<'s>) -> ParseResult<Option<T>>,
) -> ParseResult<Block<T>> {
    let mut block = Block {
        attributes: Vec::new(),
        items: Vec::new(),
    };
    loop {
        let (inner, outer) = collect_attributes(cursor)?;
        block.attributes.extend(inner);

        let Some(mut node) = item(cursor)? else {
            if !outer.is_empty() {
                return Err(cursor.syntax_error(orphan_expected.to_vec(), &[IDENT]));
            }
            return Ok(block);
        };
        node.prepend_attributes(outer);
        block.items.push(node);
    }
}
