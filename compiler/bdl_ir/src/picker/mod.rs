//! Offset lookups for editor tooling.
//!
//! Hover and go-to-definition need to know what sits under the cursor. These
//! helpers answer that from the tree alone without re-reading the source.

#[cfg(test)]
mod tests;

use crate::ast::{Attributed, Module, Statement, TypeExpression};
use crate::Span;

/// Extent of a statement including the outer attributes written before it.
pub fn statement_extent(statement: &Statement) -> Span {
    let span = statement.span();
    match statement.attributes().first() {
        Some(attribute) => attribute.span().merge(span),
        None => span,
    }
}

/// The statement whose extent contains `offset`.
pub fn pick_statement(module: &Module, offset: u32) -> Option<&Statement> {
    module
        .statements
        .iter()
        .find(|statement| statement_extent(statement).contains(offset))
}

/// The type name span under `offset`, either a value type or a map key type.
///
/// Only type expressions of the statement under `offset` are searched.
/// Imports and enums carry no type expressions.
pub fn pick_type(module: &Module, offset: u32) -> Option<Span> {
    let statement = pick_statement(module, offset)?;
    match statement {
        Statement::Import(_) | Statement::Enum(_) => None,
        Statement::Custom(node) => pick_in(&node.original_type, offset),
        Statement::Oneof(node) => node
            .items
            .iter()
            .find_map(|item| pick_in(&item.item_type, offset)),
        Statement::Proc(node) => [&node.input_type, &node.output_type]
            .into_iter()
            .chain(node.error.as_ref().map(|clause| &clause.error_type))
            .find_map(|ty| pick_in(ty, offset)),
        Statement::Struct(node) => node
            .fields
            .iter()
            .find_map(|field| pick_in(&field.field_type, offset)),
        Statement::Union(node) => node
            .items
            .iter()
            .filter_map(|item| item.body.as_ref())
            .flat_map(|body| &body.fields)
            .find_map(|field| pick_in(&field.field_type, offset)),
    }
}

fn pick_in(ty: &TypeExpression, offset: u32) -> Option<Span> {
    if ty.value_type.contains(offset) {
        return Some(ty.value_type);
    }
    ty.container
        .as_ref()
        .and_then(|container| container.key_type)
        .filter(|key_type| key_type.contains(offset))
}
