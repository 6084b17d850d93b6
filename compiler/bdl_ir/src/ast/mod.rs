//! Concrete syntax tree for BDL schemas.
//!
//! Every node records the span of each significant token (keywords, names,
//! punctuation, separators) so downstream tools can map back to source and
//! reconstruct the original text modulo trivia. Nodes never hold decoded
//! strings; slice the source with [`Span::text`].
//!
//! # Attribute Order
//!
//! A node's `attributes` are in source order: the `@` attributes written in
//! front of it come first, followed by the `#` attributes collected inside
//! its body.

mod attribute;
mod items;
mod types;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use attribute::{Attribute, AttributeKind, Attributed};
pub use items::{
    Custom, Enum, EnumItem, Import, ImportAlias, ImportItem, Oneof, OneofItem, Proc, Struct,
    StructField, ThrowsClause, Union, UnionItem, UnionItemStruct,
};
pub use types::{Container, Path, PathItem, TypeExpression, TypeShape};

use crate::Span;

/// A parsed schema document.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    /// Inner (`#`) attributes at document scope.
    pub attributes: Vec<Attribute>,
    pub statements: Vec<Statement>,
}

/// Module-level statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Import(Import),
    Custom(Custom),
    Enum(Enum),
    Oneof(Oneof),
    Proc(Proc),
    Struct(Struct),
    Union(Union),
}

impl Statement {
    /// Keyword text introducing this kind of statement.
    pub fn keyword_str(&self) -> &'static str {
        match self {
            Statement::Import(_) => "import",
            Statement::Custom(_) => "custom",
            Statement::Enum(_) => "enum",
            Statement::Oneof(_) => "oneof",
            Statement::Proc(_) => "proc",
            Statement::Struct(_) => "struct",
            Statement::Union(_) => "union",
        }
    }

    pub fn keyword(&self) -> Span {
        match self {
            Statement::Import(node) => node.keyword,
            Statement::Custom(node) => node.keyword,
            Statement::Enum(node) => node.keyword,
            Statement::Oneof(node) => node.keyword,
            Statement::Proc(node) => node.keyword,
            Statement::Struct(node) => node.keyword,
            Statement::Union(node) => node.keyword,
        }
    }

    /// Declared name. Imports declare no name of their own.
    pub fn name(&self) -> Option<Span> {
        match self {
            Statement::Import(_) => None,
            Statement::Custom(node) => Some(node.name),
            Statement::Enum(node) => Some(node.name),
            Statement::Oneof(node) => Some(node.name),
            Statement::Proc(node) => Some(node.name),
            Statement::Struct(node) => Some(node.name),
            Statement::Union(node) => Some(node.name),
        }
    }

    /// Extent from the keyword to the last token, excluding attributes.
    pub fn span(&self) -> Span {
        let last = match self {
            Statement::Import(node) => node.bracket_close,
            Statement::Custom(node) => node.original_type.span(),
            Statement::Enum(node) => node.bracket_close,
            Statement::Oneof(node) => node.bracket_close,
            Statement::Proc(node) => node.end(),
            Statement::Struct(node) => node.bracket_close,
            Statement::Union(node) => node.bracket_close,
        };
        self.keyword().merge(last)
    }
}

impl Attributed for Statement {
    fn attributes(&self) -> &[Attribute] {
        match self {
            Statement::Import(node) => node.attributes(),
            Statement::Custom(node) => node.attributes(),
            Statement::Enum(node) => node.attributes(),
            Statement::Oneof(node) => node.attributes(),
            Statement::Proc(node) => node.attributes(),
            Statement::Struct(node) => node.attributes(),
            Statement::Union(node) => node.attributes(),
        }
    }

    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        match self {
            Statement::Import(node) => node.attributes_mut(),
            Statement::Custom(node) => node.attributes_mut(),
            Statement::Enum(node) => node.attributes_mut(),
            Statement::Oneof(node) => node.attributes_mut(),
            Statement::Proc(node) => node.attributes_mut(),
            Statement::Struct(node) => node.attributes_mut(),
            Statement::Union(node) => node.attributes_mut(),
        }
    }
}
