//! Attributes
//!
//! `#name` annotates the enclosing block, `@name` annotates the next item.
//! Either form may carry content: a single `- text` line or one or more
//! `| text` continuation lines.

use crate::Span;

/// Which introducer an attribute was written with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// `#` - inner attribute, belongs to the enclosing block.
    Sharp,
    /// `@` - outer attribute, belongs to the following item.
    At,
}

impl AttributeKind {
    /// The introducer character as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            AttributeKind::Sharp => "#",
            AttributeKind::At => "@",
        }
    }

    #[inline]
    pub fn is_inner(self) -> bool {
        matches!(self, AttributeKind::Sharp)
    }
}

/// A single attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub kind: AttributeKind,
    /// Span of the `#` or `@`.
    pub symbol: Span,
    pub name: Span,
    /// Raw content including its `-` or `|` markers.
    pub content: Option<Span>,
}

impl Attribute {
    /// Extent from the introducer to the end of the content (or name).
    pub fn span(&self) -> Span {
        let last = self.content.unwrap_or(self.name);
        self.symbol.merge(last)
    }
}

/// Nodes that carry an attribute list.
///
/// The parser builds a node first and then splices in the outer attributes
/// that preceded it; this trait is the only mutation path it uses.
pub trait Attributed {
    fn attributes(&self) -> &[Attribute];

    fn attributes_mut(&mut self) -> &mut Vec<Attribute>;

    /// Prepend attributes that appeared before the node in source.
    fn prepend_attributes(&mut self, leading: Vec<Attribute>) {
        if leading.is_empty() {
            return;
        }
        self.attributes_mut().splice(0..0, leading);
    }
}
