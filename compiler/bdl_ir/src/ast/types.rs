//! Type expressions and dotted paths.

use crate::Span;

/// `Name`, `Name[]` or `Name[Key]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeExpression {
    pub value_type: Span,
    pub container: Option<Container>,
}

/// Bracketed suffix of a type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub bracket_open: Span,
    /// Present for keyed (map-like) containers.
    pub key_type: Option<Span>,
    pub bracket_close: Span,
}

/// Shape of a type expression, derived from its container.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeShape {
    /// No brackets.
    Scalar,
    /// `[]`
    Sequence,
    /// `[Key]`
    Map { key_type: Span },
}

impl TypeExpression {
    pub fn shape(&self) -> TypeShape {
        match &self.container {
            None => TypeShape::Scalar,
            Some(Container { key_type: None, .. }) => TypeShape::Sequence,
            Some(Container {
                key_type: Some(key_type),
                ..
            }) => TypeShape::Map {
                key_type: *key_type,
            },
        }
    }

    /// Extent from the value type to the closing bracket, if any.
    pub fn span(&self) -> Span {
        match &self.container {
            Some(container) => self.value_type.merge(container.bracket_close),
            None => self.value_type,
        }
    }
}

/// One element of a dotted path.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathItem {
    Identifier(Span),
    Dot(Span),
}

impl PathItem {
    pub fn span(self) -> Span {
        match self {
            PathItem::Identifier(span) | PathItem::Dot(span) => span,
        }
    }
}

/// Dotted import target: alternating identifiers and dots, starting with an
/// identifier. A path written with a trailing dot ends with a `Dot`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub items: Vec<PathItem>,
}

impl Path {
    /// Identifier segments, skipping the dots.
    pub fn segments(&self) -> impl Iterator<Item = Span> + '_ {
        self.items.iter().filter_map(|item| match item {
            PathItem::Identifier(span) => Some(*span),
            PathItem::Dot(_) => None,
        })
    }

    pub fn has_trailing_dot(&self) -> bool {
        matches!(self.items.last(), Some(PathItem::Dot(_)))
    }

    /// Extent of the whole path, `None` for an empty path.
    pub fn span(&self) -> Option<Span> {
        let first = self.items.first()?.span();
        let last = self.items.last()?.span();
        Some(first.merge(last))
    }
}
