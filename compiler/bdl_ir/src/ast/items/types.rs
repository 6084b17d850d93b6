//! Type declarations: `custom`, `enum`, `oneof`, `struct` and `union`.

use crate::ast::{Attribute, Attributed, TypeExpression};
use crate::Span;

/// `custom Name = Type`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Custom {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub eq: Span,
    pub original_type: TypeExpression,
}

/// `enum Name { A, B }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub bracket_open: Span,
    pub items: Vec<EnumItem>,
    pub bracket_close: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumItem {
    pub attributes: Vec<Attribute>,
    pub name: Span,
    pub comma: Option<Span>,
}

/// `oneof Name { TypeA, TypeB[] }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oneof {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub bracket_open: Span,
    pub items: Vec<OneofItem>,
    pub bracket_close: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneofItem {
    pub attributes: Vec<Attribute>,
    pub item_type: TypeExpression,
    pub comma: Option<Span>,
}

/// `struct Name { field: Type, other?: Type[] }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Struct {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub bracket_open: Span,
    pub fields: Vec<StructField>,
    pub bracket_close: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructField {
    pub attributes: Vec<Attribute>,
    pub name: Span,
    /// `?` marking the field optional.
    pub question: Option<Span>,
    pub colon: Span,
    pub field_type: TypeExpression,
    pub comma: Option<Span>,
}

impl StructField {
    #[inline]
    pub fn is_optional(&self) -> bool {
        self.question.is_some()
    }
}

/// `union Name { A, B(field: Type) }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Union {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub bracket_open: Span,
    pub items: Vec<UnionItem>,
    pub bracket_close: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionItem {
    pub attributes: Vec<Attribute>,
    pub name: Span,
    /// Parenthesized fields for variants that carry data.
    pub body: Option<UnionItemStruct>,
    pub comma: Option<Span>,
}

/// `( field: Type, ... )` body of a union variant.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionItemStruct {
    /// Inner (`#`) attributes written inside the parentheses.
    pub attributes: Vec<Attribute>,
    pub bracket_open: Span,
    pub fields: Vec<StructField>,
    pub bracket_close: Span,
}

macro_rules! impl_attributed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Attributed for $ty {
                fn attributes(&self) -> &[Attribute] {
                    &self.attributes
                }

                fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
                    &mut self.attributes
                }
            }
        )*
    };
}

impl_attributed!(
    Custom,
    Enum,
    EnumItem,
    Oneof,
    OneofItem,
    Struct,
    StructField,
    Union,
    UnionItem,
);
