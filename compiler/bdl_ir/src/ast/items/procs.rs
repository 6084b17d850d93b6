//! Procedure signatures.
//!
//! `proc Name = Input -> Output throws Error`

use crate::ast::{Attribute, Attributed, TypeExpression};
use crate::Span;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proc {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub name: Span,
    pub eq: Span,
    pub input_type: TypeExpression,
    /// `->`
    pub arrow: Span,
    pub output_type: TypeExpression,
    pub error: Option<ThrowsClause>,
}

/// `throws Error`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrowsClause {
    pub keyword_throws: Span,
    pub error_type: TypeExpression,
}

impl Proc {
    /// Last token of the signature.
    pub fn end(&self) -> Span {
        match &self.error {
            Some(clause) => clause.error_type.span(),
            None => self.output_type.span(),
        }
    }
}

impl Attributed for Proc {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attributes
    }
}
