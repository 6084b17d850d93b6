//! Import statements.
//!
//! `import pkg.module { Name, Other as Alias }`

use crate::ast::{Attribute, Attributed, Path};
use crate::Span;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    pub attributes: Vec<Attribute>,
    pub keyword: Span,
    pub path: Path,
    pub bracket_open: Span,
    pub items: Vec<ImportItem>,
    pub bracket_close: Span,
}

/// A single imported name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportItem {
    pub name: Span,
    /// `as Alias`
    pub alias: Option<ImportAlias>,
    pub comma: Option<Span>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportAlias {
    pub keyword_as: Span,
    pub name: Span,
}

impl ImportItem {
    /// The name this item is bound to in the importing module.
    pub fn local_name(&self) -> Span {
        self.alias.as_ref().map_or(self.name, |alias| alias.name)
    }
}

impl Attributed for Import {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attributes
    }
}
