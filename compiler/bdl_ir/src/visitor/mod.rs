//! Tree Visitor
//!
//! Read-only traversal of a parsed [`Module`]. Default implementations call
//! the matching `walk_*` function, which visits children and finally every
//! token span through [`Visitor::visit_token`]. Override `visit_*` methods to
//! hook specific nodes and call the `walk_*` function to keep descending.
//!
//! Attributes of a node are walked before its tokens. Because a node's inner
//! attributes sit inside its body, token order is only approximately source
//! order; sort by `start` when exact order matters.
//!
//! # Example
//!
//! ```
//! use bdl_ir::ast::{Module, StructField};
//! use bdl_ir::visitor::{walk_struct_field, Visitor};
//!
//! #[derive(Default)]
//! struct CountOptional(usize);
//!
//! impl<'ast> Visitor<'ast> for CountOptional {
//!     fn visit_struct_field(&mut self, field: &'ast StructField) {
//!         if field.is_optional() {
//!             self.0 += 1;
//!         }
//!         walk_struct_field(self, field);
//!     }
//! }
//!
//! let mut counter = CountOptional::default();
//! counter.visit_module(&Module::default());
//! assert_eq!(counter.0, 0);
//! ```

#[cfg(test)]
mod tests;

use crate::ast::{
    Attribute, Custom, Enum, EnumItem, Import, ImportItem, Module, Oneof, OneofItem, Path,
    PathItem, Proc, Statement, Struct, StructField, TypeExpression, Union, UnionItem,
};
use crate::Span;

pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    fn visit_attribute(&mut self, attribute: &'ast Attribute) {
        walk_attribute(self, attribute);
    }

    fn visit_import(&mut self, import: &'ast Import) {
        walk_import(self, import);
    }

    fn visit_custom(&mut self, custom: &'ast Custom) {
        walk_custom(self, custom);
    }

    fn visit_enum(&mut self, enum_def: &'ast Enum) {
        walk_enum(self, enum_def);
    }

    fn visit_oneof(&mut self, oneof: &'ast Oneof) {
        walk_oneof(self, oneof);
    }

    fn visit_proc(&mut self, proc_def: &'ast Proc) {
        walk_proc(self, proc_def);
    }

    fn visit_struct(&mut self, struct_def: &'ast Struct) {
        walk_struct(self, struct_def);
    }

    fn visit_union(&mut self, union_def: &'ast Union) {
        walk_union(self, union_def);
    }

    fn visit_struct_field(&mut self, field: &'ast StructField) {
        walk_struct_field(self, field);
    }

    fn visit_type_expression(&mut self, ty: &'ast TypeExpression) {
        walk_type_expression(self, ty);
    }

    fn visit_path(&mut self, path: &'ast Path) {
        walk_path(self, path);
    }

    /// Leaf hook, called once per significant token.
    fn visit_token(&mut self, span: Span) {
        let _ = span;
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for attribute in &module.attributes {
        visitor.visit_attribute(attribute);
    }
    for statement in &module.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    statement: &'ast Statement,
) {
    match statement {
        Statement::Import(node) => visitor.visit_import(node),
        Statement::Custom(node) => visitor.visit_custom(node),
        Statement::Enum(node) => visitor.visit_enum(node),
        Statement::Oneof(node) => visitor.visit_oneof(node),
        Statement::Proc(node) => visitor.visit_proc(node),
        Statement::Struct(node) => visitor.visit_struct(node),
        Statement::Union(node) => visitor.visit_union(node),
    }
}

pub fn walk_attribute<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    attribute: &'ast Attribute,
) {
    visitor.visit_token(attribute.symbol);
    visitor.visit_token(attribute.name);
    if let Some(content) = attribute.content {
        visitor.visit_token(content);
    }
}

fn walk_attributes<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, attributes: &'ast [Attribute]) {
    for attribute in attributes {
        visitor.visit_attribute(attribute);
    }
}

fn visit_opt_token<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, span: Option<Span>) {
    if let Some(span) = span {
        visitor.visit_token(span);
    }
}

pub fn walk_import<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, import: &'ast Import) {
    walk_attributes(visitor, &import.attributes);
    visitor.visit_token(import.keyword);
    visitor.visit_path(&import.path);
    visitor.visit_token(import.bracket_open);
    for item in &import.items {
        walk_import_item(visitor, item);
    }
    visitor.visit_token(import.bracket_close);
}

fn walk_import_item<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, item: &'ast ImportItem) {
    visitor.visit_token(item.name);
    if let Some(alias) = &item.alias {
        visitor.visit_token(alias.keyword_as);
        visitor.visit_token(alias.name);
    }
    visit_opt_token(visitor, item.comma);
}

pub fn walk_custom<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, custom: &'ast Custom) {
    walk_attributes(visitor, &custom.attributes);
    visitor.visit_token(custom.keyword);
    visitor.visit_token(custom.name);
    visitor.visit_token(custom.eq);
    visitor.visit_type_expression(&custom.original_type);
}

pub fn walk_enum<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, enum_def: &'ast Enum) {
    walk_attributes(visitor, &enum_def.attributes);
    visitor.visit_token(enum_def.keyword);
    visitor.visit_token(enum_def.name);
    visitor.visit_token(enum_def.bracket_open);
    for item in &enum_def.items {
        walk_enum_item(visitor, item);
    }
    visitor.visit_token(enum_def.bracket_close);
}

fn walk_enum_item<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, item: &'ast EnumItem) {
    walk_attributes(visitor, &item.attributes);
    visitor.visit_token(item.name);
    visit_opt_token(visitor, item.comma);
}

pub fn walk_oneof<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, oneof: &'ast Oneof) {
    walk_attributes(visitor, &oneof.attributes);
    visitor.visit_token(oneof.keyword);
    visitor.visit_token(oneof.name);
    visitor.visit_token(oneof.bracket_open);
    for item in &oneof.items {
        walk_oneof_item(visitor, item);
    }
    visitor.visit_token(oneof.bracket_close);
}

fn walk_oneof_item<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, item: &'ast OneofItem) {
    walk_attributes(visitor, &item.attributes);
    visitor.visit_type_expression(&item.item_type);
    visit_opt_token(visitor, item.comma);
}

pub fn walk_proc<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, proc_def: &'ast Proc) {
    walk_attributes(visitor, &proc_def.attributes);
    visitor.visit_token(proc_def.keyword);
    visitor.visit_token(proc_def.name);
    visitor.visit_token(proc_def.eq);
    visitor.visit_type_expression(&proc_def.input_type);
    visitor.visit_token(proc_def.arrow);
    visitor.visit_type_expression(&proc_def.output_type);
    if let Some(clause) = &proc_def.error {
        visitor.visit_token(clause.keyword_throws);
        visitor.visit_type_expression(&clause.error_type);
    }
}

pub fn walk_struct<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, struct_def: &'ast Struct) {
    walk_attributes(visitor, &struct_def.attributes);
    visitor.visit_token(struct_def.keyword);
    visitor.visit_token(struct_def.name);
    visitor.visit_token(struct_def.bracket_open);
    for field in &struct_def.fields {
        visitor.visit_struct_field(field);
    }
    visitor.visit_token(struct_def.bracket_close);
}

pub fn walk_union<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, union_def: &'ast Union) {
    walk_attributes(visitor, &union_def.attributes);
    visitor.visit_token(union_def.keyword);
    visitor.visit_token(union_def.name);
    visitor.visit_token(union_def.bracket_open);
    for item in &union_def.items {
        walk_union_item(visitor, item);
    }
    visitor.visit_token(union_def.bracket_close);
}

fn walk_union_item<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, item: &'ast UnionItem) {
    walk_attributes(visitor, &item.attributes);
    visitor.visit_token(item.name);
    if let Some(body) = &item.body {
        walk_attributes(visitor, &body.attributes);
        visitor.visit_token(body.bracket_open);
        for field in &body.fields {
            visitor.visit_struct_field(field);
        }
        visitor.visit_token(body.bracket_close);
    }
    visit_opt_token(visitor, item.comma);
}

pub fn walk_struct_field<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    field: &'ast StructField,
) {
    walk_attributes(visitor, &field.attributes);
    visitor.visit_token(field.name);
    visit_opt_token(visitor, field.question);
    visitor.visit_token(field.colon);
    visitor.visit_type_expression(&field.field_type);
    visit_opt_token(visitor, field.comma);
}

pub fn walk_type_expression<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ty: &'ast TypeExpression,
) {
    visitor.visit_token(ty.value_type);
    if let Some(container) = &ty.container {
        visitor.visit_token(container.bracket_open);
        visit_opt_token(visitor, container.key_type);
        visitor.visit_token(container.bracket_close);
    }
}

pub fn walk_path<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, path: &'ast Path) {
    for item in &path.items {
        match item {
            PathItem::Identifier(span) | PathItem::Dot(span) => visitor.visit_token(*span),
        }
    }
}

/// Every token span in `module`, sorted by start offset.
pub fn token_spans(module: &Module) -> Vec<Span> {
    struct Collector(Vec<Span>);

    impl Visitor<'_> for Collector {
        fn visit_token(&mut self, span: Span) {
            self.0.push(span);
        }
    }

    let mut collector = Collector(Vec::new());
    collector.visit_module(module);
    collector.0.sort_unstable();
    collector.0
}
