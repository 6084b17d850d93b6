use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{Attribute, AttributeKind, Container, UnionItemStruct};

// Hand-built tree for `@a struct S { x?: T[K] } union U { V(y: T), W }`
//                     0123456789012345678901234567890123456789012345678
fn sample() -> Module {
    let field_x = StructField {
        attributes: Vec::new(),
        name: Span::new(15, 16),
        question: Some(Span::new(16, 17)),
        colon: Span::new(17, 18),
        field_type: TypeExpression {
            value_type: Span::new(19, 20),
            container: Some(Container {
                bracket_open: Span::new(20, 21),
                key_type: Some(Span::new(21, 22)),
                bracket_close: Span::new(22, 23),
            }),
        },
        comma: None,
    };
    let field_y = StructField {
        attributes: Vec::new(),
        name: Span::new(36, 37),
        question: None,
        colon: Span::new(37, 38),
        field_type: TypeExpression {
            value_type: Span::new(39, 40),
            container: None,
        },
        comma: None,
    };
    Module {
        attributes: Vec::new(),
        statements: vec![
            Statement::Struct(Struct {
                attributes: vec![Attribute {
                    kind: AttributeKind::At,
                    symbol: Span::new(0, 1),
                    name: Span::new(1, 2),
                    content: None,
                }],
                keyword: Span::new(3, 9),
                name: Span::new(10, 11),
                bracket_open: Span::new(12, 13),
                fields: vec![field_x],
                bracket_close: Span::new(24, 25),
            }),
            Statement::Union(Union {
                attributes: Vec::new(),
                keyword: Span::new(26, 31),
                name: Span::new(32, 33),
                bracket_open: Span::new(34, 35),
                items: vec![
                    UnionItem {
                        attributes: Vec::new(),
                        name: Span::new(35, 36),
                        body: Some(UnionItemStruct {
                            attributes: Vec::new(),
                            bracket_open: Span::new(36, 37),
                            fields: vec![field_y],
                            bracket_close: Span::new(40, 41),
                        }),
                        comma: Some(Span::new(41, 42)),
                    },
                    UnionItem {
                        attributes: Vec::new(),
                        name: Span::new(43, 44),
                        body: None,
                        comma: None,
                    },
                ],
                bracket_close: Span::new(45, 46),
            }),
        ],
    }
}

#[test]
fn token_spans_visits_every_token() {
    let module = sample();
    let spans = token_spans(&module);
    assert_eq!(spans.len(), 25);
    assert!(spans.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(spans.first().copied(), Some(Span::new(0, 1)));
    assert_eq!(spans.last().copied(), Some(Span::new(45, 46)));
}

#[test]
fn override_hooks_and_keep_walking() {
    #[derive(Default)]
    struct Counter {
        fields: usize,
        types: usize,
        attributes: usize,
    }

    impl<'ast> Visitor<'ast> for Counter {
        fn visit_struct_field(&mut self, field: &'ast StructField) {
            self.fields += 1;
            walk_struct_field(self, field);
        }

        fn visit_type_expression(&mut self, ty: &'ast TypeExpression) {
            self.types += 1;
            walk_type_expression(self, ty);
        }

        fn visit_attribute(&mut self, attribute: &'ast Attribute) {
            self.attributes += 1;
            walk_attribute(self, attribute);
        }
    }

    let mut counter = Counter::default();
    counter.visit_module(&sample());
    assert_eq!(counter.fields, 2);
    assert_eq!(counter.types, 2);
    assert_eq!(counter.attributes, 1);
}

#[test]
fn path_tokens_include_dots() {
    let module = Module {
        attributes: Vec::new(),
        statements: vec![Statement::Import(Import {
            attributes: Vec::new(),
            keyword: Span::new(0, 6),
            path: Path {
                items: vec![
                    PathItem::Identifier(Span::new(7, 8)),
                    PathItem::Dot(Span::new(8, 9)),
                    PathItem::Identifier(Span::new(9, 10)),
                ],
            },
            bracket_open: Span::new(11, 12),
            items: vec![ImportItem {
                name: Span::new(13, 14),
                alias: None,
                comma: None,
            }],
            bracket_close: Span::new(15, 16),
        })],
    };
    assert_eq!(
        token_spans(&module),
        vec![
            Span::new(0, 6),
            Span::new(7, 8),
            Span::new(8, 9),
            Span::new(9, 10),
            Span::new(11, 12),
            Span::new(13, 14),
            Span::new(15, 16),
        ]
    );
}
