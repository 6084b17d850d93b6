use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{
    Attribute, AttributeKind, Container, Custom, Enum, EnumItem, Proc, Struct, StructField,
    ThrowsClause,
};

fn scalar(start: u32, end: u32) -> TypeExpression {
    TypeExpression {
        value_type: Span::new(start, end),
        container: None,
    }
}

// @doc
// struct Pair { key: Text[Id] }
// proc Get = Id -> Pair throws Err
// enum E { A }
fn sample() -> Module {
    let pair = Statement::Struct(Struct {
        attributes: vec![Attribute {
            kind: AttributeKind::At,
            symbol: Span::new(0, 1),
            name: Span::new(1, 4),
            content: None,
        }],
        keyword: Span::new(5, 11),
        name: Span::new(12, 16),
        bracket_open: Span::new(17, 18),
        fields: vec![StructField {
            attributes: Vec::new(),
            name: Span::new(19, 22),
            question: None,
            colon: Span::new(22, 23),
            field_type: TypeExpression {
                value_type: Span::new(24, 28),
                container: Some(Container {
                    bracket_open: Span::new(28, 29),
                    key_type: Some(Span::new(29, 31)),
                    bracket_close: Span::new(31, 32),
                }),
            },
            comma: None,
        }],
        bracket_close: Span::new(33, 34),
    });
    let get = Statement::Proc(Proc {
        attributes: Vec::new(),
        keyword: Span::new(35, 39),
        name: Span::new(40, 43),
        eq: Span::new(44, 45),
        input_type: scalar(46, 48),
        arrow: Span::new(49, 51),
        output_type: scalar(52, 56),
        error: Some(ThrowsClause {
            keyword_throws: Span::new(57, 63),
            error_type: scalar(64, 67),
        }),
    });
    let e = Statement::Enum(Enum {
        attributes: Vec::new(),
        keyword: Span::new(68, 72),
        name: Span::new(73, 74),
        bracket_open: Span::new(75, 76),
        items: vec![EnumItem {
            attributes: Vec::new(),
            name: Span::new(77, 78),
            comma: None,
        }],
        bracket_close: Span::new(79, 80),
    });
    Module {
        attributes: Vec::new(),
        statements: vec![pair, get, e],
    }
}

#[test]
fn statement_extent_includes_leading_attributes() {
    let module = sample();
    assert_eq!(statement_extent(&module.statements[0]), Span::new(0, 34));
    assert_eq!(statement_extent(&module.statements[1]), Span::new(35, 67));
}

#[test]
fn pick_statement_by_offset() {
    let module = sample();
    let keyword_of = |offset| pick_statement(&module, offset).map(Statement::keyword_str);
    assert_eq!(keyword_of(2), Some("struct"));
    assert_eq!(keyword_of(33), Some("struct"));
    assert_eq!(keyword_of(34), None);
    assert_eq!(keyword_of(50), Some("proc"));
    assert_eq!(keyword_of(79), Some("enum"));
    assert_eq!(keyword_of(200), None);
}

#[test]
fn pick_type_finds_value_and_key_types() {
    let module = sample();
    assert_eq!(pick_type(&module, 25), Some(Span::new(24, 28)));
    assert_eq!(pick_type(&module, 30), Some(Span::new(29, 31)));
    assert_eq!(pick_type(&module, 28), None);
    assert_eq!(pick_type(&module, 20), None);
}

#[test]
fn pick_type_in_proc_signature() {
    let module = sample();
    assert_eq!(pick_type(&module, 46), Some(Span::new(46, 48)));
    assert_eq!(pick_type(&module, 55), Some(Span::new(52, 56)));
    assert_eq!(pick_type(&module, 66), Some(Span::new(64, 67)));
    assert_eq!(pick_type(&module, 60), None);
}

#[test]
fn pick_type_in_custom_and_enum() {
    let module = Module {
        attributes: Vec::new(),
        statements: vec![Statement::Custom(Custom {
            attributes: Vec::new(),
            keyword: Span::new(0, 6),
            name: Span::new(7, 11),
            eq: Span::new(12, 13),
            original_type: scalar(14, 20),
        })],
    };
    assert_eq!(pick_type(&module, 15), Some(Span::new(14, 20)));
    assert_eq!(pick_type(&module, 8), None);
    assert_eq!(pick_type(&sample(), 77), None);
}
