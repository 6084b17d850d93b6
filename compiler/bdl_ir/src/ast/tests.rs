use pretty_assertions::assert_eq;

use super::*;

fn attr(kind: AttributeKind, start: u32) -> Attribute {
    Attribute {
        kind,
        symbol: Span::new(start, start + 1),
        name: Span::new(start + 1, start + 4),
        content: None,
    }
}

fn scalar(start: u32, end: u32) -> TypeExpression {
    TypeExpression {
        value_type: Span::new(start, end),
        container: None,
    }
}

#[test]
fn type_shape_follows_container() {
    let plain = scalar(0, 3);
    assert_eq!(plain.shape(), TypeShape::Scalar);
    assert_eq!(plain.span(), Span::new(0, 3));

    let sequence = TypeExpression {
        value_type: Span::new(0, 3),
        container: Some(Container {
            bracket_open: Span::new(3, 4),
            key_type: None,
            bracket_close: Span::new(4, 5),
        }),
    };
    assert_eq!(sequence.shape(), TypeShape::Sequence);
    assert_eq!(sequence.span(), Span::new(0, 5));

    let map = TypeExpression {
        value_type: Span::new(0, 3),
        container: Some(Container {
            bracket_open: Span::new(3, 4),
            key_type: Some(Span::new(4, 10)),
            bracket_close: Span::new(10, 11),
        }),
    };
    assert_eq!(
        map.shape(),
        TypeShape::Map {
            key_type: Span::new(4, 10)
        }
    );
}

#[test]
fn path_segments_skip_dots() {
    let path = Path {
        items: vec![
            PathItem::Identifier(Span::new(0, 3)),
            PathItem::Dot(Span::new(3, 4)),
            PathItem::Identifier(Span::new(4, 8)),
        ],
    };
    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        vec![Span::new(0, 3), Span::new(4, 8)]
    );
    assert!(!path.has_trailing_dot());
    assert_eq!(path.span().unwrap(), Span::new(0, 8));
    assert_eq!(Path::default().span(), None);
}

#[test]
fn prepend_attributes_keeps_source_order() {
    let mut node = Struct {
        attributes: vec![attr(AttributeKind::Sharp, 30)],
        keyword: Span::new(10, 16),
        name: Span::new(17, 18),
        bracket_open: Span::new(19, 20),
        fields: Vec::new(),
        bracket_close: Span::new(40, 41),
    };
    node.prepend_attributes(vec![attr(AttributeKind::At, 0), attr(AttributeKind::At, 5)]);

    let starts: Vec<u32> = node.attributes().iter().map(|a| a.symbol.start).collect();
    assert_eq!(starts, vec![0, 5, 30]);
}

#[test]
fn statement_accessors() {
    let proc_def = Proc {
        attributes: Vec::new(),
        keyword: Span::new(0, 4),
        name: Span::new(5, 8),
        eq: Span::new(9, 10),
        input_type: scalar(11, 14),
        arrow: Span::new(15, 17),
        output_type: scalar(18, 21),
        error: Some(ThrowsClause {
            keyword_throws: Span::new(22, 28),
            error_type: scalar(29, 32),
        }),
    };
    let statement = Statement::Proc(proc_def);
    assert_eq!(statement.keyword_str(), "proc");
    assert_eq!(statement.name(), Some(Span::new(5, 8)));
    assert_eq!(statement.span(), Span::new(0, 32));

    let import = Statement::Import(Import {
        attributes: Vec::new(),
        keyword: Span::new(0, 6),
        path: Path::default(),
        bracket_open: Span::new(9, 10),
        items: Vec::new(),
        bracket_close: Span::new(11, 12),
    });
    assert_eq!(import.name(), None);
    assert_eq!(import.span(), Span::new(0, 12));
}

#[test]
fn attribute_span_covers_content() {
    let mut attribute = attr(AttributeKind::At, 0);
    assert_eq!(attribute.span(), Span::new(0, 4));
    attribute.content = Some(Span::new(5, 20));
    assert_eq!(attribute.span(), Span::new(0, 20));
    assert!(!attribute.kind.is_inner());
    assert_eq!(attribute.kind.symbol(), "@");
}

#[test]
fn import_item_local_name() {
    let plain = ImportItem {
        name: Span::new(0, 3),
        alias: None,
        comma: None,
    };
    assert_eq!(plain.local_name(), Span::new(0, 3));

    let aliased = ImportItem {
        name: Span::new(0, 3),
        alias: Some(ImportAlias {
            keyword_as: Span::new(4, 6),
            name: Span::new(7, 9),
        }),
        comma: None,
    };
    assert_eq!(aliased.local_name(), Span::new(7, 9));
}
