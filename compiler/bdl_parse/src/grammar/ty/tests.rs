use bdl_ir::ast::TypeShape;
use pretty_assertions::assert_eq;

use super::*;
use crate::{ParseError, ParseOptions};

fn with_cursor<T>(source: &str, f: impl FnOnce(&mut Cursor<'_>) -> T) -> (T, usize) {
    let mut cursor = Cursor::new(source, &ParseOptions::default()).unwrap();
    let result = f(&mut cursor);
    (result, cursor.position())
}

#[test]
fn scalar_does_not_consume_trailing_trivia() {
    let (ty, pos) = with_cursor("Int  ,", type_expression);
    let ty = ty.unwrap().unwrap();
    assert_eq!(ty.shape(), TypeShape::Scalar);
    assert_eq!(pos, 3);
}

#[test]
fn keyed_container_with_trivia_inside() {
    let source = "Map [ // key\n Key ]";
    let (ty, pos) = with_cursor(source, type_expression);
    let ty = ty.unwrap().unwrap();
    let container = ty.container.as_ref().unwrap();
    assert_eq!(container.key_type.unwrap().text(source), "Key");
    assert_eq!(ty.span().text(source), source);
    assert_eq!(pos, source.len());
}

#[test]
fn unclosed_container_reports_found_identifier() {
    let (result, _) = with_cursor("Int[Key Other", type_expression);
    let Err(ParseError::Syntax(error)) = result else {
        panic!("expected syntax error");
    };
    assert_eq!(error.offset, 8);
    assert_eq!(error.expected, vec![BRACKET_CLOSE]);
    assert_eq!(error.found, crate::Found::Text("Other".to_owned()));
}

#[test]
fn no_type_is_not_a_match() {
    let (ty, pos) = with_cursor("[]", type_expression);
    assert_eq!(ty.unwrap(), None);
    assert_eq!(pos, 0);

    let (ty, _) = with_cursor("[]", expect_type_expression);
    assert_eq!(ty.unwrap_err().as_syntax().unwrap().expected, vec![IDENT]);
}

#[test]
fn path_alternates_identifiers_and_dots() {
    let source = "a.b // c\n. c {";
    let (path, _) = with_cursor(source, expect_path);
    let path = path.unwrap();
    let texts: Vec<_> = path.items.iter().map(|item| item.span().text(source)).collect();
    assert_eq!(texts, vec!["a", ".", "b", ".", "c"]);
    assert!(!path.has_trailing_dot());
}
