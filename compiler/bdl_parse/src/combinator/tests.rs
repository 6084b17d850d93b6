use bdl_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::{ParseError, ParseOptions, Pattern};

fn cursor(source: &str) -> Cursor<'_> {
    Cursor::new(source, &ParseOptions::default()).unwrap()
}

fn letter(cursor: &mut Cursor<'_>) -> ParseResult<Option<Span>> {
    cursor.accept(Pattern::Literal("a"))
}

fn comma(cursor: &mut Cursor<'_>) -> ParseResult<Option<Span>> {
    cursor.accept(Pattern::Literal(","))
}

fn spaces(cursor: &mut Cursor<'_>) -> ParseResult<()> {
    while cursor.accept(Pattern::Literal(" "))?.is_some() {}
    Ok(())
}

#[test]
fn zero_or_more_stops_at_first_miss() {
    let mut cursor = cursor("aaab");
    let items = zero_or_more(&mut cursor, letter).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(cursor.position(), 3);

    let none = zero_or_more(&mut cursor, letter).unwrap();
    assert!(none.is_empty());
}

#[test]
fn choice_takes_first_matching_alternative() {
    let alternatives: [ParseFn<'_, &str>; 3] = [
        |cursor| Ok(cursor.accept(Pattern::Literal("ab"))?.map(|_| "ab")),
        |cursor| Ok(cursor.accept(Pattern::Literal("a"))?.map(|_| "a")),
        |cursor| Ok(cursor.accept(Pattern::Literal("abc"))?.map(|_| "abc")),
    ];
    let mut cursor = cursor("abc");
    assert_eq!(choice(&mut cursor, &alternatives).unwrap(), Some("ab"));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn choice_without_match_consumes_nothing() {
    let alternatives: [ParseFn<'_, Span>; 2] = [
        |cursor| {
            if cursor.accept(Pattern::Literal("x"))?.is_none() {
                return Ok(None);
            }
            cursor.accept(Pattern::Literal("y"))
        },
        |cursor| cursor.accept(Pattern::Literal("z")),
    ];
    let mut cursor = cursor("xq");
    assert_eq!(choice(&mut cursor, &alternatives).unwrap(), None);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn choice_propagates_speculative_errors() {
    let alternatives: [ParseFn<'_, Span>; 1] = [|cursor| {
        if cursor.accept(Pattern::Literal("x"))?.is_none() {
            return Ok(None);
        }
        cursor.expect(Pattern::Literal("y"), &[], &[]).map(Some)
    }];
    let mut cursor = cursor("xq");
    let error = choice(&mut cursor, &alternatives).unwrap_err();
    assert_eq!(error.as_syntax().unwrap().offset, 1);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn flip_flop_alternates() {
    let mut cursor = cursor("a , a,a b");
    let separated = flip_flop(&mut cursor, letter, comma, spaces).unwrap();
    assert_eq!(separated.items.len(), 3);
    assert_eq!(separated.separators.len(), 2);
    assert!(!separated.trailing_separator());

    let spans = separated.interleave(|span| span, |span| span);
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(2, 3),
            Span::new(4, 5),
            Span::new(5, 6),
            Span::new(6, 7),
        ]
    );
}

#[test]
fn flip_flop_keeps_trailing_separator() {
    let mut cursor = cursor("a, b");
    let separated = flip_flop(&mut cursor, letter, comma, spaces).unwrap();
    assert_eq!(separated.items.len(), 1);
    assert!(separated.trailing_separator());
    assert_eq!(separated.interleave(|_| 'a', |_| ',').len(), 2);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn flip_flop_without_first_primary_is_empty() {
    let mut cursor = cursor(",a");
    let separated = flip_flop(&mut cursor, letter, comma, spaces).unwrap();
    assert!(separated.is_empty());
    assert!(!separated.trailing_separator());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn wiring_errors_surface_as_runaway() {
    let mut cursor = cursor("aa");
    let result = zero_or_more(&mut cursor, |cursor| {
        spaces(cursor)?;
        cursor.accept(Pattern::Eof).map(|_| Some(()))
    });
    assert!(matches!(result, Err(ParseError::Runaway { .. })));
}
