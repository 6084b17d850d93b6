use pretty_assertions::assert_eq;

use super::*;
use crate::parse;

#[test]
fn display_matches_documented_layout() {
    let source = "struct S { a: }";
    let error = parse(source).unwrap_err();
    let expected = "\
at line 1, column 15:

expected identifier, got \"}\"

1 | struct S { a: }
                  ^";
    assert_eq!(error.to_string(), expected);
}

#[test]
fn caret_covers_the_found_identifier() {
    let source = "enum E {}\nstruct S {\n  a Int\n}\n";
    let error = parse(source).unwrap_err();
    let error = error.as_syntax().unwrap();
    assert_eq!(error.position, LineCol::new(2, 4));
    assert_eq!(error.expected_text(), "\":\"");
    let expected_snippet = "\
2 | struct S {
3 |   a Int
        ^^^
4 | }
5 | ";
    assert_eq!(error.snippet, expected_snippet);
}

#[test]
fn eof_found_is_reported_as_marker() {
    let error = parse("struct S {").unwrap_err();
    let error = error.as_syntax().unwrap();
    assert_eq!(error.found, Found::Eof);
    assert_eq!(error.found.caret_width(), 1);
    assert!(error.to_string().contains("expected \"}\", got <EOF>"));
}

#[test]
fn several_expected_patterns_are_joined_with_or() {
    let error = parse("@x").unwrap_err();
    let error = error.as_syntax().unwrap();
    assert_eq!(
        error.expected_text(),
        "\"custom\" or \"enum\" or \"import\" or \"oneof\" or \"proc\" or \"struct\" or \"union\""
    );
}

#[test]
fn non_syntax_variants() {
    let runaway = ParseError::Runaway {
        attempts: 11,
        budget: 10,
    };
    assert!(runaway.as_syntax().is_none());
    assert_eq!(
        runaway.to_string(),
        "parser made 11 match attempts, exceeding its budget of 10"
    );
    assert_eq!(
        ParseError::SourceTooLarge(5_000_000_000).to_string(),
        "source of 5000000000 bytes exceeds the u32::MAX byte limit"
    );
}
