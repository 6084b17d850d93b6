//! Terminal patterns of the schema grammar.

use crate::pattern::{Pattern, TokenRegex};

static IDENT_REGEX: TokenRegex = TokenRegex::new("identifier", r"^[a-zA-Z_][a-zA-Z0-9_]*");
static WHITESPACE_REGEX: TokenRegex = TokenRegex::new("whitespace", r"^[ \t\r\n]+");
static COMMENT_REGEX: TokenRegex = TokenRegex::new("comment", r"^//.*(?:\n|$)");
/// `- text` to end of line, or a run of `| text` lines.
static ATTRIBUTE_CONTENT_REGEX: TokenRegex = TokenRegex::new(
    "attribute content",
    r"^(?:- ?[^\n]*|(?:[ \t\r]*\|[^\n]*(?:\n|$))+)",
);

pub(crate) static IDENT: Pattern = Pattern::Regex(&IDENT_REGEX);
pub(crate) static WHITESPACE: Pattern = Pattern::Regex(&WHITESPACE_REGEX);
pub(crate) static COMMENT: Pattern = Pattern::Regex(&COMMENT_REGEX);
pub(crate) static ATTRIBUTE_CONTENT: Pattern = Pattern::Regex(&ATTRIBUTE_CONTENT_REGEX);

pub(crate) const KW_CUSTOM: Pattern = Pattern::Keyword("custom");
pub(crate) const KW_ENUM: Pattern = Pattern::Keyword("enum");
pub(crate) const KW_IMPORT: Pattern = Pattern::Keyword("import");
pub(crate) const KW_ONEOF: Pattern = Pattern::Keyword("oneof");
pub(crate) const KW_PROC: Pattern = Pattern::Keyword("proc");
pub(crate) const KW_STRUCT: Pattern = Pattern::Keyword("struct");
pub(crate) const KW_UNION: Pattern = Pattern::Keyword("union");
pub(crate) const KW_AS: Pattern = Pattern::Keyword("as");
pub(crate) const KW_THROWS: Pattern = Pattern::Keyword("throws");

/// Statement keywords, in dispatch order.
pub(crate) const STATEMENT_KEYWORDS: [Pattern; 7] = [
    KW_CUSTOM, KW_ENUM, KW_IMPORT, KW_ONEOF, KW_PROC, KW_STRUCT, KW_UNION,
];

pub(crate) const SHARP: Pattern = Pattern::Literal("#");
pub(crate) const AT: Pattern = Pattern::Literal("@");
pub(crate) const BRACE_OPEN: Pattern = Pattern::Literal("{");
pub(crate) const BRACE_CLOSE: Pattern = Pattern::Literal("}");
pub(crate) const PAREN_OPEN: Pattern = Pattern::Literal("(");
pub(crate) const PAREN_CLOSE: Pattern = Pattern::Literal(")");
pub(crate) const BRACKET_OPEN: Pattern = Pattern::Literal("[");
pub(crate) const BRACKET_CLOSE: Pattern = Pattern::Literal("]");
pub(crate) const COMMA: Pattern = Pattern::Literal(",");
pub(crate) const DOT: Pattern = Pattern::Literal(".");
pub(crate) const COLON: Pattern = Pattern::Literal(":");
pub(crate) const QUESTION: Pattern = Pattern::Literal("?");
pub(crate) const EQ: Pattern = Pattern::Literal("=");
pub(crate) const ARROW: Pattern = Pattern::Literal("->");
