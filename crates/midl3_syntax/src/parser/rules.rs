//! The token classifier: an ordered table of lexical rules.
//!
//! Rules are tried in declaration order and the **first** structural match
//! wins, not the longest. Each matcher inspects the remaining input at the
//! cursor and reports a byte length plus the token kind to stage.
//!
//! Returning no match at a non-whitespace position is a lexical dead end;
//! the engine records an error and skips to a synchronization character.

use crate::token::{TokenKind, TokenModifier};
use midl3_core::lang::{keywords, types};

/// A successful classification of the input prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Matched byte length.
    pub len: usize,
    pub kind: TokenKind,
    pub modifier: Option<TokenModifier>,
}

type Matcher = fn(&str) -> Option<RuleMatch>;

/// The classifier table, in required priority order.
const RULES: &[Matcher] = &[
    match_string,
    match_line_comment,
    match_block_comment,
    match_preprocessor,
    match_accessor,
    match_import,
    match_attribute,
    match_structural_keyword,
    match_scope_token,
    match_semicolon,
    match_colon,
    match_comma,
    match_builtin_type,
    match_equals,
    match_number,
    match_identifier,
];

/// Classify the input prefix, trying each rule in table order.
pub fn classify(rest: &str) -> Option<RuleMatch> {
    RULES.iter().find_map(|rule| rule(rest))
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `true` if the match of `len` bytes ends at a word boundary.
fn at_boundary(rest: &str, len: usize) -> bool {
    match rest[len..].chars().next() {
        Some(c) => !is_word(c),
        None => true,
    }
}

fn plain(len: usize, kind: TokenKind) -> Option<RuleMatch> {
    Some(RuleMatch {
        len,
        kind,
        modifier: None,
    })
}

/// Byte length of an end-of-line sequence at the start of `rest`.
pub fn eol_len(rest: &str) -> usize {
    if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\r') || rest.starts_with('\n') {
        1
    } else {
        0
    }
}

/// Quoted string, double or single quote. No escape handling: an embedded
/// quote simply ends the string. Unterminated strings do not match.
fn match_string(rest: &str) -> Option<RuleMatch> {
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let close = rest[1..].find(quote)?;
    plain(1 + close + quote.len_utf8(), TokenKind::Str)
}

/// `//` comment through end of line; the newline is consumed when present.
fn match_line_comment(rest: &str) -> Option<RuleMatch> {
    if !rest.starts_with("//") {
        return None;
    }
    let mut len = match rest.find(['\r', '\n']) {
        Some(pos) => pos,
        None => rest.len(),
    };
    len += eol_len(&rest[len..]);
    plain(len, TokenKind::Comment)
}

/// `/* ... */` block comment; the first close sequence wins, no nesting.
/// An unterminated block comment runs to end of input.
fn match_block_comment(rest: &str) -> Option<RuleMatch> {
    if !rest.starts_with("/*") {
        return None;
    }
    let len = match rest[2..].find("*/") {
        Some(pos) => 2 + pos + 2,
        None => rest.len(),
    };
    plain(len, TokenKind::Comment)
}

/// Preprocessor directives recognized at the start of a `#` line.
/// Longer spellings first so `if` does not shadow `ifdef`/`ifndef`.
const DIRECTIVES: &[&str] = &["include", "ifndef", "pragma", "define", "ifdef", "endif", "if"];

/// `#directive ...` through end of line, newline consumed when present.
fn match_preprocessor(rest: &str) -> Option<RuleMatch> {
    let body = rest.strip_prefix('#')?;
    if !DIRECTIVES.iter().any(|d| body.starts_with(d) && at_boundary(body, d.len())) {
        return None;
    }
    let mut len = match rest.find(['\r', '\n']) {
        Some(pos) => pos,
        None => rest.len(),
    };
    len += eol_len(&rest[len..]);
    plain(len, TokenKind::PreProcessor)
}

/// `get`/`set` lex as method tokens so accessor blocks highlight like
/// member functions.
fn match_accessor(rest: &str) -> Option<RuleMatch> {
    for accessor in ["get", "set"] {
        if rest.starts_with(accessor) && at_boundary(rest, accessor.len()) {
            return plain(accessor.len(), TokenKind::Method);
        }
    }
    None
}

fn match_import(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with("import") && at_boundary(rest, 6) {
        return plain(6, TokenKind::Keyword);
    }
    None
}

/// `[...]` attribute on a single line; the first `]` closes it, nested
/// brackets are not specially handled here.
fn match_attribute(rest: &str) -> Option<RuleMatch> {
    if !rest.starts_with('[') {
        return None;
    }
    for (idx, c) in rest.char_indices().skip(1) {
        match c {
            ']' => return plain(idx + 1, TokenKind::Attribute),
            '\r' | '\n' => return None,
            _ => {}
        }
    }
    None
}

fn match_structural_keyword(rest: &str) -> Option<RuleMatch> {
    let kw = keywords::STRUCTURAL_KEYWORDS
        .iter()
        .map(|id| keywords::as_str(*id))
        .find(|kw| rest.starts_with(kw) && at_boundary(rest, kw.len()))?;
    plain(kw.len(), TokenKind::Keyword)
}

fn match_scope_token(rest: &str) -> Option<RuleMatch> {
    match rest.chars().next() {
        Some('(') | Some(')') | Some('{') | Some('}') => plain(1, TokenKind::ScopeToken),
        _ => None,
    }
}

fn match_semicolon(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with(';') { plain(1, TokenKind::Semicolon) } else { None }
}

fn match_colon(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with(':') { plain(1, TokenKind::Colon) } else { None }
}

fn match_comma(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with(',') { plain(1, TokenKind::Comma) } else { None }
}

/// Built-in WinRT type names carry the `defaultLibrary` modifier.
fn match_builtin_type(rest: &str) -> Option<RuleMatch> {
    let ty = types::BUILTIN_TYPES
        .iter()
        .find(|t| rest.starts_with(t.canonical) && at_boundary(rest, t.canonical.len()))?;
    Some(RuleMatch {
        len: ty.canonical.len(),
        kind: TokenKind::Type,
        modifier: Some(TokenModifier::DefaultLibrary),
    })
}

fn match_equals(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with('=') { plain(1, TokenKind::Operator) } else { None }
}

fn match_number(rest: &str) -> Option<RuleMatch> {
    let len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    plain(len, TokenKind::Number)
}

/// Dotted-name identifier: word segments joined by single dots. A trailing
/// dot is left unconsumed.
fn match_identifier(rest: &str) -> Option<RuleMatch> {
    let mut len = rest.chars().take_while(|c| is_word(*c)).map(char::len_utf8).sum::<usize>();
    if len == 0 {
        return None;
    }
    loop {
        let after = &rest[len..];
        if !after.starts_with('.') {
            break;
        }
        let segment = after[1..].chars().take_while(|c| is_word(*c)).map(char::len_utf8).sum::<usize>();
        if segment == 0 {
            break;
        }
        len += 1 + segment;
    }
    plain(len, TokenKind::Identifier)
}
