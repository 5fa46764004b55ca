//! Modernization suggestions for classic MIDL type spellings.
//!
//! A read-only pass over the parsed tokens: any type-position token whose
//! text is a classic MIDL spelling (`int`, `PWSTR`, ...) gets a positioned
//! suggestion naming the MIDL 3 replacement. Purely advisory; the parse
//! itself accepts the classic spelling as an ordinary identifier.

use midl3_core::lang::types;
use midl3_syntax::ParseOutput;
use midl3_syntax::token::{Span, TokenKind};

/// A positioned classic-type suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// 0-based source line.
    pub line: usize,
    /// 0-based column in characters.
    pub col: usize,
    /// Length in characters.
    pub length: usize,
    pub span: Span,
    /// The classic spelling found in the document.
    pub classic: String,
    /// The MIDL 3 spelling to use instead.
    pub replacement: &'static str,
    pub message: String,
}

/// Collect suggestions for every classic type spelling used in type position.
pub fn classic_type_suggestions(out: &ParseOutput, source: &str) -> Vec<Suggestion> {
    out.tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Type | TokenKind::Identifier))
        .filter_map(|t| {
            let text = t.text(source);
            let replacement = types::as_str(types::classic_replacement(text)?);
            Some(Suggestion {
                line: t.line,
                col: t.col,
                length: t.length,
                span: t.span,
                classic: text.to_string(),
                replacement,
                message: format!(
                    "{text} is a classic MIDL type, not a MIDL 3 type. Use {replacement} instead."
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use midl3_syntax::parse;

    #[test]
    fn classic_return_type_is_flagged() {
        let source = "namespace N { interface I { int Size(); } }";
        let out = parse(source);
        let suggestions = classic_type_suggestions(&out, source);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].classic, "int");
        assert_eq!(suggestions[0].replacement, "Int32");
        assert_eq!(
            suggestions[0].message,
            "int is a classic MIDL type, not a MIDL 3 type. Use Int32 instead."
        );
    }

    #[test]
    fn classic_parameter_type_is_flagged_with_position() {
        let source = "namespace N { delegate Handler(PWSTR name); }";
        let out = parse(source);
        let suggestions = classic_type_suggestions(&out, source);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].replacement, "String");
        assert_eq!(suggestions[0].line, 0);
        assert_eq!(suggestions[0].col, 31);
        assert_eq!(suggestions[0].length, 5);
    }

    #[test]
    fn modern_spellings_produce_no_suggestions() {
        let source = "namespace N { interface I { Int32 Size(); String Name(); } }";
        let out = parse(source);
        assert!(classic_type_suggestions(&out, source).is_empty());
    }
}
