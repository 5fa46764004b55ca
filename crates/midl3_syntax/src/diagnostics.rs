//! Parse diagnostics.
//!
//! Every failure class is non-fatal: errors are appended to the output and
//! scanning continues, so the full token stream and a partial model are
//! always available for best-effort highlighting of invalid documents.

use thiserror::Error;

/// Classification of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No token rule matches at a non-whitespace position; recovered by
    /// skipping to a synchronization character.
    LexicalDeadEnd,
    /// A structural transition attempted in an invalid ancestor scope.
    ScopeViolation,
    /// Duplicate name capture, semicolon after a property, bad accessors.
    MemberShapeViolation,
    /// Multiple `:` or a leading `,` in an extends list.
    InheritanceSyntaxViolation,
    /// Scope stack non-empty at end of input.
    UnterminatedScope,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::LexicalDeadEnd => "lexical dead end",
            ErrorKind::ScopeViolation => "scope violation",
            ErrorKind::MemberShapeViolation => "member shape violation",
            ErrorKind::InheritanceSyntaxViolation => "inheritance syntax violation",
            ErrorKind::UnterminatedScope => "unterminated scope",
        };
        f.write_str(s)
    }
}

/// A recorded parse error with source position and offending text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (line {line}, column {col})")]
pub struct ParseError {
    /// 0-based source line.
    pub line: usize,
    /// 0-based column in characters.
    pub col: usize,
    /// Byte offset of the offending position.
    pub offset: usize,
    /// The offending token text (or current character for lexical errors).
    pub token: String,
    pub message: String,
    pub kind: ErrorKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = ParseError {
            line: 2,
            col: 7,
            offset: 31,
            token: "%".to_string(),
            message: "no token rule matches".to_string(),
            kind: ErrorKind::LexicalDeadEnd,
        };
        assert_eq!(err.to_string(), "no token rule matches (line 2, column 7)");
    }
}
