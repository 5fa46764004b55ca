//! Token types produced by the scanner.
//!
//! Tokens carry both positional data (line/column for highlighting, byte span
//! for slicing) and semantic context: a reference into the model arena plus a
//! role describing what the token *is* within that context. The remap pass
//! reads context + role to rewrite generic identifiers into specific kinds.

use crate::model::{MemberId, NamespaceId, ParamScopeId, TypeId};

/// Source span in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Kind of token produced by the scanner.
///
/// Spellings follow the highlighting legend in `midl3_core::lang::legend`;
/// [`TokenKind::name`] yields the legend name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Str,
    Keyword,
    Number,
    Operator,
    Namespace,
    Type,
    Struct,
    Class,
    Interface,
    Enum,
    Method,
    Parameter,
    Property,
    PreProcessor,
    Attribute,
    Identifier,
    ScopeToken,
    Semicolon,
    Colon,
    Comma,
    EnumMember,
}

impl TokenKind {
    /// Legend name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Str => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Namespace => "namespace",
            TokenKind::Type => "type",
            TokenKind::Struct => "struct",
            TokenKind::Class => "class",
            TokenKind::Interface => "interface",
            TokenKind::Enum => "enum",
            TokenKind::Method => "method",
            TokenKind::Parameter => "parameter",
            TokenKind::Property => "property",
            TokenKind::PreProcessor => "preProcessor",
            TokenKind::Attribute => "attribute",
            TokenKind::Identifier => "identifier",
            TokenKind::ScopeToken => "scopeToken",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::EnumMember => "enumMember",
        }
    }
}

/// Modifier attached to a token at lex time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenModifier {
    /// Built-in WinRT type name.
    DefaultLibrary,
}

impl TokenModifier {
    /// Legend name for this modifier.
    pub fn name(self) -> &'static str {
        match self {
            TokenModifier::DefaultLibrary => "defaultLibrary",
        }
    }
}

/// The semantic node a token was scanned inside, captured *after* any scope
/// transition the token itself triggered.
///
/// Property scopes and parameters are never surfaced as context; they only
/// steer classification of their child tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Namespace(NamespaceId),
    Type(TypeId),
    Member(MemberId),
    Params(ParamScopeId),
}

/// A token's syntactic function within its context, resolved during the
/// remap pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Name,
    ReturnType,
    EnumValue,
    Extends,
}

/// A classified token with position, context, and role.
///
/// Immutable once committed, except for `kind`, which the remap pass may
/// rewrite exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// 0-based source line.
    pub line: usize,
    /// 0-based column in characters.
    pub col: usize,
    /// Length in characters.
    pub length: usize,
    /// Byte span into the source text.
    pub span: Span,
    pub kind: TokenKind,
    pub modifiers: Vec<TokenModifier>,
    pub context: Option<Context>,
    pub role: Option<Role>,
}

impl Token {
    /// Slice the source text this token covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}
