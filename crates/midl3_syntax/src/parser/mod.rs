//! The scanner/parser engine.
//!
//! A single left-to-right pass that classifies tokens, applies scope
//! transitions keyed on the token's literal content and the current
//! top-of-stack kind, and builds the semantic model as scopes open. Each
//! freshly lexed token is staged until its transitions have run, so the
//! context attached to it always reflects the scope active *after* any
//! transition the token itself triggered.
//!
//! On a lexical dead end the engine records an error and skips forward to a
//! synchronization character (`]`, `)`, `}`, `;`) outside a string, which
//! bounds the damage of malformed input to one statement or grouping while
//! guaranteeing forward progress.

mod rules;

pub use rules::{RuleMatch, classify};

use crate::diagnostics::{ErrorKind, ParseError};
use crate::model::{Member, MemberKind, Model, Namespace, ParamScope, Parameter, Type, TypeKind};
use crate::remap;
use crate::scope::{Scope, ScopeStack};
use crate::token::{Context, Role, Span, Token, TokenKind};

/// Result of one parse: the committed token stream, the semantic model, and
/// every diagnostic recorded along the way.
///
/// All three are always populated; malformed input degrades the model and
/// adds errors but never suppresses the token stream.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub tokens: Vec<Token>,
    pub model: Model,
    pub errors: Vec<ParseError>,
}

/// Scan and remap in one call. This is the main public entrypoint.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn parse(text: &str) -> ParseOutput {
    let mut out = scan(text);
    remap::remap(&mut out.tokens, &out.model, text);
    out
}

/// Run only the structural pass, leaving identifier tokens generic.
///
/// Exposed separately so the remap pass stays independently testable.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn scan(text: &str) -> ParseOutput {
    Parser::new(text).run()
}

struct Parser<'a> {
    text: &'a str,
    /// Byte offset of the cursor.
    idx: usize,
    /// 0-based line of the cursor.
    line: usize,
    /// 0-based column of the cursor, in characters.
    col: usize,
    stack: ScopeStack,
    model: Model,
    tokens: Vec<Token>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            idx: 0,
            line: 0,
            col: 0,
            stack: ScopeStack::new(),
            model: Model::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn run(mut self) -> ParseOutput {
        while self.idx < self.text.len() {
            self.skip_trivia();
            if self.idx >= self.text.len() {
                break;
            }
            match rules::classify(&self.text[self.idx..]) {
                Some(m) => self.accept(m),
                None => {
                    self.error(ErrorKind::LexicalDeadEnd, "No token rule matches this input");
                    self.recover();
                }
            }
        }

        if let Some(top) = self.stack.top() {
            self.error(
                ErrorKind::UnterminatedScope,
                format!("Unexpected end of file. Top of the scope stack: {}", top.kind_name()),
            );
        }

        ParseOutput {
            tokens: self.tokens,
            model: self.model,
            errors: self.errors,
        }
    }

    /// Skip spaces, tabs, and end-of-line sequences, updating line/column.
    fn skip_trivia(&mut self) {
        while self.idx < self.text.len() {
            let rest = &self.text[self.idx..];
            let eol = rules::eol_len(rest);
            if eol != 0 {
                self.idx += eol;
                self.line += 1;
                self.col = 0;
            } else if rest.starts_with(' ') || rest.starts_with('\t') {
                self.idx += 1;
                self.col += 1;
            } else {
                break;
            }
        }
    }

    /// Stage the matched token, run scope transitions, capture context from
    /// the post-transition stack, and commit.
    fn accept(&mut self, m: RuleMatch) {
        let src = self.text;
        let start = self.idx;
        let end = start + m.len;
        let text = &src[start..end];
        let mut kind = m.kind;
        let mut role = None;

        let prev = self.tokens.last().map(|t| (t.kind, t.span));
        let prev_kind = prev.map(|(k, _)| k);
        let prev_text = prev.map(|(_, span)| &src[span.start..span.end]);

        // Structural triggers, independent of the current scope kind.
        match text {
            "{" => self.on_open_brace(),
            "}" => self.on_close_brace(prev_kind),
            "(" => self.on_open_paren(prev_kind),
            ")" => self.on_close_paren(),
            "," => self.on_comma(),
            _ => {}
        }

        if prev_text == Some("namespace") {
            self.on_namespace_name(text);
        } else if !self.stack.is_empty() {
            // Scope-kind-specific handling. `top()` is present: checked above.
            match self.stack.top() {
                Some(Scope::Namespace(_)) => {
                    if kind == TokenKind::Identifier && prev_kind == Some(TokenKind::Keyword) {
                        if let Some(decl) = prev_text {
                            kind = self.open_type(decl, text);
                        }
                    }
                }
                Some(Scope::Type(tid)) => {
                    role = self.in_type_scope(tid, kind, prev_kind, prev_text, text);
                }
                Some(Scope::Member(mid)) => {
                    role = self.in_member_scope(mid, kind, text);
                }
                Some(Scope::Params(pid)) => {
                    role = self.in_param_scope(pid, kind, text);
                }
                Some(Scope::Property) => {
                    self.in_property_scope(kind, text);
                }
                Some(Scope::Block) | None => {}
            }
        }

        let context = match self.stack.top() {
            Some(Scope::Namespace(id)) => Some(Context::Namespace(id)),
            Some(Scope::Type(id)) => Some(Context::Type(id)),
            Some(Scope::Member(id)) => Some(Context::Member(id)),
            Some(Scope::Params(id)) => Some(Context::Params(id)),
            Some(Scope::Property) | Some(Scope::Block) | None => None,
        };

        let length = text.chars().count();
        self.tokens.push(Token {
            line: self.line,
            col: self.col,
            length,
            span: Span::new(start, end),
            kind,
            modifiers: m.modifier.into_iter().collect(),
            context,
            role,
        });

        self.idx = end;
        let breaks = count_line_breaks(text);
        if breaks != 0 {
            self.line += breaks;
            // Column continues after the token's last line.
            let tail = text.rfind(['\r', '\n']).map(|i| i + 1).unwrap_or(0);
            self.col = text[tail..].chars().count();
        } else {
            self.col += length;
        }
    }

    // ========================================================================
    // Structural triggers
    // ========================================================================

    /// `{` directly after a member turns the member into a property and
    /// opens its accessor block. A brace at the very top level opens an
    /// anonymous block so an unclosed one is reported at end of input.
    fn on_open_brace(&mut self) {
        match self.stack.top() {
            Some(Scope::Member(mid)) => {
                let member = self.model.member_mut(mid);
                member.kind = MemberKind::Property;
                member.accessors = Some(Vec::new());
                self.stack.push(Scope::Property);
            }
            None => self.stack.push(Scope::Block),
            Some(_) => {}
        }
    }

    fn on_close_brace(&mut self, prev_kind: Option<TokenKind>) {
        match self.stack.pop() {
            None => {
                self.error(ErrorKind::ScopeViolation, "Unexpected '}' with no open scope");
            }
            Some(Scope::Property) => {
                if prev_kind != Some(TokenKind::Semicolon) {
                    self.error(
                        ErrorKind::MemberShapeViolation,
                        "Property accessors must be followed by a semicolon",
                    );
                }
                match self.stack.top() {
                    Some(Scope::Member(mid)) => {
                        self.validate_property(mid);
                        self.stack.pop();
                    }
                    other => {
                        let kind_name = other.map(Scope::kind_name).unwrap_or("<empty>");
                        self.error(
                            ErrorKind::ScopeViolation,
                            format!("Unexpected property inside non-member {kind_name}"),
                        );
                    }
                }
            }
            Some(_) => {
                // Closing brace of an enum also closes its pending value entry.
                if let Some(Scope::Type(tid)) = self.stack.top() {
                    if self.model.ty(tid).kind == TypeKind::Enum {
                        self.stack.pop();
                    }
                }
            }
        }
    }

    fn validate_property(&mut self, mid: crate::model::MemberId) {
        let member = self.model.member(mid);
        let display = member.display_name.clone();
        let accessors = member.accessors.clone().unwrap_or_default();

        if accessors.is_empty() {
            self.error(
                ErrorKind::MemberShapeViolation,
                format!("Property {display} has no accessors"),
            );
            return;
        }
        let bad: Vec<String> = accessors
            .iter()
            .filter(|a| !midl3_core::lang::keywords::is_accessor(a))
            .cloned()
            .collect();
        if !bad.is_empty() {
            self.error(
                ErrorKind::MemberShapeViolation,
                format!("Bad accessors for property {display} - {}", bad.join(", ")),
            );
        }
        if accessors.iter().filter(|a| *a == "get").count() > 1 {
            self.error(
                ErrorKind::MemberShapeViolation,
                format!("More than one getter for property {display}"),
            );
        }
        if accessors.iter().filter(|a| *a == "set").count() > 1 {
            self.error(
                ErrorKind::MemberShapeViolation,
                format!("More than one setter for property {display}"),
            );
        }
    }

    /// `(` after an identifier or class token starts an invocation
    /// signature: a delegate's implicit `Invoke`, or the pending member's
    /// parameter list (resolving ctor vs method by name).
    fn on_open_paren(&mut self, prev_kind: Option<TokenKind>) {
        if !matches!(prev_kind, Some(TokenKind::Identifier) | Some(TokenKind::Class)) {
            return;
        }
        match self.stack.top() {
            Some(Scope::Type(tid)) if self.model.ty(tid).kind == TypeKind::Delegate => {
                let params = self.model.alloc_param_scope(ParamScope::default());
                let invoke = self.model.alloc_member(Member {
                    id: "Invoke".to_string(),
                    display_name: String::new(),
                    kind: MemberKind::Method,
                    params: Some(params),
                    ..Member::default()
                });
                self.model.ty_mut(tid).members.push(invoke);
                self.stack.push(Scope::Params(params));
            }
            Some(Scope::Member(mid)) => match self.stack.peek(1) {
                Some(Scope::Type(tid)) => {
                    let is_ctor = self.model.ty(tid).id == self.model.member(mid).display_name;
                    let params = self.model.alloc_param_scope(ParamScope::default());
                    let member = self.model.member_mut(mid);
                    member.kind = if is_ctor { MemberKind::Ctor } else { MemberKind::Method };
                    member.params = Some(params);
                    self.stack.push(Scope::Params(params));
                }
                _ => {
                    self.error(
                        ErrorKind::ScopeViolation,
                        "Cannot begin method or delegate declaration because current scope is not a Type",
                    );
                }
            },
            _ => {
                self.error(
                    ErrorKind::ScopeViolation,
                    "Cannot begin method or delegate declaration because current scope is not a Type",
                );
            }
        }
    }

    fn on_close_paren(&mut self) {
        if self.stack.pop().is_none() {
            self.error(ErrorKind::ScopeViolation, "Unexpected ')' with no open scope");
        }
    }

    /// Inside an enum each value is its own one-token member, terminated by
    /// `,` instead of `;`.
    fn on_comma(&mut self) {
        if matches!(self.stack.top(), Some(Scope::Member(_))) {
            if let Some(Scope::Type(tid)) = self.stack.peek(1) {
                if self.model.ty(tid).kind == TypeKind::Enum {
                    self.stack.pop();
                }
            }
        }
    }

    // ========================================================================
    // Scope-kind-specific handling
    // ========================================================================

    fn on_namespace_name(&mut self, text: &str) {
        let top = self.stack.top();
        if top.is_none() || matches!(top, Some(Scope::Namespace(_))) {
            let ns = self.model.alloc_namespace(Namespace {
                id: text.to_string(),
                types: Vec::new(),
            });
            self.stack.push(Scope::Namespace(ns));
        } else if let Some(top) = top {
            self.error(
                ErrorKind::ScopeViolation,
                format!(
                    "Namespaces can only appear at the top level or inside namespaces, current scope is {}",
                    top.kind_name()
                ),
            );
        }
    }

    /// A type declaration like `runtimeclass MyClass`: opens the type and
    /// reclassifies the name token to its semantic kind.
    fn open_type(&mut self, decl: &str, name: &str) -> TokenKind {
        let type_kind = TypeKind::from_spelling(decl);
        let tid = self.model.alloc_type(Type {
            id: name.to_string(),
            kind: type_kind,
            ..Type::default()
        });
        if let Some(Scope::Namespace(ns)) = self.stack.top() {
            self.model.namespaces[ns.index()].types.push(tid);
        }
        self.stack.push(Scope::Type(tid));
        remap::token_kind_for_type(type_kind)
    }

    fn in_type_scope(
        &mut self,
        tid: crate::model::TypeId,
        kind: TokenKind,
        prev_kind: Option<TokenKind>,
        prev_text: Option<&str>,
        text: &str,
    ) -> Option<Role> {
        let type_kind = self.model.ty(tid).kind;
        let prev_is_colon = prev_kind == Some(TokenKind::Colon);
        let prev_is_comma = prev_kind == Some(TokenKind::Comma);

        if type_kind != TypeKind::Enum && type_kind != TypeKind::Struct && (prev_is_colon || prev_is_comma) {
            let type_id = self.model.ty(tid).id.clone();
            let extends_len = self.model.ty(tid).extends.len();
            if prev_is_colon && extends_len != 0 {
                self.error(
                    ErrorKind::InheritanceSyntaxViolation,
                    format!("Extending type {type_id} - found a colon when we already found one"),
                );
            } else if prev_is_comma && extends_len == 0 {
                self.error(
                    ErrorKind::InheritanceSyntaxViolation,
                    format!("Extending type {type_id} - found a comma without a previous colon"),
                );
            }
            self.model.ty_mut(tid).extends.push(text.to_string());
            return Some(Role::Extends);
        }

        if kind == TokenKind::Identifier || kind == TokenKind::Type {
            // A member declaration: `MyType Foo { get; }` or `MyType Foo();`.
            let role = if type_kind == TypeKind::Enum {
                Role::EnumValue
            } else {
                Role::ReturnType
            };
            let member_kind = if type_kind == TypeKind::Enum || type_kind == TypeKind::Struct {
                MemberKind::Field
            } else if prev_kind == Some(TokenKind::Keyword) && prev_text == Some("event") {
                MemberKind::Event
            } else {
                MemberKind::Unknown
            };
            let mid = self.model.alloc_member(Member {
                id: text.to_string(),
                display_name: text.to_string(),
                kind: member_kind,
                ..Member::default()
            });
            self.model.ty_mut(tid).members.push(mid);
            self.stack.push(Scope::Member(mid));
            return Some(role);
        }

        if kind == TokenKind::Semicolon && type_kind == TypeKind::Delegate {
            // Bodyless delegate declaration: `delegate D(X x);`.
            self.stack.pop();
        }
        None
    }

    fn in_member_scope(&mut self, mid: crate::model::MemberId, kind: TokenKind, text: &str) -> Option<Role> {
        match kind {
            TokenKind::Identifier => {
                let member = self.model.member_mut(mid);
                if member.return_type.is_none() {
                    // What we stored as the name so far was actually the
                    // return type; the current token is the real name.
                    member.return_type = Some(std::mem::take(&mut member.display_name));
                    member.id = text.to_string();
                    member.display_name = text.to_string();
                } else {
                    let member_id = member.id.clone();
                    self.error(
                        ErrorKind::MemberShapeViolation,
                        format!("Found unexpected member {member_id}"),
                    );
                }
                Some(Role::Name)
            }
            TokenKind::Semicolon => {
                let member = self.model.member(mid);
                if member.kind == MemberKind::Property {
                    let msg = format!(
                        "Semicolon found after {} {}",
                        member.kind.as_str(),
                        member.display_name
                    );
                    self.error(ErrorKind::MemberShapeViolation, msg);
                } else {
                    self.stack.pop();
                }
                None
            }
            _ => None,
        }
    }

    fn in_param_scope(&mut self, pid: crate::model::ParamScopeId, kind: TokenKind, text: &str) -> Option<Role> {
        if kind != TokenKind::Identifier && kind != TokenKind::Type {
            return None;
        }
        let starts_new = {
            let scope = self.model.param_scope(pid);
            scope.params.is_empty() || scope.params.last().is_some_and(|p| p.id.is_some())
        };
        if starts_new {
            self.model.param_scope_mut(pid).params.push(Parameter {
                param_type: text.to_string(),
                id: None,
            });
            return Some(Role::ReturnType);
        }
        let scope = self.model.param_scope_mut(pid);
        if let Some(param) = scope.params.last_mut() {
            if param.id.is_none() && !param.param_type.is_empty() {
                param.id = Some(text.to_string());
                return Some(Role::Name);
            }
            let (name, ty) = (param.id.clone().unwrap_or_default(), param.param_type.clone());
            self.error(
                ErrorKind::MemberShapeViolation,
                format!("Parameter {name} already has set type {ty}"),
            );
        }
        None
    }

    fn in_property_scope(&mut self, kind: TokenKind, text: &str) {
        match kind {
            TokenKind::Method => {
                // Accessor keyword: collect it on the owning member.
                if let Some(Scope::Member(mid)) = self.stack.peek(1) {
                    if let Some(list) = self.model.member_mut(mid).accessors.as_mut() {
                        list.push(text.to_string());
                    }
                }
            }
            TokenKind::ScopeToken | TokenKind::Semicolon => {}
            _ => {
                let display = match self.stack.peek(1) {
                    Some(Scope::Member(mid)) => self.model.member(mid).display_name.clone(),
                    _ => String::new(),
                };
                self.error(
                    ErrorKind::MemberShapeViolation,
                    format!("Property {display} can only contain accessors"),
                );
            }
        }
    }

    // ========================================================================
    // Error recording and recovery
    // ========================================================================

    fn error(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.errors.push(ParseError {
            line: self.line,
            col: self.col,
            offset: self.idx,
            token: self.current_char(),
            message: message.into(),
            kind,
        });
    }

    fn current_char(&self) -> String {
        self.text[self.idx..].chars().next().map(String::from).unwrap_or_default()
    }

    /// Skip to just past the next synchronization character (`]`, `)`, `}`,
    /// `;`) outside a string, or to end of input. Always consumes at least
    /// one character, so the cursor strictly advances past the failure.
    fn recover(&mut self) {
        let mut quote: Option<char> = None;
        while self.idx < self.text.len() {
            let rest = &self.text[self.idx..];
            let eol = rules::eol_len(rest);
            if eol != 0 {
                self.idx += eol;
                self.line += 1;
                self.col = 0;
                continue;
            }
            let Some(c) = rest.chars().next() else {
                break;
            };
            self.idx += c.len_utf8();
            self.col += 1;
            match quote {
                Some(q) => {
                    if c == q {
                        quote = None;
                    }
                }
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    ']' | ')' | '}' | ';' => return,
                    _ => {}
                },
            }
        }
    }
}

/// Number of line breaks in a token's matched text (`\r\n` counts once).
fn count_line_breaks(text: &str) -> usize {
    let mut breaks = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                breaks += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => breaks += 1,
            _ => {}
        }
        i += 1;
    }
    breaks
}
