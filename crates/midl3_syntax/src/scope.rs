//! The scope stack: open semantic elements, innermost last.
//!
//! Entries are one tagged enum so the engine's transition logic can match
//! exhaustively. The stack is unbounded; nesting depth follows the input.
//!
//! Popping an empty stack returns `None` rather than silently no-opping;
//! that state signals a grammar error and the engine is expected to check it.

use crate::model::{MemberId, NamespaceId, ParamScopeId, TypeId};

/// One open scope on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Namespace(NamespaceId),
    Type(TypeId),
    Member(MemberId),
    Params(ParamScopeId),
    /// Accessor block of a property; collects `get`/`set` into the member
    /// directly below it.
    Property,
    /// Anonymous brace block at the top level; opens nothing nameable but
    /// still must be closed before end of input.
    Block,
}

impl Scope {
    /// Human-readable scope kind, used in diagnostics.
    pub fn kind_name(self) -> &'static str {
        match self {
            Scope::Namespace(_) => "Namespace",
            Scope::Type(_) => "Type",
            Scope::Member(_) => "Member",
            Scope::Params(_) => "ParameterScope",
            Scope::Property => "PropertyScope",
            Scope::Block => "Block",
        }
    }
}

/// LIFO stack of open scopes with relative indexed peek.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    entries: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: Scope) {
        self.entries.push(scope);
    }

    pub fn pop(&mut self) -> Option<Scope> {
        self.entries.pop()
    }

    /// Peek at the scope `depth` positions below the top (0 = top).
    pub fn peek(&self, depth: usize) -> Option<Scope> {
        let len = self.entries.len();
        if depth >= len {
            return None;
        }
        Some(self.entries[len - 1 - depth])
    }

    /// The innermost open scope.
    pub fn top(&self) -> Option<Scope> {
        self.peek(0)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
