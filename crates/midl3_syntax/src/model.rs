//! The semantic model built incrementally while scanning.
//!
//! Nodes live in a flat arena ([`Model`]) and reference each other through
//! typed indices. The scope stack and token contexts store indices too, so
//! there is no shared-mutable aliasing between the stack, the model, and the
//! token stream.

use midl3_core::lang::keywords::{self, KeywordId};

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Index of a [`Namespace`] in the model arena.
    NamespaceId
);
arena_id!(
    /// Index of a [`Type`] in the model arena.
    TypeId
);
arena_id!(
    /// Index of a [`Member`] in the model arena.
    MemberId
);
arena_id!(
    /// Index of a [`ParamScope`] in the model arena.
    ParamScopeId
);

/// Declaration kind of a [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeKind {
    Runtimeclass,
    Interface,
    Enum,
    Delegate,
    Struct,
    #[default]
    Unknown,
}

impl TypeKind {
    /// Map a declaration keyword to a type kind.
    pub fn from_keyword(id: KeywordId) -> TypeKind {
        match id {
            KeywordId::Runtimeclass => TypeKind::Runtimeclass,
            KeywordId::Interface => TypeKind::Interface,
            KeywordId::Enum => TypeKind::Enum,
            KeywordId::Delegate => TypeKind::Delegate,
            KeywordId::Struct => TypeKind::Struct,
            _ => TypeKind::Unknown,
        }
    }

    /// Map a declaration keyword spelling to a type kind.
    pub fn from_spelling(s: &str) -> TypeKind {
        match keywords::from_str(s) {
            Some(id) => TypeKind::from_keyword(id),
            None => TypeKind::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Runtimeclass => "runtimeclass",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
            TypeKind::Struct => "struct",
            TypeKind::Unknown => "unknown",
        }
    }
}

/// Resolved kind of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberKind {
    Method,
    Ctor,
    Event,
    Property,
    Field,
    /// Not yet resolved; decided when `(`, `{`, or `;` is reached.
    #[default]
    Unknown,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Ctor => "ctor",
            MemberKind::Event => "event",
            MemberKind::Property => "property",
            MemberKind::Field => "field",
            MemberKind::Unknown => "unknown",
        }
    }
}

/// A root-level namespace. Nested namespaces are registered at the document
/// root as well, mirroring how the scanner flattens them.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub id: String,
    pub types: Vec<TypeId>,
}

/// A type declaration owned by exactly one namespace.
#[derive(Debug, Clone, Default)]
pub struct Type {
    pub id: String,
    pub kind: TypeKind,
    pub members: Vec<MemberId>,
    /// Base-type names in declaration order.
    pub extends: Vec<String>,
}

/// A member declaration owned by exactly one type.
///
/// A member transitions from "return type captured, name pending" to "fully
/// named" exactly once; `display_name` holds whichever identifier was seen
/// last.
#[derive(Debug, Clone, Default)]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub kind: MemberKind,
    pub return_type: Option<String>,
    pub params: Option<ParamScopeId>,
    /// Present only for properties; collected inside the accessor block.
    pub accessors: Option<Vec<String>>,
}

/// Invocation signature of a member (or a delegate's implicit `Invoke`).
#[derive(Debug, Clone, Default)]
pub struct ParamScope {
    pub params: Vec<Parameter>,
}

/// A single parameter; "open" until a name token is accepted.
#[derive(Debug, Clone, Default)]
pub struct Parameter {
    pub param_type: String,
    pub id: Option<String>,
}

/// Arena of semantic nodes for one parse.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Root-level namespace order; also the arena for [`NamespaceId`].
    pub namespaces: Vec<Namespace>,
    pub types: Vec<Type>,
    pub members: Vec<Member>,
    pub param_scopes: Vec<ParamScope>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_namespace(&mut self, ns: Namespace) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        self.namespaces.push(ns);
        id
    }

    pub fn alloc_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub fn alloc_member(&mut self, member: Member) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        self.members.push(member);
        id
    }

    pub fn alloc_param_scope(&mut self, scope: ParamScope) -> ParamScopeId {
        let id = ParamScopeId(self.param_scopes.len() as u32);
        self.param_scopes.push(scope);
        id
    }

    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.index()]
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    pub fn ty_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.index()]
    }

    pub fn member(&self, id: MemberId) -> &Member {
        &self.members[id.index()]
    }

    pub fn member_mut(&mut self, id: MemberId) -> &mut Member {
        &mut self.members[id.index()]
    }

    pub fn param_scope(&self, id: ParamScopeId) -> &ParamScope {
        &self.param_scopes[id.index()]
    }

    pub fn param_scope_mut(&mut self, id: ParamScopeId) -> &mut ParamScope {
        &mut self.param_scopes[id.index()]
    }

    /// Resolve a dotted type reference against the model: the leading path
    /// selects a namespace, the trailing segment a type inside it.
    ///
    /// An unqualified name has an empty leading path and never matches;
    /// callers fall back to the generic type kind for those.
    pub fn resolve_qualified(&self, full_name: &str) -> Option<&Type> {
        let (ns_name, type_name) = match full_name.rfind('.') {
            Some(dot) => (&full_name[..dot], &full_name[dot + 1..]),
            None => ("", full_name),
        };
        let ns = self.namespaces.iter().find(|n| n.id == ns_name)?;
        ns.types
            .iter()
            .map(|tid| self.ty(*tid))
            .find(|t| t.id == type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        let mut model = Model::new();
        let tid = model.alloc_type(Type {
            id: "Widget".to_string(),
            kind: TypeKind::Runtimeclass,
            ..Type::default()
        });
        model.alloc_namespace(Namespace {
            id: "Acme.Controls".to_string(),
            types: vec![tid],
        });
        model
    }

    #[test]
    fn qualified_name_resolves_through_namespace() {
        let model = sample_model();
        let ty = model.resolve_qualified("Acme.Controls.Widget");
        assert!(matches!(ty, Some(t) if t.kind == TypeKind::Runtimeclass));
    }

    #[test]
    fn unqualified_name_does_not_resolve() {
        let model = sample_model();
        assert!(model.resolve_qualified("Widget").is_none());
    }

    #[test]
    fn wrong_namespace_path_does_not_resolve() {
        let model = sample_model();
        assert!(model.resolve_qualified("Acme.Widget").is_none());
        assert!(model.resolve_qualified("Acme.Controls.Gadget").is_none());
    }

    #[test]
    fn type_kind_from_spelling() {
        assert_eq!(TypeKind::from_spelling("runtimeclass"), TypeKind::Runtimeclass);
        assert_eq!(TypeKind::from_spelling("delegate"), TypeKind::Delegate);
        assert_eq!(TypeKind::from_spelling("event"), TypeKind::Unknown);
        assert_eq!(TypeKind::from_spelling("widget"), TypeKind::Unknown);
    }
}
