//! The context remapper: the second, pure pass over the token stream.
//!
//! An identifier's syntactic role (declared name? type reference?) is only
//! knowable once its whole declaration has been scanned, and resolving
//! `extends`/return-type references needs the completed model. This pass
//! therefore runs after scanning and rewrites each still-generic identifier
//! token exactly once, based on its attached context and role.

use crate::model::{MemberKind, Model, TypeKind};
use crate::token::{Context, Role, Token, TokenKind};

/// Token kind used when highlighting a type declared with the given keyword.
/// Runtime classes and delegates highlight as classes.
pub fn token_kind_for_type(kind: TypeKind) -> TokenKind {
    match kind {
        TypeKind::Runtimeclass | TypeKind::Delegate => TokenKind::Class,
        TypeKind::Interface => TokenKind::Interface,
        TypeKind::Enum => TokenKind::Enum,
        TypeKind::Struct => TokenKind::Struct,
        TypeKind::Unknown => TokenKind::Type,
    }
}

/// Token kind for a member's declared name, if its kind maps to one.
pub fn token_kind_for_member(kind: MemberKind) -> Option<TokenKind> {
    match kind {
        MemberKind::Method | MemberKind::Ctor | MemberKind::Event => Some(TokenKind::Method),
        MemberKind::Property | MemberKind::Field => Some(TokenKind::Property),
        MemberKind::Unknown => None,
    }
}

/// Resolve a (possibly dotted) type reference to the declared type's kind,
/// falling back to the generic `type` kind when the model has no match.
pub fn resolve_type_reference(model: &Model, full_name: &str) -> TokenKind {
    match model.resolve_qualified(full_name) {
        Some(ty) => token_kind_for_type(ty.kind),
        None => TokenKind::Type,
    }
}

/// Rewrite generic identifier tokens into semantic kinds in place.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn remap(tokens: &mut [Token], model: &Model, source: &str) {
    for token in tokens.iter_mut() {
        if token.kind != TokenKind::Identifier {
            continue;
        }
        let Some(context) = token.context else {
            continue;
        };
        let text = &source[token.span.start..token.span.end];

        token.kind = match context {
            Context::Namespace(_) => TokenKind::Namespace,
            Context::Type(tid) => match token.role {
                Some(Role::Extends) => resolve_type_reference(model, text),
                _ => token_kind_for_type(model.ty(tid).kind),
            },
            Context::Member(mid) => match token.role {
                Some(Role::ReturnType) => {
                    if model.member(mid).kind == MemberKind::Ctor {
                        TokenKind::Method
                    } else {
                        resolve_type_reference(model, text)
                    }
                }
                Some(Role::Name) => {
                    token_kind_for_member(model.member(mid).kind).unwrap_or(TokenKind::Identifier)
                }
                Some(Role::EnumValue) => TokenKind::EnumMember,
                _ => TokenKind::Identifier,
            },
            Context::Params(_) => match token.role {
                Some(Role::ReturnType) => resolve_type_reference(model, text),
                Some(Role::Name) => TokenKind::Parameter,
                _ => TokenKind::Identifier,
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, scan};

    fn kinds_of<'a>(source: &'a str, text: &str) -> Vec<TokenKind> {
        parse(source)
            .tokens
            .iter()
            .filter(|t| t.text(source) == text)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn namespace_identifiers_remap_to_namespace() {
        assert_eq!(kinds_of("namespace Foo { }", "Foo"), vec![TokenKind::Namespace]);
    }

    #[test]
    fn extends_resolves_against_the_model() {
        let source = "namespace N { interface IBase { } runtimeclass C : N.IBase { } }";
        assert_eq!(
            kinds_of(source, "N.IBase"),
            vec![TokenKind::Interface],
            "qualified base reference takes the declared type's kind"
        );
    }

    #[test]
    fn unresolved_extends_falls_back_to_generic_type() {
        let source = "namespace N { runtimeclass C : Windows.Foundation.IClosable { } }";
        assert_eq!(kinds_of(source, "Windows.Foundation.IClosable"), vec![TokenKind::Type]);
    }

    #[test]
    fn ctor_return_type_remaps_to_method() {
        let source = "namespace N { runtimeclass Bar { Bar(); } }";
        let out = parse(source);
        // First `Bar` is the type declaration, second the ctor name.
        let bars: Vec<TokenKind> = out
            .tokens
            .iter()
            .filter(|t| t.text(source) == "Bar")
            .map(|t| t.kind)
            .collect();
        assert_eq!(bars, vec![TokenKind::Class, TokenKind::Method]);
    }

    #[test]
    fn member_and_parameter_names_remap() {
        let source = "namespace N { interface I { void Frob(Int32 count); } }";
        assert_eq!(kinds_of(source, "Frob"), vec![TokenKind::Method]);
        assert_eq!(kinds_of(source, "count"), vec![TokenKind::Parameter]);
    }

    #[test]
    fn enum_values_remap_to_enum_member() {
        let source = "namespace N { enum Color { Red, Green } }";
        assert_eq!(kinds_of(source, "Red"), vec![TokenKind::EnumMember]);
        assert_eq!(kinds_of(source, "Green"), vec![TokenKind::EnumMember]);
    }

    #[test]
    fn scan_alone_leaves_identifiers_generic() {
        let source = "namespace Foo { }";
        let out = scan(source);
        let foo = out.tokens.iter().find(|t| t.text(source) == "Foo").cloned();
        assert_eq!(foo.map(|t| t.kind), Some(TokenKind::Identifier));
    }
}
