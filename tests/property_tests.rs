//! Property-based tests for the MIDL 3 frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use midl3::parse;
use midl3_syntax::model::MemberKind;
use proptest::prelude::*;

/// Identifier that cannot collide with keywords (lowercase) or built-in
/// type names (filtered).
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z0-9]{1,8}".prop_filter("not a builtin type name", |s| {
        midl3_core::lang::types::from_str(s).is_none()
    })
}

proptest! {
    /// Property: Parsing arbitrary input never panics
    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    /// Property: Parsing is deterministic
    #[test]
    fn parse_is_deterministic(input in any::<String>()) {
        let a = parse(&input);
        let b = parse(&input);
        prop_assert_eq!(a.tokens, b.tokens);
        prop_assert_eq!(a.errors, b.errors);
    }

    /// Property: Token spans are in bounds, non-overlapping, and in document order
    #[test]
    fn token_spans_are_ordered(input in any::<String>()) {
        let out = parse(&input);
        let mut cursor = 0;
        for token in &out.tokens {
            prop_assert!(token.span.start >= cursor);
            prop_assert!(token.span.end <= input.len());
            prop_assert!(token.span.start < token.span.end);
            cursor = token.span.end;
        }
    }

    /// Property: Generated well-formed declarations parse cleanly and cover
    /// every non-whitespace character with a token
    #[test]
    fn well_formed_declarations_parse_cleanly(
        ns in ident_strategy(),
        ty in ident_strategy(),
    ) {
        let source = format!(
            "namespace {ns} {{ runtimeclass {ty} {{ {ty}(); void Close(); }} }}"
        );
        let out = parse(&source);
        prop_assert!(out.errors.is_empty(), "errors: {:?}", out.errors);

        prop_assert_eq!(out.model.namespaces[0].id.as_str(), ns.as_str());
        let declared = out.model.ty(out.model.namespaces[0].types[0]);
        prop_assert_eq!(declared.id.as_str(), ty.as_str());
        prop_assert_eq!(out.model.member(declared.members[0]).kind, MemberKind::Ctor);

        // Coverage: every non-whitespace char falls inside some token span.
        for (idx, c) in source.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            prop_assert!(
                out.tokens.iter().any(|t| t.span.start <= idx && idx < t.span.end),
                "char {:?} at {} not covered",
                c,
                idx
            );
        }
    }

    /// Property: Unbalanced openers are reported exactly once at end of input
    #[test]
    fn unclosed_braces_report_an_unterminated_scope(n in 1usize..20) {
        let out = parse(&"{".repeat(n));
        prop_assert_eq!(out.errors.len(), 1);
        prop_assert_eq!(out.tokens.len(), n);
    }

    /// Property: Every stray closer is its own scope violation
    #[test]
    fn stray_closers_each_report(n in 1usize..20) {
        let out = parse(&")".repeat(n));
        prop_assert_eq!(out.errors.len(), n);
    }
}
