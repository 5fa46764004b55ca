//! Integration tests for the MIDL 3 frontend

use std::fs;
use std::path::Path;

use midl3::{highlight, parse, report, suggest};
use midl3_syntax::model::{MemberKind, TypeKind};
use midl3_syntax::token::TokenKind;

/// Test that all valid fixtures parse without diagnostics
#[test]
fn test_valid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/valid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "idl").unwrap_or(false) {
            let source = fs::read_to_string(&path).unwrap();
            let out = parse(&source);
            assert!(
                out.errors.is_empty(),
                "Expected {} to parse cleanly, got errors: {:?}",
                path.display(),
                out.errors
            );
            assert!(!out.tokens.is_empty());
            assert!(!out.model.namespaces.is_empty());
        }
    }
}

/// Test that invalid fixtures produce diagnostics but still yield tokens
#[test]
fn test_invalid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/invalid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "idl").unwrap_or(false) {
            let source = fs::read_to_string(&path).unwrap();
            let out = parse(&source);
            assert!(
                !out.errors.is_empty(),
                "Expected {} to produce diagnostics",
                path.display()
            );
            // Malformed input still produces a token stream and renders.
            assert!(!out.tokens.is_empty());
            let rendered = report::render(&path.to_string_lossy(), &source, &out.errors);
            assert!(!rendered.trim().is_empty());
        }
    }
}

/// End-to-end: model shape and remapped token kinds for a realistic document
#[test]
fn test_widget_document_end_to_end() {
    let source = fs::read_to_string("tests/fixtures/valid/widget.idl").unwrap();
    let out = parse(&source);
    assert!(out.errors.is_empty(), "errors: {:?}", out.errors);

    let ns = &out.model.namespaces[0];
    assert_eq!(ns.id, "Acme.Controls");
    let widget = out.model.ty(ns.types[0]);
    assert_eq!(widget.id, "Widget");
    assert_eq!(widget.kind, TypeKind::Runtimeclass);

    let kinds: Vec<MemberKind> = widget
        .members
        .iter()
        .map(|m| out.model.member(*m).kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            MemberKind::Ctor,
            MemberKind::Method,
            MemberKind::Property,
            MemberKind::Event
        ]
    );

    // Remapped token kinds for the interesting identifiers.
    let kind_of = |text: &str| {
        out.tokens
            .iter()
            .find(|t| t.text(&source) == text)
            .map(|t| t.kind)
    };
    assert_eq!(kind_of("Acme.Controls"), Some(TokenKind::Namespace));
    assert_eq!(kind_of("Widget"), Some(TokenKind::Class));
    assert_eq!(kind_of("Refresh"), Some(TokenKind::Method));
    assert_eq!(kind_of("Count"), Some(TokenKind::Property));
    assert_eq!(kind_of("Changed"), Some(TokenKind::Method));
    assert_eq!(kind_of("[default_interface]"), Some(TokenKind::Attribute));
}

/// The extends reference in shapes.idl resolves to the declared interface
#[test]
fn test_extends_resolution_across_a_document() {
    let source = fs::read_to_string("tests/fixtures/valid/shapes.idl").unwrap();
    let out = parse(&source);
    assert!(out.errors.is_empty(), "errors: {:?}", out.errors);

    // `IShape` appears as a declaration, a base reference, and a parameter
    // type. The base reference and parameter type stay unqualified, so they
    // fall back to the generic type kind rather than `interface`.
    let kinds: Vec<TokenKind> = out
        .tokens
        .iter()
        .filter(|t| t.text(&source) == "IShape")
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Interface, TokenKind::Type, TokenKind::Type]
    );

    let qualified = out.model.resolve_qualified("Acme.Geometry.IShape");
    assert!(matches!(qualified, Some(t) if t.kind == TypeKind::Interface));
}

/// Semantic data covers every token and encodes within the legend
#[test]
fn test_semantic_data_for_a_full_document() {
    let source = fs::read_to_string("tests/fixtures/valid/widget.idl").unwrap();
    let out = parse(&source);
    let data = highlight::semantic_data(&out.tokens);
    assert_eq!(data.len(), out.tokens.len() * 5);
}

/// Re-parsing the space-joined token texts reproduces the same kind sequence
#[test]
fn test_token_kinds_survive_reparsing_token_text() {
    for fixture in [
        "tests/fixtures/valid/widget.idl",
        "tests/fixtures/valid/shapes.idl",
    ] {
        let source = fs::read_to_string(fixture).unwrap();
        let first = parse(&source);
        let joined = first
            .tokens
            .iter()
            .map(|t| t.text(&source))
            .collect::<Vec<_>>()
            .join(" ");
        let second = parse(&joined);
        let a: Vec<TokenKind> = first.tokens.iter().map(|t| t.kind).collect();
        let b: Vec<TokenKind> = second.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(a, b, "kind sequence changed for {}", fixture);
    }
}

/// Classic type spellings produce modernization suggestions
#[test]
fn test_classic_type_suggestions() {
    let source = "namespace N { interface I { int Count(); PWSTR Name(); } }";
    let out = parse(source);
    let suggestions = suggest::classic_type_suggestions(&out, source);
    let pairs: Vec<(&str, &str)> = suggestions
        .iter()
        .map(|s| (s.classic.as_str(), s.replacement))
        .collect();
    assert_eq!(pairs, vec![("int", "Int32"), ("PWSTR", "String")]);
}
