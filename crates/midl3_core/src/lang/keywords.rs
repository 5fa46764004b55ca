//! Define the structural keyword vocabulary for MIDL 3.
//!
//! This module is the single source of truth for the reserved words the
//! tokenizer recognizes: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings and the role
//! each keyword plays in a declaration.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; MIDL 3 keywords have no
//!   aliases.
//! - `get`/`set` are keywords only inside a property accessor block; the
//!   parser owns that context. The registry just records the spelling.
//!
//! ## Examples
//! ```rust
//! use midl3_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("runtimeclass"), Some(KeywordId::Runtimeclass));
//! assert_eq!(keywords::as_str(KeywordId::Enum), "enum");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Containers
    Namespace,

    // Type declarators
    Runtimeclass,
    Struct,
    Interface,
    Enum,
    Delegate,

    // Member modifiers
    Event,

    // Property accessors
    Get,
    Set,

    // Imports
    Import,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Container,
    TypeDeclarator,
    MemberModifier,
    Accessor,
    Import,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Namespace,
        "namespace",
        KeywordCategory::Container,
        "Open a namespace; namespaces may nest inside namespaces only.",
    ),
    info(
        KeywordId::Runtimeclass,
        "runtimeclass",
        KeywordCategory::TypeDeclarator,
        "Declare a WinRT runtime class.",
    ),
    info(
        KeywordId::Struct,
        "struct",
        KeywordCategory::TypeDeclarator,
        "Declare a plain-data struct.",
    ),
    info(
        KeywordId::Interface,
        "interface",
        KeywordCategory::TypeDeclarator,
        "Declare a WinRT interface.",
    ),
    info(
        KeywordId::Enum,
        "enum",
        KeywordCategory::TypeDeclarator,
        "Declare an enumeration.",
    ),
    info(
        KeywordId::Delegate,
        "delegate",
        KeywordCategory::TypeDeclarator,
        "Declare a delegate; its signature becomes an implicit Invoke member.",
    ),
    info(
        KeywordId::Event,
        "event",
        KeywordCategory::MemberModifier,
        "Mark the following member declaration as an event.",
    ),
    info(
        KeywordId::Get,
        "get",
        KeywordCategory::Accessor,
        "Property getter accessor.",
    ),
    info(
        KeywordId::Set,
        "set",
        KeywordCategory::Accessor,
        "Property setter accessor.",
    ),
    info(
        KeywordId::Import,
        "import",
        KeywordCategory::Import,
        "Import another IDL file.",
    ),
];

/// The keywords that may introduce a declaration after `namespace ... {`.
/// Matched by the tokenizer's structural-keyword rule (not `import`).
pub const STRUCTURAL_KEYWORDS: &[KeywordId] = &[
    KeywordId::Namespace,
    KeywordId::Runtimeclass,
    KeywordId::Struct,
    KeywordId::Interface,
    KeywordId::Enum,
    KeywordId::Delegate,
    KeywordId::Event,
    KeywordId::Get,
    KeywordId::Set,
];

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Canonical spelling for a keyword id.
pub fn as_str(id: KeywordId) -> &'static str {
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(k) => k.canonical,
        // Every id appears in KEYWORDS; guarded by the registry parity test.
        None => "",
    }
}

/// Return `true` if the spelling is a property accessor (`get`/`set`).
pub fn is_accessor(s: &str) -> bool {
    matches!(from_str(s), Some(KeywordId::Get) | Some(KeywordId::Set))
}
