//! Built-in WinRT type vocabulary.
//!
//! This module defines the canonical set of built-in type names the tokenizer
//! tags with the `defaultLibrary` modifier, plus the classic (pre-MIDL 3)
//! spellings that the suggestion pass flags with a modern replacement.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`string` is classic MIDL,
//!   `String` is MIDL 3).
//!
//! ## Examples
//! ```rust
//! use midl3_core::lang::types::{self, BuiltinTypeId};
//!
//! assert_eq!(types::from_str("Int32"), Some(BuiltinTypeId::Int32));
//! assert_eq!(types::classic_replacement("PWSTR"), Some(BuiltinTypeId::String));
//! ```

/// Stable identifier for a built-in type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTypeId {
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Char,
    String,
    Single,
    Double,
    Boolean,
    Guid,
    Void,
}

/// Metadata for a built-in type.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTypeInfo {
    pub id: BuiltinTypeId,
    pub canonical: &'static str,
    pub description: &'static str,
}

const fn info(id: BuiltinTypeId, canonical: &'static str, description: &'static str) -> BuiltinTypeInfo {
    BuiltinTypeInfo {
        id,
        canonical,
        description,
    }
}

/// Registry of all built-in types, in the order the tokenizer tries them.
pub const BUILTIN_TYPES: &[BuiltinTypeInfo] = &[
    info(BuiltinTypeId::Int16, "Int16", "16-bit signed integer."),
    info(BuiltinTypeId::Int32, "Int32", "32-bit signed integer."),
    info(BuiltinTypeId::Int64, "Int64", "64-bit signed integer."),
    info(BuiltinTypeId::UInt8, "UInt8", "8-bit unsigned integer."),
    info(BuiltinTypeId::UInt16, "UInt16", "16-bit unsigned integer."),
    info(BuiltinTypeId::UInt32, "UInt32", "32-bit unsigned integer."),
    info(BuiltinTypeId::UInt64, "UInt64", "64-bit unsigned integer."),
    info(BuiltinTypeId::Char, "Char", "UTF-16 code unit."),
    info(BuiltinTypeId::String, "String", "Immutable WinRT string."),
    info(BuiltinTypeId::Single, "Single", "32-bit IEEE float."),
    info(BuiltinTypeId::Double, "Double", "64-bit IEEE float."),
    info(BuiltinTypeId::Boolean, "Boolean", "Boolean value."),
    info(BuiltinTypeId::Guid, "Guid", "128-bit GUID."),
    info(BuiltinTypeId::Void, "void", "No value; return types only."),
];

/// Classic MIDL spellings with their MIDL 3 replacements.
#[derive(Debug, Clone, Copy)]
pub struct ClassicTypeInfo {
    pub classic: &'static str,
    pub replacement: BuiltinTypeId,
}

const fn classic(spelling: &'static str, replacement: BuiltinTypeId) -> ClassicTypeInfo {
    ClassicTypeInfo {
        classic: spelling,
        replacement,
    }
}

/// Registry of classic MIDL type names the suggestion pass recognizes.
pub const CLASSIC_TYPES: &[ClassicTypeInfo] = &[
    classic("int", BuiltinTypeId::Int32),
    classic("short", BuiltinTypeId::Int16),
    classic("long", BuiltinTypeId::Int32),
    classic("PWSTR", BuiltinTypeId::String),
    classic("PCWSTR", BuiltinTypeId::String),
    classic("double", BuiltinTypeId::Double),
    classic("float", BuiltinTypeId::Single),
    classic("string", BuiltinTypeId::String),
];

/// Resolve a spelling to a built-in type id.
pub fn from_str(s: &str) -> Option<BuiltinTypeId> {
    BUILTIN_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Canonical spelling for a built-in type id.
pub fn as_str(id: BuiltinTypeId) -> &'static str {
    match BUILTIN_TYPES.iter().find(|t| t.id == id) {
        Some(t) => t.canonical,
        None => "",
    }
}

/// The MIDL 3 replacement for a classic MIDL spelling, if one is recognized.
pub fn classic_replacement(s: &str) -> Option<BuiltinTypeId> {
    CLASSIC_TYPES.iter().find(|c| c.classic == s).map(|c| c.replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips_every_id() {
        for t in BUILTIN_TYPES {
            assert_eq!(from_str(t.canonical), Some(t.id));
            assert_eq!(as_str(t.id), t.canonical);
        }
    }

    #[test]
    fn classic_spellings_resolve_to_modern_types() {
        assert_eq!(classic_replacement("int"), Some(BuiltinTypeId::Int32));
        assert_eq!(classic_replacement("float"), Some(BuiltinTypeId::Single));
        assert_eq!(classic_replacement("PCWSTR"), Some(BuiltinTypeId::String));
        assert_eq!(classic_replacement("Int32"), None);
    }

    #[test]
    fn builtin_lookup_is_case_sensitive() {
        assert_eq!(from_str("int32"), None);
        assert_eq!(from_str("Void"), None);
        assert_eq!(from_str("void"), Some(BuiltinTypeId::Void));
    }
}
