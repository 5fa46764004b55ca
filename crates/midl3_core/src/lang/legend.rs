//! Semantic token legend shared with highlighting consumers.
//!
//! Editors register a fixed legend (ordered name lists) once, then receive
//! tokens as integer indices into it. The lists here are therefore
//! **append-only**: reordering or removing an entry silently recolors every
//! document that was highlighted against the old legend.
//!
//! Several entries (`regexp`, `typeParameter`, `function`, `macro`,
//! `variable`, `label`) are never produced by the tokenizer but keep their
//! slots so the produced indices stay stable.

/// Ordered token-type names. A token kind's legend index is its position
/// in this list.
pub const TOKEN_TYPES: &[&str] = &[
    "comment",
    "string",
    "keyword",
    "number",
    "regexp",
    "operator",
    "namespace",
    "type",
    "struct",
    "class",
    "interface",
    "enum",
    "typeParameter",
    "function",
    "method",
    "macro",
    "variable",
    "parameter",
    "property",
    "label",
    "preProcessor",
    "attribute",
    "identifier",
    "scopeToken",
    "semicolon",
    "colon",
    "comma",
    "enumMember",
    "import",
    "file",
];

/// Ordered token-modifier names. A modifier's bit position is its position
/// in this list.
pub const TOKEN_MODIFIERS: &[&str] = &[
    "declaration",
    "documentation",
    "readonly",
    "static",
    "abstract",
    "deprecated",
    "modification",
    "async",
    "defaultLibrary",
];

/// Legend index of a token-type name. Unrecognized names map to a defined
/// fallback slot past the end of the legend rather than failing.
pub fn token_type_index(name: &str) -> u32 {
    match TOKEN_TYPES.iter().position(|t| *t == name) {
        Some(idx) => idx as u32,
        None => TOKEN_TYPES.len() as u32 + 2,
    }
}

/// Bitmask for a set of modifier names. Unrecognized names set a defined
/// fallback bit past the end of the legend.
pub fn modifier_bitmask<S: AsRef<str>>(names: &[S]) -> u32 {
    let mut mask = 0u32;
    for name in names {
        match TOKEN_MODIFIERS.iter().position(|m| *m == name.as_ref()) {
            Some(bit) => mask |= 1 << bit,
            None => mask |= 1 << (TOKEN_MODIFIERS.len() + 2),
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_slot() {
        assert_eq!(token_type_index("comment"), 0);
        assert_eq!(token_type_index("namespace"), 6);
        assert_eq!(token_type_index("enumMember"), 27);
    }

    #[test]
    fn unknown_name_maps_to_fallback_slot() {
        assert_eq!(token_type_index("nope"), TOKEN_TYPES.len() as u32 + 2);
    }

    #[test]
    fn modifier_bits_follow_legend_order() {
        assert_eq!(modifier_bitmask(&["declaration"]), 1);
        assert_eq!(modifier_bitmask(&["defaultLibrary"]), 1 << 8);
        assert_eq!(modifier_bitmask(&["declaration", "static"]), 1 | (1 << 3));
    }

    #[test]
    fn unknown_modifier_sets_fallback_bit() {
        assert_eq!(modifier_bitmask(&["notInLegend"]), 1 << (TOKEN_MODIFIERS.len() + 2));
    }
}
