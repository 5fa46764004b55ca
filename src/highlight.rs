//! Semantic token encoding against the shared highlighting legend.
//!
//! Editors register the legend once and then receive tokens as integers, so
//! everything here is a thin, total mapping: every token kind and modifier
//! encodes to *some* index, with unknown names landing in the legend's
//! fallback slot instead of failing.

use midl3_core::lang::legend;
use midl3_syntax::token::Token;

/// Legend index for a token-type name.
pub fn encode_token_type(name: &str) -> u32 {
    legend::token_type_index(name)
}

/// Modifier bitmask for a set of modifier names.
pub fn encode_modifiers(names: &[&str]) -> u32 {
    legend::modifier_bitmask(names)
}

/// Flat `(line, col, length, type, modifiers)` quints for every token, in
/// document order. Positions are absolute; delta encoding is left to the
/// transport layer that registers the legend.
pub fn semantic_data(tokens: &[Token]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    for token in tokens {
        let modifiers: Vec<&str> = token.modifiers.iter().map(|m| m.name()).collect();
        data.push(token.line as u32);
        data.push(token.col as u32);
        data.push(token.length as u32);
        data.push(legend::token_type_index(token.kind.name()));
        data.push(legend::modifier_bitmask(&modifiers));
    }
    data
}
