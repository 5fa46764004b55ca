//! MIDL 3 vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: structural
//! keywords, built-in WinRT types, classic (pre-MIDL 3) type spellings, and
//! the semantic token legend shared with highlighting consumers.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! parser and tooling. Callers work with **stable IDs** (e.g. `KeywordId`,
//! `BuiltinTypeId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no parser types, no IO, no side
//!   effects.
//! - The parser enforces syntax; registries provide spellings and metadata
//!   for shared use (diagnostics, suggestions, highlighting).

pub mod keywords;
pub mod legend;
pub mod types;
