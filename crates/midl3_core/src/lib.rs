//! Provide shared, pure language vocabulary for MIDL 3 tooling.
//!
//! This crate is intentionally small and dependency-light. It is the single
//! source of truth for spellings that more than one consumer needs to agree
//! on: the parser, the highlighting legend, and the classic-type suggestion
//! pass all read from the registries in [`lang`].
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no
//!   parser-specific types.
//! - Callers work with stable IDs (e.g. [`lang::keywords::KeywordId`]) and
//!   look spellings up through registry tables instead of scattering string
//!   literals across the tooling.

pub mod lang;
