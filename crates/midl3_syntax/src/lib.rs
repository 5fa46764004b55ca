//! Contextual tokenizer and semantic model for MIDL 3.
//!
//! This crate is the syntax frontend for MIDL 3 tooling: a single
//! left-to-right scanner that fuses lexing, scope tracking, and incremental
//! model building, followed by a linear remap pass that rewrites generic
//! identifier tokens into their semantic kinds once the whole declaration
//! context is known.
//!
//! ## Notes
//! - The engine never aborts on malformed input: every failure is recorded in
//!   [`diagnostics::ParseError`] and scanning continues, so highlighting and
//!   completion keep working on broken documents.
//! - Vocabulary identity (keywords, built-in types, legend names) comes from
//!   `midl3_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use midl3_syntax::parse;
//!
//! let out = parse("namespace Foo { runtimeclass Bar { Bar(); } }");
//! assert!(out.errors.is_empty());
//! assert_eq!(out.model.namespaces.len(), 1);
//! ```

pub mod diagnostics;
pub mod model;
pub mod parser;
pub mod remap;
pub mod scope;
pub mod token;

pub use parser::{ParseOutput, parse, scan};
pub use remap::remap;
