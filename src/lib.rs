#![forbid(unsafe_code)]
//! MIDL 3 tooling frontend
//!
//! Parses MIDL 3 (WinRT IDL) documents into classified tokens and a
//! namespace/type/member model, and exposes the consumer-facing pieces built
//! on top of the `midl3_syntax` engine: semantic token encoding against the
//! shared legend, diagnostic rendering with source context, and classic-type
//! modernization suggestions.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` or `Option` with `?` / `ok_or` / `map_err`;
//! `.unwrap()` and `.expect()` are acceptable in tests only.

pub mod cli;
pub mod highlight;
pub mod report;
pub mod suggest;

pub use midl3_syntax::{ParseOutput, parse, scan};
