//! Diagnostic rendering with source context.
//!
//! Wraps the engine's plain [`ParseError`]s in miette diagnostics so the CLI
//! can show the offending line with a labeled span. Single-character error
//! ranges are widened to the next whitespace run before rendering; pointing
//! at one character of a malformed word reads worse than underlining the
//! word.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use midl3_syntax::diagnostics::ParseError;
use thiserror::Error;

/// A parse error dressed up for terminal rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(midl3::parse))]
pub struct RenderedError {
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    message: String,
    label: String,
}

/// Widen a single-character range to the next whitespace run. Wider ranges
/// pass through untouched.
pub fn widen(source: &str, offset: usize, len: usize) -> (usize, usize) {
    if len > 1 {
        return (offset, len);
    }
    let Some(rest) = source.get(offset..) else {
        return (source.len(), 0);
    };
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    (offset, end.max(len))
}

/// Build the miette diagnostic for one parse error.
pub fn diagnostic_for(file_name: &str, source: &str, error: &ParseError) -> RenderedError {
    let natural_len = error.token.chars().count();
    let (start, len) = widen(source, error.offset, natural_len);
    RenderedError {
        src: NamedSource::new(file_name, source.to_string()),
        span: (start, len).into(),
        message: error.message.clone(),
        label: error.kind.to_string(),
    }
}

/// Render every error as a graphical report, one after another.
pub fn render(file_name: &str, source: &str, errors: &[ParseError]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for error in errors {
        let diagnostic = diagnostic_for(file_name, source, error);
        if handler.render_report(&mut out, &diagnostic).is_err() {
            // fmt::Write on String cannot fail; fall back to plain display.
            out.push_str(&error.to_string());
        }
        out.push('\n');
    }
    out
}
