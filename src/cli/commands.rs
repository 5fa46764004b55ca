//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::{highlight, report, suggest};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during parsing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Parse the file and report diagnostics plus modernization suggestions.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let out = midl3_syntax::parse(&source);

    for suggestion in suggest::classic_type_suggestions(&out, &source) {
        println!(
            "{}:{}:{}: {}",
            file_path,
            suggestion.line + 1,
            suggestion.col + 1,
            suggestion.message
        );
    }

    if out.errors.is_empty() {
        tracing::info!(file = file_path, tokens = out.tokens.len(), "no errors");
        return Ok(ExitCode::SUCCESS);
    }

    let rendered = report::render(file_path, &source, &out.errors);
    Err(CliError::failure(rendered.trim_end().to_string()))
}

/// Dump the classified token stream, plain or as JSON.
pub fn tokens_file(file_path: &str, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let out = midl3_syntax::parse(&source);

    if json {
        let tokens: Vec<serde_json::Value> = out
            .tokens
            .iter()
            .map(|t| {
                serde_json::json!({
                    "line": t.line,
                    "col": t.col,
                    "length": t.length,
                    "kind": t.kind.name(),
                    "modifiers": t.modifiers.iter().map(|m| m.name()).collect::<Vec<_>>(),
                    "text": t.text(&source),
                })
            })
            .collect();
        let doc = serde_json::json!({
            "tokens": tokens,
            "semanticData": highlight::semantic_data(&out.tokens),
            "errorCount": out.errors.len(),
        });
        let pretty = serde_json::to_string_pretty(&doc)
            .map_err(|e| CliError::failure(format!("Error serializing tokens: {}", e)))?;
        println!("{}", pretty);
    } else {
        for t in &out.tokens {
            println!("{:>4}:{:<4} {:14} {:?}", t.line, t.col, t.kind.name(), t.text(&source));
        }
        for err in &out.errors {
            eprintln!("error: {}", err);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Dump the namespace/type/member model as an indented tree.
pub fn model_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let out = midl3_syntax::parse(&source);
    let model = &out.model;

    for ns in &model.namespaces {
        println!("namespace {}", ns.id);
        for tid in &ns.types {
            let ty = model.ty(*tid);
            if ty.extends.is_empty() {
                println!("  {} {}", ty.kind.as_str(), ty.id);
            } else {
                println!("  {} {} : {}", ty.kind.as_str(), ty.id, ty.extends.join(", "));
            }
            for mid in &ty.members {
                let member = model.member(*mid);
                // Synthesized members (a delegate's Invoke) have no display name.
                let name = if member.display_name.is_empty() {
                    &member.id
                } else {
                    &member.display_name
                };
                let mut line = format!("    {} {}", member.kind.as_str(), name);
                if let Some(ret) = &member.return_type {
                    line.push_str(&format!(" -> {}", ret));
                }
                if let Some(pid) = member.params {
                    let params: Vec<String> = model
                        .param_scope(pid)
                        .params
                        .iter()
                        .map(|p| match &p.id {
                            Some(name) => format!("{} {}", p.param_type, name),
                            None => p.param_type.clone(),
                        })
                        .collect();
                    line.push_str(&format!(" ({})", params.join(", ")));
                }
                if let Some(accessors) = &member.accessors {
                    line.push_str(&format!(" {{ {} }}", accessors.join("; ")));
                }
                println!("{}", line);
            }
        }
    }

    for err in &out.errors {
        eprintln!("error: {}", err);
    }

    Ok(ExitCode::SUCCESS)
}
