//! CLI module for the MIDL 3 tooling frontend
//!
//! ## Commands
//!
//! - `check <file>` - Parse and report diagnostics
//! - `tokens <file> [--json]` - Dump classified tokens
//! - `model <file>` - Dump the namespace/type/member model
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// MIDL 3 tokenizer and model inspector
#[derive(Parser, Debug)]
#[command(name = "midl3")]
#[command(version = VERSION)]
#[command(about = "MIDL 3 tokenizer and model inspector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and report diagnostics
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the classified token stream
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit tokens as JSON (includes the semantic-data encoding)
        #[arg(long)]
        json: bool,
    },

    /// Dump the namespace/type/member model
    Model {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file.to_string_lossy()),
        Some(Command::Tokens { file, json }) => commands::tokens_file(&file.to_string_lossy(), json),
        Some(Command::Model { file }) => commands::model_file(&file.to_string_lossy()),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy())
            } else {
                // No command and no file - fail and let clap's help guide the user
                Err(CliError::failure("Usage: midl3 <COMMAND|FILE>, see --help"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["midl3", "check", "test.idl"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { .. })));
    }

    #[test]
    fn test_cli_parse_tokens_with_json() {
        let cli = Cli::try_parse_from(["midl3", "tokens", "test.idl", "--json"]).unwrap();
        if let Some(Command::Tokens { json, .. }) = cli.command {
            assert!(json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_model() {
        let cli = Cli::try_parse_from(["midl3", "model", "test.idl"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Model { .. })));
    }

    #[test]
    fn test_cli_bare_file_defaults_to_check() {
        let cli = Cli::try_parse_from(["midl3", "test.idl"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("test.idl")));
    }
}
