//! CLI module for gotestmain
//!
//! This module provides the command-line interface of the driver generator.
//!
//! ## Usage
//!
//! ```text
//! RUNDIR=pkg/testdata gotestmain --package example.com/pkg --output main_test_driver.go a_test.go b_test.go
//! ```
//!
//! - `--package <ID>` - Import path of the package under test (required)
//! - `--output <FILE>` - Destination of the driver (default: stdout)
//! - `--scan` - Print the classification as JSON instead of rendering (debug)
//! - `--lex <FILE>` / `--parse <FILE>` - Dump tokens / declaration tree (debug)
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

use clap::Parser;

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

/// Generate a Go test driver for one package
#[derive(Parser, Debug)]
#[command(name = "gotestmain")]
#[command(version = VERSION)]
#[command(about = "Generate a standalone Go test driver for one package", long_about = None)]
pub struct Cli {
    /// Import path of the package under test
    #[arg(long = "package", value_name = "ID", required_unless_present_any = ["lex_file", "parse_file"])]
    pub package: Option<String>,

    /// Output file (default: stdout)
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory the driver changes into before running tests
    #[arg(long = "working-dir", value_name = "DIR", env = "RUNDIR", default_value = "")]
    pub working_dir: String,

    /// Source files of the package, scanned in the order given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    // Debug/development flags
    /// Print the classification as JSON instead of the driver (debug)
    #[arg(long = "scan")]
    pub scan: bool,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["files", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "files")]
    pub parse_file: Option<PathBuf>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too, on stdout.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            process::exit(code.0);
        }
    };

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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    let package = cli.package.unwrap_or_default();
    if package.is_empty() {
        return Err(CliError::failure("Error: must set --package"));
    }

    commands::generate(&commands::GenerateOptions {
        package,
        working_dir: cli.working_dir,
        files: cli.files,
        output: cli.output,
        scan_only: cli.scan,
    })
}

// ============================================================================
// Tests
// ============================================================================
