//! gotestmain frontend
//!
//! This module contains the components that turn `.go` files into classification input:
//! - `lexer`, `parser`, `ast`, `diagnostics`: the declaration-level Go syntax frontend
//! - `scanner`: entry-point discovery over parsed files

// Syntax components are provided by the shared gotestmain_syntax crate.
pub use gotestmain_syntax::{ast, diagnostics, lexer, parser};

pub mod scanner;

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::GenerateError;
use ast::SourceFile;

/// Largest source file the generator will read (100 MiB).
pub const MAX_SOURCE_BYTES: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting files over [`MAX_SOURCE_BYTES`] before reading them.
pub fn read_source(path: &Path) -> Result<String, GenerateError> {
    let len = fs::metadata(path).map_err(|e| GenerateError::io(path, e))?.len();
    if len > MAX_SOURCE_BYTES {
        return Err(GenerateError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file is {} bytes, larger than the {} byte limit", len, MAX_SOURCE_BYTES),
            ),
        ));
    }
    fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))
}

/// Read and parse one Go source file.
///
/// ## Errors
/// - [`GenerateError::Io`] if the file cannot be read.
/// - [`GenerateError::Parse`] if it does not lex or parse; the diagnostics name the file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_source_file(path: &Path) -> Result<SourceFile, GenerateError> {
    let source = read_source(path)?;
    parse_source(path, &source)
}

/// Parse already-loaded source text; `path` is only used for diagnostics.
pub fn parse_source(path: &Path, source: &str) -> Result<SourceFile, GenerateError> {
    let file_name = path.display().to_string();
    let parse_error = |errs: Vec<diagnostics::CompileError>| GenerateError::Parse {
        path: path.to_path_buf(),
        rendered: diagnostics::format_errors(&file_name, source, &errs),
    };

    let tokens = lexer::lex(source).map_err(parse_error)?;
    parser::parse(&tokens).map_err(parse_error)
}
