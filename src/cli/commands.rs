//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::backend;
use crate::errors::GenerateError;
use crate::frontend::{self, diagnostics, lexer, parser, scanner};

use super::{CliError, CliResult, ExitCode};

/// Inputs of one driver generation, as collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub package: String,
    pub working_dir: String,
    pub files: Vec<PathBuf>,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Emit the classification as JSON instead of a driver.
    pub scan_only: bool,
}

/// Convert a library error into a user-facing CLI error.
///
/// Parse failures lead with their source-context diagnostics.
fn report(err: GenerateError) -> CliError {
    let mut message = String::new();
    if let GenerateError::Parse { rendered, .. } = &err {
        message.push_str(rendered);
        message.push('\n');
    }
    message.push_str(&format!("{:?}", miette::Report::new(err)));
    CliError::failure(message.trim_end())
}

/// Parse, scan and render; nothing is written until the whole driver is in memory.
pub fn generate(options: &GenerateOptions) -> CliResult<ExitCode> {
    let text = build_output(options).map_err(report)?;
    write_output(options.output.as_deref(), &text).map_err(report)?;
    Ok(ExitCode::SUCCESS)
}

/// Produce the full output text (driver source, or JSON with `scan_only`).
pub fn build_output(options: &GenerateOptions) -> Result<String, GenerateError> {
    let files = options
        .files
        .iter()
        .map(|path| frontend::load_source_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let classification = scanner::scan(&files, options.package.as_str(), options.working_dir.as_str());
    tracing::info!(
        tests = classification.test_names().len(),
        benchmarks = classification.benchmark_names().len(),
        "classified {} file(s)",
        files.len()
    );

    if options.scan_only {
        let json = serde_json::to_string_pretty(&classification)
            .map_err(|e| GenerateError::io("<json>", io::Error::other(e)))?;
        return Ok(json + "\n");
    }
    Ok(backend::render(&classification)?)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<(), GenerateError> {
    match output {
        Some(path) => fs::write(path, text).map_err(|e| GenerateError::io(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| GenerateError::io("<stdout>", e))
        }
    }
}

fn read_source(file_path: &Path) -> CliResult<String> {
    frontend::read_source(file_path).map_err(report)
}

/// Tokenize a file and print its tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let name = file_path.display().to_string();
    let tokens = lexer::lex(&source)
        .map_err(|errs| CliError::failure(diagnostics::format_errors(&name, &source, &errs).trim_end()))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its declaration tree.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let name = file_path.display().to_string();
    let to_cli_error =
        |errs: Vec<diagnostics::CompileError>| CliError::failure(diagnostics::format_errors(&name, &source, &errs).trim_end());

    let tokens = lexer::lex(&source).map_err(to_cli_error)?;
    let file = parser::parse(&tokens).map_err(to_cli_error)?;
    println!("{:#?}", file);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gotestmain_cmd_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn options(files: Vec<PathBuf>, output: Option<PathBuf>) -> GenerateOptions {
        GenerateOptions {
            package: "example.com/pkg".to_string(),
            working_dir: String::new(),
            files,
            output,
            scan_only: false,
        }
    }

    #[test]
    fn test_generate_writes_output_file() {
        let dir = temp_dir("write");
        let src = dir.join("a_test.go");
        fs::write(&src, "package pkg\n\nimport \"testing\"\n\nfunc TestA(t *testing.T) {}\n").unwrap();
        let out = dir.join("driver.go");

        let code = generate(&options(vec![src], Some(out.clone()))).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("{\"TestA\", undertest.TestA},"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = temp_dir("nowrite");
        let good = dir.join("good_test.go");
        let bad = dir.join("bad_test.go");
        fs::write(&good, "package pkg\nfunc TestA(t *testing.T) {}\n").unwrap();
        fs::write(&bad, "package pkg\nfunc TestB(t *testing.T {\n").unwrap();
        let out = dir.join("driver.go");

        let err = generate(&options(vec![good, bad.clone()], Some(out.clone()))).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains(&format!("--> {}:2:", bad.display())), "got: {}", err.message);
        assert!(!out.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_output_is_failure() {
        let dir = temp_dir("unwritable");
        let out = dir.join("missing").join("driver.go");
        let err = generate(&options(vec![], Some(out))).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("driver.go"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_scan_only_emits_json() {
        let dir = temp_dir("scan");
        let src = dir.join("b_test.go");
        fs::write(&src, "package pkg\nfunc BenchmarkB(b *testing.B) {}\nfunc TestMain(m *testing.M) {}\n").unwrap();
        let mut opts = options(vec![src], None);
        opts.scan_only = true;

        let json = build_output(&opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["benchmark_names"][0], "BenchmarkB");
        assert_eq!(value["has_custom_entry_point"], true);
        assert_eq!(value["package_identifier"], "example.com/pkg");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_input_names_file() {
        let err = generate(&options(vec![PathBuf::from("no/such/file_test.go")], None)).unwrap_err();
        assert!(err.message.contains("no/such/file_test.go"), "got: {}", err.message);
    }
}
