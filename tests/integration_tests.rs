//! Integration tests for the gotestmain pipeline
//!
//! Fixture-driven: every file under `tests/fixtures/valid` must load, every file under
//! `tests/fixtures/invalid` must be rejected with a diagnostic naming the file.

use std::fs;
use std::path::{Path, PathBuf};

use gotestmain::frontend::{self, scanner};
use gotestmain::{GenerateError, render};

fn go_files(dir: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "go").unwrap_or(false))
        .collect();
    files.sort();
    files
}

fn classify(paths: &[&str]) -> scanner::Classification {
    let files: Vec<_> = paths
        .iter()
        .map(|p| frontend::load_source_file(Path::new(p)).unwrap())
        .collect();
    scanner::scan(&files, "example.com/pkg", "")
}

/// Test that all valid fixtures load successfully
#[test]
fn test_valid_fixtures() {
    let files = go_files("tests/fixtures/valid");
    assert!(!files.is_empty());
    for path in files {
        let result = frontend::load_source_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse successfully, got: {}",
            path.display(),
            match result.unwrap_err() {
                GenerateError::Parse { rendered, .. } => rendered,
                other => other.to_string(),
            }
        );
    }
}

/// Test that invalid fixtures produce errors that name the file
#[test]
fn test_invalid_fixtures() {
    let files = go_files("tests/fixtures/invalid");
    assert!(!files.is_empty());
    for path in files {
        match frontend::load_source_file(&path) {
            Ok(_) => panic!("Expected {} to fail", path.display()),
            Err(GenerateError::Parse { path: reported, rendered }) => {
                assert_eq!(reported, path);
                assert!(
                    rendered.contains(&format!("--> {}:", path.display())),
                    "diagnostic for {} does not name the file:\n{}",
                    path.display(),
                    rendered
                );
            }
            Err(other) => panic!("Expected a parse error for {}, got {other}", path.display()),
        }
    }
}

#[test]
fn test_basic_fixture_classification() {
    let c = classify(&["tests/fixtures/valid/basic_test.go"]);
    assert_eq!(c.test_names(), ["TestAdd", "TestParallel"]);
    assert_eq!(c.benchmark_names(), ["BenchmarkEval"]);
    assert!(!c.has_custom_entry_point());
}

#[test]
fn test_methods_generics_and_variadics_are_not_tests() {
    let c = classify(&["tests/fixtures/valid/generics_and_methods_test.go"]);
    assert_eq!(c.test_names(), ["TestMap"]);
    assert_eq!(c.benchmark_names(), ["BenchmarkSet"]);
}

#[test]
fn test_custom_entry_point_fixture() {
    let c = classify(&["tests/fixtures/valid/testmain_test.go"]);
    assert!(c.has_custom_entry_point());
    assert_eq!(c.test_names(), ["TestHandler"]);
}

#[test]
fn test_multi_file_order_follows_arguments() {
    let c = classify(&[
        "tests/fixtures/valid/testmain_test.go",
        "tests/fixtures/valid/basic_test.go",
        "tests/fixtures/valid/literals_test.go",
    ]);
    assert_eq!(c.test_names(), ["TestHandler", "TestAdd", "TestParallel", "TestRunes"]);
    assert_eq!(c.benchmark_names(), ["BenchmarkEval", "BenchmarkShift"]);
    assert!(c.has_custom_entry_point());

    let rendered = render(&c).unwrap();
    assert!(rendered.contains("\tundertest.TestMain(m)\n"));
    let handler = rendered.find("{\"TestHandler\", undertest.TestHandler},").unwrap();
    let add = rendered.find("{\"TestAdd\", undertest.TestAdd},").unwrap();
    assert!(handler < add);
}

#[test]
fn test_parse_error_stops_the_pipeline() {
    let result = ["tests/fixtures/valid/basic_test.go", "tests/fixtures/invalid/unbalanced_body.go"]
        .iter()
        .map(|p| frontend::load_source_file(Path::new(p)))
        .collect::<Result<Vec<_>, _>>();
    match result {
        Err(GenerateError::Parse { path, rendered }) => {
            assert!(path.ends_with("unbalanced_body.go"));
            assert!(rendered.contains("unexpected end of file in function body"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
