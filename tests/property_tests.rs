//! Property-based tests for gotestmain
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use gotestmain::frontend::{lexer, parser, scanner};
use gotestmain::render;
use proptest::prelude::*;

/// Parameter lists a generated function may declare.
const PARAMS: &[&str] = &[
    "t *testing.T",
    "t *tt.T",
    "b *testing.B",
    "m *testing.M",
    "",
    "t *testing.T, n int",
    "a, b *testing.T",
    "t testing.T",
    "t []*testing.T",
];

#[derive(Debug, Clone)]
struct GeneratedFunc {
    name: String,
    params: &'static str,
    with_result: bool,
    method: bool,
}

impl GeneratedFunc {
    fn to_go(&self) -> String {
        let recv = if self.method { "(s *Suite) " } else { "" };
        let result = if self.with_result { " error" } else { "" };
        format!("func {}{}({}){} {{}}\n", recv, self.name, self.params, result)
    }

    /// Independent statement of the discovery rules.
    fn expected_kind(&self) -> Option<scanner::EntryKind> {
        if self.method || self.with_result || self.name == "TestMain" {
            return None;
        }
        if self.name.starts_with("Test") && matches!(self.params, "t *testing.T" | "t *tt.T") {
            return Some(scanner::EntryKind::Test);
        }
        if self.name.starts_with("Benchmark") && self.params == "b *testing.B" {
            return Some(scanner::EntryKind::Benchmark);
        }
        None
    }
}

fn func_strategy() -> impl Strategy<Value = GeneratedFunc> {
    (
        prop::sample::select(vec!["Test", "Benchmark", "Example", "helper"]),
        "[A-Z][a-z0-9]{0,5}",
        prop::sample::select(PARAMS.to_vec()),
        any::<bool>(),
        prop::bool::weighted(0.2),
    )
        .prop_map(|(prefix, suffix, params, with_result, method)| GeneratedFunc {
            name: format!("{}{}", prefix, suffix),
            params,
            with_result,
            method,
        })
}

fn source_for(funcs: &[GeneratedFunc]) -> String {
    let mut source = String::from("package p\n\nimport (\n\t\"testing\"\n\ttt \"testing\"\n)\n\n");
    for f in funcs {
        source.push_str(&f.to_go());
    }
    source
}

fn scan_source(source: &str) -> scanner::Classification {
    let tokens = lexer::lex(source).expect("generated source should lex");
    let file = parser::parse(&tokens).expect("generated source should parse");
    scanner::scan(&[file], "example.com/p", "")
}

proptest! {
    /// Property: tests and benchmarks are disjoint, and match the discovery rules in order.
    #[test]
    fn classification_matches_rules(funcs in prop::collection::vec(func_strategy(), 0..24)) {
        let c = scan_source(&source_for(&funcs));

        for name in c.test_names() {
            prop_assert!(!c.benchmark_names().contains(name));
        }

        let expected_tests: Vec<&str> = funcs
            .iter()
            .filter(|f| f.expected_kind() == Some(scanner::EntryKind::Test))
            .map(|f| f.name.as_str())
            .collect();
        let expected_benchmarks: Vec<&str> = funcs
            .iter()
            .filter(|f| f.expected_kind() == Some(scanner::EntryKind::Benchmark))
            .map(|f| f.name.as_str())
            .collect();
        prop_assert_eq!(c.test_names(), expected_tests.as_slice());
        prop_assert_eq!(c.benchmark_names(), expected_benchmarks.as_slice());

        let expect_main = funcs.iter().any(|f| f.name == "TestMain" && !f.method);
        prop_assert_eq!(c.has_custom_entry_point(), expect_main);
    }

    /// Property: rendering is a pure function of the classification.
    #[test]
    fn render_is_deterministic(funcs in prop::collection::vec(func_strategy(), 0..12), dir in "[a-z/ \"\\\\]{0,12}") {
        let tokens = lexer::lex(&source_for(&funcs)).unwrap();
        let file = parser::parse(&tokens).unwrap();
        let c = scanner::scan(&[file], "example.com/p", dir.as_str());

        let first = render(&c).unwrap();
        let second = render(&c).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.contains("undertest \""), c.references_package());
        prop_assert_eq!(first.contains("os.Chdir("), !dir.is_empty());
    }

    /// Property: table entries appear in scan order.
    #[test]
    fn render_preserves_scan_order(funcs in prop::collection::vec(func_strategy(), 0..16)) {
        let c = scan_source(&source_for(&funcs));
        let out = render(&c).unwrap();

        let mut last = 0;
        for name in c.test_names().iter().chain(c.benchmark_names()) {
            let entry = format!("{{\"{}\", undertest.{}}},", name, name);
            let pos = out[last..].find(&entry).map(|p| p + last);
            prop_assert!(pos.is_some(), "missing or out of order: {}", entry);
            last = pos.unwrap_or(last);
        }
    }

    /// Property: the lexer and parser never panic, whatever the input.
    #[test]
    fn frontend_never_panics(source in any::<String>()) {
        if let Ok(tokens) = lexer::lex(&source) {
            let _ = parser::parse(&tokens);
        }
    }

    /// Property: the lexer and parser never panic on Go-shaped noise either.
    #[test]
    fn frontend_never_panics_on_go_fragments(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "package", "p", "func", "(", ")", "[", "]", "{", "}", "*", ".", ",", "...", "\n",
                "import", "\"x\"", "type", "var", "const", "=", "chan", "<-", "map", "T", "testing",
            ]),
            0..64,
        )
    ) {
        let source = parts.join(" ");
        if let Ok(tokens) = lexer::lex(&source) {
            let _ = parser::parse(&tokens);
        }
    }
}
