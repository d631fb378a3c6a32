//! Entry-point discovery over parsed Go files
//!
//! Classification runs in two passes per function declaration:
//!
//! 1. **Structural filter**: no receiver, exactly one parameter, no results, and the parameter is a
//!    pointer to a selector-style type (`*qualifier.Name`).
//! 2. **Tagged decision**: the name prefix selects an [`EntryKind`], which then requires a specific
//!    referenced type name (`T` for tests, `B` for benchmarks).
//!
//! The qualifier itself is never checked, so `import tt "testing"` followed by
//! `func TestX(t *tt.T)` is still a test. Declarations that fail either pass are skipped silently.
//! `TestMain` is handled before both passes: it only sets the custom entry point flag.

use std::fmt;

use serde::Serialize;

use gotestmain_core::lang::conventions;

use super::ast::{FunctionDecl, SourceFile};

/// The kinds of entry point the native runner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Test,
    Benchmark,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Test, EntryKind::Benchmark];

    /// Name prefix that selects this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            EntryKind::Test => conventions::TEST_PREFIX,
            EntryKind::Benchmark => conventions::BENCHMARK_PREFIX,
        }
    }

    /// Type name the sole parameter must point to (`*<qualifier>.T` / `*<qualifier>.B`).
    pub fn state_type(self) -> &'static str {
        match self {
            EntryKind::Test => conventions::TEST_STATE_TYPE,
            EntryKind::Benchmark => conventions::BENCHMARK_STATE_TYPE,
        }
    }

    /// Select a kind by name prefix alone.
    pub fn for_name(name: &str) -> Option<EntryKind> {
        Self::ALL.into_iter().find(|kind| name.starts_with(kind.prefix()))
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Test => write!(f, "test"),
            EntryKind::Benchmark => write!(f, "benchmark"),
        }
    }
}

/// Result of scanning one package's files.
///
/// Built once by [`scan`] (or [`Classification::new`] for hand-built inputs) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    package_identifier: String,
    working_directory: String,
    test_names: Vec<String>,
    benchmark_names: Vec<String>,
    has_custom_entry_point: bool,
}

impl Classification {
    pub fn new(
        package_identifier: impl Into<String>,
        working_directory: impl Into<String>,
        test_names: Vec<String>,
        benchmark_names: Vec<String>,
        has_custom_entry_point: bool,
    ) -> Self {
        Self {
            package_identifier: package_identifier.into(),
            working_directory: working_directory.into(),
            test_names,
            benchmark_names,
            has_custom_entry_point,
        }
    }

    /// Import path of the package under test, as given by the caller.
    pub fn package_identifier(&self) -> &str {
        &self.package_identifier
    }

    /// Directory the driver changes into before running; empty means "stay put".
    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn test_names(&self) -> &[String] {
        &self.test_names
    }

    pub fn benchmark_names(&self) -> &[String] {
        &self.benchmark_names
    }

    pub fn has_custom_entry_point(&self) -> bool {
        self.has_custom_entry_point
    }

    /// Names of one kind, in scan order.
    pub fn names(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Test => &self.test_names,
            EntryKind::Benchmark => &self.benchmark_names,
        }
    }

    /// Whether the driver needs to reference the package under test at all.
    pub fn references_package(&self) -> bool {
        !self.test_names.is_empty() || !self.benchmark_names.is_empty() || self.has_custom_entry_point
    }
}

/// Pass 1: the referenced type name of the sole `*qualifier.Name` parameter, if the signature qualifies.
fn entry_signature(func: &FunctionDecl) -> Option<&str> {
    if func.is_method() || func.params.len() != 1 || !func.results.is_empty() {
        return None;
    }
    func.params[0].node.ty.node.pointee_selector().map(|(_, name)| name)
}

/// Classify a single function declaration.
///
/// Returns `None` for anything that is not a test or benchmark, including `TestMain`.
pub fn classify(func: &FunctionDecl) -> Option<EntryKind> {
    if func.name == conventions::CUSTOM_ENTRYPOINT_NAME {
        return None;
    }
    let state_type = entry_signature(func)?;
    // Pass 2
    let kind = EntryKind::for_name(&func.name)?;
    (state_type == kind.state_type()).then_some(kind)
}

fn is_custom_entry_point(func: &FunctionDecl) -> bool {
    !func.is_method() && func.name == conventions::CUSTOM_ENTRYPOINT_NAME
}

/// Scan parsed files, in the order given, for tests, benchmarks and a custom entry point.
///
/// ## Parameters
/// - `files`: declaration trees in command-line order; declaration order within each file is kept.
/// - `package_identifier`: import path of the package under test (opaque here).
/// - `working_directory`: where the driver should `chdir` to; may be empty.
#[tracing::instrument(skip_all, fields(files = files.len()))]
pub fn scan(
    files: &[SourceFile],
    package_identifier: impl Into<String>,
    working_directory: impl Into<String>,
) -> Classification {
    let mut result = Classification::new(package_identifier, working_directory, Vec::new(), Vec::new(), false);

    for func in files.iter().flat_map(|f| f.functions()) {
        if is_custom_entry_point(func) {
            if entry_signature(func) != Some(conventions::MAIN_STATE_TYPE) {
                tracing::warn!(signature = %func, "TestMain does not have the conventional signature");
            }
            tracing::debug!("found custom entry point");
            result.has_custom_entry_point = true;
            continue;
        }

        match classify(func) {
            Some(EntryKind::Test) => {
                tracing::debug!(name = %func.name, "test");
                result.test_names.push(func.name.clone());
            }
            Some(EntryKind::Benchmark) => {
                tracing::debug!(name = %func.name, "benchmark");
                result.benchmark_names.push(func.name.clone());
            }
            None => {
                if EntryKind::for_name(&func.name).is_some() && !func.is_method() {
                    tracing::trace!(signature = %func, "skipped: signature does not qualify");
                }
            }
        }
    }

    tracing::debug!(
        tests = result.test_names.len(),
        benchmarks = result.benchmark_names.len(),
        custom_entry_point = result.has_custom_entry_point,
        "scan complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn file(source: &str) -> SourceFile {
        let tokens = lexer::lex(source).unwrap();
        parser::parse(&tokens).unwrap()
    }

    fn scan_one(body: &str) -> Classification {
        scan(&[file(&format!("package p\n\nimport \"testing\"\n\n{body}"))], "example.com/p", "")
    }

    #[test]
    fn test_basic_scenario() {
        let c = scan_one(
            "func TestA(t *testing.T) {}\nfunc BenchmarkB(b *testing.B) {}\nfunc helper() {}\n",
        );
        assert_eq!(c.test_names(), ["TestA"]);
        assert_eq!(c.benchmark_names(), ["BenchmarkB"]);
        assert!(!c.has_custom_entry_point());
        assert_eq!(c.package_identifier(), "example.com/p");
    }

    #[test]
    fn test_results_exclude() {
        let c = scan_one("func TestFoo(t *testing.T) error { return nil }\n");
        assert!(c.test_names().is_empty());
    }

    #[test]
    fn test_no_params_exclude() {
        assert!(scan_one("func TestFoo() {}\n").test_names().is_empty());
    }

    #[test]
    fn test_two_params_exclude() {
        assert!(scan_one("func TestFoo(a, b *testing.T) {}\n").test_names().is_empty());
        assert!(scan_one("func TestFoo(t *testing.T, n int) {}\n").test_names().is_empty());
    }

    #[test]
    fn test_methods_exclude() {
        let c = scan_one("func (s *S) TestFoo(t *testing.T) {}\nfunc (s *S) TestMain(m *testing.M) {}\n");
        assert!(c.test_names().is_empty());
        assert!(!c.has_custom_entry_point());
    }

    #[test]
    fn test_aliased_qualifier_is_accepted() {
        let c = scan_one("func BenchmarkX(b *alias.B) {}\nfunc TestY(t *check.T) {}\n");
        assert_eq!(c.benchmark_names(), ["BenchmarkX"]);
        assert_eq!(c.test_names(), ["TestY"]);
    }

    #[test]
    fn test_wrong_state_type_excludes() {
        let c = scan_one("func TestX(b *testing.B) {}\nfunc BenchmarkY(t *testing.T) {}\n");
        assert!(c.test_names().is_empty());
        assert!(c.benchmark_names().is_empty());
    }

    #[test]
    fn test_non_pointer_or_unqualified_params_exclude() {
        let c = scan_one(
            "func TestA(t testing.T) {}\nfunc TestB(t *T) {}\nfunc TestC(t *(testing.T)) {}\nfunc TestD(t []*testing.T) {}\n",
        );
        assert!(c.test_names().is_empty());
    }

    #[test]
    fn test_custom_entry_point_any_signature() {
        let c = scan_one("func TestMain() {}\n");
        assert!(c.has_custom_entry_point());
        assert!(c.test_names().is_empty());

        let c = scan_one("func TestMain(m *testing.M) {}\nfunc TestA(t *testing.T) {}\n");
        assert!(c.has_custom_entry_point());
        assert_eq!(c.test_names(), ["TestA"]);
    }

    #[test]
    fn test_test_main_shaped_like_a_test_is_not_a_test() {
        let c = scan_one("func TestMain(t *testing.T) {}\n");
        assert!(c.has_custom_entry_point());
        assert!(c.test_names().is_empty());
    }

    #[test]
    fn test_unprefixed_names_skipped() {
        let c = scan_one("func ExampleA() {}\nfunc testLower(t *testing.T) {}\nfunc FuzzX(f *testing.F) {}\n");
        assert!(c.test_names().is_empty());
        assert!(c.benchmark_names().is_empty());
    }

    #[test]
    fn test_order_across_files() {
        let f1 = file("package p\nfunc TestB(t *testing.T) {}\nfunc TestC(t *testing.T) {}\n");
        let f2 = file("package p\nfunc TestA(t *testing.T) {}\n");
        let c = scan(&[f1, f2], "p", "");
        assert_eq!(c.test_names(), ["TestB", "TestC", "TestA"]);
    }

    #[test]
    fn test_working_directory_is_carried() {
        let c = scan(&[], "p", "some/dir");
        assert_eq!(c.working_directory(), "some/dir");
        assert!(!c.references_package());
    }

    #[test]
    fn test_classify_single_function() {
        let f = file("package p\nfunc BenchmarkZ(b *testing.B) {}\n");
        let func = f.functions().next().unwrap();
        assert_eq!(classify(func), Some(EntryKind::Benchmark));
    }

    #[test]
    fn test_entry_kind_prefix_dispatch() {
        assert_eq!(EntryKind::for_name("TestX"), Some(EntryKind::Test));
        assert_eq!(EntryKind::for_name("Test"), Some(EntryKind::Test));
        assert_eq!(EntryKind::for_name("BenchmarkX"), Some(EntryKind::Benchmark));
        assert_eq!(EntryKind::for_name("Helper"), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let c = Classification::new("p", "", vec!["TestA".to_string()], vec![], true);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["test_names"][0], "TestA");
        assert_eq!(json["has_custom_entry_point"], true);
    }
}
