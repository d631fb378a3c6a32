#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on signature shapes that test discovery depends on, on the declaration
/// forms that must be skipped safely, and on error recovery (several errors in one pass).
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<SourceFile, Vec<CompileError>> {
        let tokens = lexer::lex(source).map_err(|_| vec![])?;
        parse(&tokens)
    }

    fn only_function(source: &str) -> FunctionDecl {
        let file = parse_str(source).unwrap();
        let funcs: Vec<_> = file.functions().cloned().collect();
        assert_eq!(funcs.len(), 1, "expected exactly one function in {source:?}");
        funcs.into_iter().next().unwrap()
    }

    #[test]
    fn test_package_clause() {
        let file = parse_str("package foo_test\n").unwrap();
        assert_eq!(file.package.node, "foo_test");
        assert!(file.declarations.is_empty());
    }

    #[test]
    fn test_test_function_signature() {
        let f = only_function("package p\nfunc TestA(t *testing.T) {}\n");
        assert_eq!(f.name, "TestA");
        assert!(!f.is_method());
        assert!(f.has_body);
        assert!(f.results.is_empty());
        assert_eq!(f.params.len(), 1);
        assert_eq!(f.params[0].node.name.as_deref(), Some("t"));
        assert_eq!(f.params[0].node.ty.node.pointee_selector(), Some(("testing", "T")));
    }

    #[test]
    fn test_grouped_names_share_type() {
        let f = only_function("package p\nfunc TestA(a, b *testing.T) {}\n");
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[0].node.name.as_deref(), Some("a"));
        assert_eq!(f.params[1].node.name.as_deref(), Some("b"));
        assert_eq!(f.params[0].node.ty.node.to_string(), "*testing.T");
        assert_eq!(f.params[1].node.ty.node.to_string(), "*testing.T");
    }

    #[test]
    fn test_unnamed_params() {
        let f = only_function("package p\nfunc BenchmarkX(*testing.B) {}\n");
        assert_eq!(f.params.len(), 1);
        assert!(f.params[0].node.name.is_none());
        assert_eq!(f.params[0].node.ty.node.pointee_selector(), Some(("testing", "B")));

        let f = only_function("package p\nfunc f(int, string) {}\n");
        let types: Vec<String> = f.params.iter().map(|p| p.node.ty.node.to_string()).collect();
        assert_eq!(types, vec!["int", "string"]);
        assert!(f.params.iter().all(|p| p.node.name.is_none()));
    }

    #[test]
    fn test_variadic_and_trailing_comma() {
        let f = only_function("package p\nfunc f(\n\tformat string,\n\targs ...interface{},\n) {}\n");
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[1].node.ty.node.to_string(), "...interface{...}");
    }

    #[test]
    fn test_result_shapes() {
        assert!(only_function("package p\nfunc f() {}\n").results.is_empty());
        assert!(only_function("package p\nfunc f() () {}\n").results.is_empty());
        assert_eq!(only_function("package p\nfunc f() error {}\n").results.len(), 1);
        assert_eq!(only_function("package p\nfunc f() (int, error) {}\n").results.len(), 2);

        let f = only_function("package p\nfunc f() (n, m int, err error) {}\n");
        let names: Vec<_> = f.results.iter().map(|r| r.node.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["n", "m", "err"]);
    }

    #[test]
    fn test_method_receiver() {
        let f = only_function("package p\nfunc (s *Suite) TestA(t *testing.T) {}\n");
        assert!(f.is_method());
        let recv = f.receiver.unwrap();
        assert_eq!(recv.node.name.as_deref(), Some("s"));
        assert_eq!(recv.node.ty.node.to_string(), "*Suite");
    }

    #[test]
    fn test_type_parameters_are_recorded_and_skipped() {
        let f = only_function("package p\nfunc TestG[T any, U ~int | string](t *testing.T) {}\n");
        assert!(f.has_type_params);
        assert_eq!(f.params.len(), 1);
    }

    #[test]
    fn test_composite_param_types() {
        let f = only_function(
            "package p\nfunc f(a []int, b [4]byte, m map[string][]error, c <-chan int, d chan<- bool, g func(int) (bool, error), s Set[int], q pkg.List[K, V]) {}\n",
        );
        let types: Vec<String> = f.params.iter().map(|p| p.node.ty.node.to_string()).collect();
        assert_eq!(
            types,
            vec![
                "[]int",
                "[_]byte",
                "map[string][]error",
                "<-chan int",
                "chan<- bool",
                "func(int) (bool, error)",
                "Set[int]",
                "pkg.List[K, V]",
            ]
        );
    }

    #[test]
    fn test_unnamed_generic_param() {
        let f = only_function("package p\nfunc f(Set[int], List[string]) {}\n");
        assert_eq!(f.params.len(), 2);
        assert!(f.params.iter().all(|p| p.node.name.is_none()));
        assert_eq!(f.params[0].node.ty.node.to_string(), "Set[int]");
    }

    #[test]
    fn test_body_with_nested_braces_and_strings() {
        let source = r#"package p

func TestA(t *testing.T) {
	m := map[string]struct{}{"}": {}}
	if len(m) > 0 {
		for _, r := range "{{{" {
			_ = r
		}
	}
	_ = '}'
	_ = `}`
}

func TestB(t *testing.T) {}
"#;
        let file = parse_str(source).unwrap();
        let names: Vec<_> = file.functions().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["TestA", "TestB"]);
    }

    #[test]
    fn test_bodyless_function() {
        let f = only_function("package p\nfunc now() int64\n");
        assert!(!f.has_body);
        assert_eq!(f.results.len(), 1);
    }

    #[test]
    fn test_imports_single_and_grouped() {
        let source = r#"package p

import "fmt"
import (
	"testing"
	tt "text/template"
	. "strings"
	_ "embed"
)
"#;
        let file = parse_str(source).unwrap();
        let imports: Vec<_> = file.imports().cloned().collect();
        assert_eq!(imports.len(), 5);
        assert_eq!(imports[0].path, "fmt");
        assert_eq!(imports[0].local_name(), Some("fmt"));
        assert_eq!(imports[2].alias, Some(ImportAlias::Named("tt".to_string())));
        assert_eq!(imports[2].local_name(), Some("tt"));
        assert_eq!(imports[3].alias, Some(ImportAlias::Dot));
        assert_eq!(imports[4].alias, Some(ImportAlias::Blank));
        assert_eq!(imports[4].local_name(), None);
    }

    #[test]
    fn test_const_var_type_groups() {
        let source = r#"package p

const (
	A = iota
	B
	C, D = 1, 2
)

var x, y = func() int { return 1 }(), map[string]int{"k": 1}

type (
	S struct {
		f func() }
	L[T any] []T
	Alias = int
)

type I interface{ M() }
"#;
        let file = parse_str(source).unwrap();
        let names: Vec<Vec<&str>> = file
            .declarations
            .iter()
            .map(|d| match &d.node {
                Declaration::Const(g) | Declaration::Var(g) | Declaration::Type(g) => {
                    g.names.iter().map(|n| n.node.as_str()).collect()
                }
                other => panic!("unexpected declaration {other:?}"),
            })
            .collect();
        assert_eq!(
            names,
            vec![vec!["A", "B", "C", "D"], vec!["x", "y"], vec!["S", "L", "Alias"], vec!["I"]]
        );
    }

    #[test]
    fn test_function_display() {
        let f = only_function("package p\nfunc (s *S) Do(a, b int) (string, error) {}\n");
        assert_eq!(f.to_string(), "func (s *S) Do(a int, b int) (string, error)");
    }

    #[test]
    fn test_missing_package_clause_is_error() {
        let errs = parse_str("func TestA(t *testing.T) {}\n").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Expected package clause"), "got: {}", errs[0].message);
    }

    #[test]
    fn test_blank_package_name_is_error() {
        let errs = parse_str("package _\n").unwrap_err();
        assert!(errs[0].message.contains("invalid package name"));
    }

    #[test]
    fn test_import_after_declaration_is_error() {
        let errs = parse_str("package p\nfunc f() {}\nimport \"fmt\"\n").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "imports must appear before other declarations");
    }

    #[test]
    fn test_unbalanced_body_is_error() {
        let errs = parse_str("package p\nfunc TestA(t *testing.T) {\n\tif true {\n}\n").unwrap_err();
        assert!(errs[0].message.contains("unexpected end of file in function body"));
    }

    #[test]
    fn test_mixed_named_and_unnamed_params_is_error() {
        let errs = parse_str("package p\nfunc f(a int, string) {}\n").unwrap_err();
        assert!(errs[0].message.contains("mixed named and unnamed parameters"));
    }

    #[test]
    fn test_method_with_type_params_is_error() {
        let errs = parse_str("package p\nfunc (s S) M[T any]() {}\n").unwrap_err();
        assert!(errs[0].message.contains("methods cannot have type parameters"));
    }

    #[test]
    fn test_recovers_and_reports_multiple_errors() {
        let source = "package p\nfunc (t *testing.T {}\nfunc ok() {}\nfunc 1() {}\nfunc TestZ(t *testing.T) {}\n";
        let errs = parse_str(source).unwrap_err();
        assert_eq!(errs.len(), 2, "got: {errs:?}");
    }

    #[test]
    fn test_stray_token_at_top_level() {
        let errs = parse_str("package p\nx := 1\n").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.starts_with("Expected declaration, found identifier 'x'"));
    }

    /// Parse on a thread with a generous stack so debug builds reach the nesting limit.
    fn parse_on_big_stack(source: String) -> Result<SourceFile, Vec<CompileError>> {
        std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(move || parse_str(&source))
            .unwrap()
            .join()
            .unwrap()
    }

    fn assert_too_deep(param_type: String) {
        let source = format!("package p\nfunc f(x {param_type}) {{}}\nfunc g(y ***int) {{}}\n");
        let errs = parse_on_big_stack(source).unwrap_err();
        assert_eq!(errs.len(), 1, "got: {errs:?}");
        assert!(errs[0].message.contains("exceeded max nesting depth"), "got: {}", errs[0].message);
    }

    #[test]
    fn test_deeply_nested_pointer_is_error() {
        assert_too_deep(format!("{}int", "*".repeat(5000)));
    }

    #[test]
    fn test_deeply_nested_parens_is_error() {
        assert_too_deep(format!("{}int{}", "(".repeat(5000), ")".repeat(5000)));
    }

    #[test]
    fn test_deeply_nested_slice_is_error() {
        assert_too_deep(format!("{}int", "[]".repeat(50000)));
    }

    #[test]
    fn test_deeply_nested_func_type_is_error() {
        assert_too_deep(format!("{}{}", "func(".repeat(3000), ")".repeat(3000)));
    }

    #[test]
    fn test_nesting_up_to_limit_parses() {
        let source = format!("package p\nfunc f(x {}int) {{}}\n", "*".repeat(MAX_TYPE_NESTING - 1));
        assert!(parse_on_big_stack(source).is_ok());

        let source = format!("package p\nfunc f(x {}int) {{}}\n", "*".repeat(MAX_TYPE_NESTING));
        assert!(parse_on_big_stack(source).is_err());
    }
}
