//! Driver program synthesis
//!
//! Renders a [`Classification`] as a standalone `package main` Go program. Output is a pure function
//! of the classification: the same input always yields byte-identical text.
//!
//! ## Layout
//!
//! ```text
//! // Code generated by gotestmain. DO NOT EDIT.
//! package main
//! import ( "os"? "testing" undertest "<pkg>"? )
//! func everything(pat, str string) (bool, error)
//! var tests = []testing.InternalTest{ ... }
//! var benchmarks = []testing.InternalBenchmark{ ... }
//! func main() { os.Chdir? ; testing.Main | testing.MainStart + undertest.TestMain }
//! ```

use gotestmain_core::lang::conventions::{
    CUSTOM_ENTRYPOINT_NAME, DRIVER_PACKAGE, HARNESS_PACKAGE, MATCH_ALL_FN, UNDER_TEST_ALIAS,
};
use gotestmain_core::strings::{is_exported, is_identifier, quote};
use thiserror::Error;

use super::writer::GoWriter;
use crate::frontend::scanner::{Classification, EntryKind};

/// First line of every generated driver; recognized by Go tooling as generated code.
pub const GENERATED_HEADER: &str = "// Code generated by gotestmain. DO NOT EDIT.";

/// The classification cannot be expressed as a Go program.
///
/// Scanned classifications never trigger these; only hand-built ones can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("package identifier is empty")]
    EmptyPackage,

    #[error("{kind} name {name:?} is not an exported Go identifier")]
    InvalidName { kind: EntryKind, name: String },
}

/// Table variable name and element type for each entry kind.
fn table(kind: EntryKind) -> (&'static str, &'static str) {
    match kind {
        EntryKind::Test => ("tests", "InternalTest"),
        EntryKind::Benchmark => ("benchmarks", "InternalBenchmark"),
    }
}

fn validate(classification: &Classification) -> Result<(), RenderError> {
    if classification.package_identifier().is_empty() {
        return Err(RenderError::EmptyPackage);
    }
    for kind in EntryKind::ALL {
        if let Some(name) = classification
            .names(kind)
            .iter()
            .find(|name| !is_identifier(name) || !is_exported(name))
        {
            return Err(RenderError::InvalidName {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

/// Render the driver program for `classification`.
///
/// ## Errors
/// [`RenderError`] if the package identifier is empty or a name cannot be referenced from Go.
#[tracing::instrument(skip_all, fields(package = %classification.package_identifier()))]
pub fn render(classification: &Classification) -> Result<String, RenderError> {
    validate(classification)?;

    let mut w = GoWriter::new();
    w.writeln(GENERATED_HEADER);
    w.newline();
    w.writeln(&format!("package {}", DRIVER_PACKAGE));
    w.newline();
    emit_imports(&mut w, classification);
    w.newline();
    emit_match_all(&mut w);
    for kind in EntryKind::ALL {
        w.newline();
        emit_table(&mut w, kind, classification.names(kind));
    }
    w.newline();
    emit_main(&mut w, classification);

    let out = w.finish();
    tracing::debug!(bytes = out.len(), "rendered driver");
    Ok(out)
}

fn emit_imports(w: &mut GoWriter, c: &Classification) {
    w.block("import (", ")", |w| {
        if !c.working_directory().is_empty() {
            w.writeln(&quote("os"));
        }
        w.writeln(&quote(HARNESS_PACKAGE));
        if c.references_package() {
            w.newline();
            w.writeln(&format!("{} {}", UNDER_TEST_ALIAS, quote(c.package_identifier())));
        }
    });
}

fn emit_match_all(w: &mut GoWriter) {
    w.block(&format!("func {}(pat, str string) (bool, error) {{", MATCH_ALL_FN), "}", |w| {
        w.writeln("return true, nil");
    });
}

fn emit_table(w: &mut GoWriter, kind: EntryKind, names: &[String]) {
    let (var, elem) = table(kind);
    let head = format!("var {} = []{}.{}{{", var, HARNESS_PACKAGE, elem);
    if names.is_empty() {
        w.writeln(&format!("{}}}", head));
        return;
    }
    w.block(&head, "}", |w| {
        for name in names {
            w.writeln(&format!("{{{}, {}.{}}},", quote(name), UNDER_TEST_ALIAS, name));
        }
    });
}

fn emit_main(w: &mut GoWriter, c: &Classification) {
    let (tests, _) = table(EntryKind::Test);
    let (benchmarks, _) = table(EntryKind::Benchmark);
    let args = format!("{}, {}, {}, nil", MATCH_ALL_FN, tests, benchmarks);

    w.block("func main() {", "}", |w| {
        if !c.working_directory().is_empty() {
            w.block(
                &format!("if err := os.Chdir({}); err != nil {{", quote(c.working_directory())),
                "}",
                |w| w.writeln("panic(err)"),
            );
        }
        if c.has_custom_entry_point() {
            w.writeln(&format!("m := {}.MainStart({})", HARNESS_PACKAGE, args));
            w.writeln(&format!("{}.{}(m)", UNDER_TEST_ALIAS, CUSTOM_ENTRYPOINT_NAME));
        } else {
            w.writeln(&format!("{}.Main({})", HARNESS_PACKAGE, args));
        }
    });
}
