//! Diagnostics and error reporting for the Go front-end
//!
//! Provides `file:line:col` error messages with the offending source line and a caret underline.

use std::fmt::Write as _;

use thiserror::Error;

use crate::ast::Span;

/// A front-end error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lexical,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Render an error with source context.
///
/// ```text
/// syntax error: expected ')' after parameters, found Eof
///   --> pkg/foo_test.go:3:18
///    |
///  3 | func TestA(t *testing.T
///    |                  ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}: {}", error.kind, error.message);
    let _ = writeln!(out, "  --> {}:{}:{}", file_name, line_num, col_num);

    let width = line_num.to_string().len();
    let _ = writeln!(out, "  {:>width$} |", "", width = width);
    let _ = writeln!(out, "  {:>width$} | {}", line_num, line_text, width = width);

    let underline_len = if error.span.end > error.span.start {
        let available = line_text.chars().count().saturating_sub(col_num - 1);
        let spanned = source
            .get(error.span.start..error.span.end)
            .map_or(error.span.end - error.span.start, |text| text.chars().count());
        spanned.min(available).max(1)
    } else {
        1
    };
    let _ = writeln!(
        out,
        "  {:>width$} | {}{}",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len),
        width = width
    );

    for note in &error.notes {
        let _ = writeln!(out, "  = note: {}", note);
    }
    for hint in &error.hints {
        let _ = writeln!(out, "  = hint: {}", hint);
    }

    out
}

/// Render every error of one file, separated by blank lines.
pub fn format_errors(file_name: &str, source: &str, errors: &[CompileError]) -> String {
    errors
        .iter()
        .map(|e| format_error(file_name, source, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get line number, column number (in characters), and line text for a byte offset
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    // Columns count characters, not bytes.
    let col_num = source
        .get(line_start..offset)
        .map_or(offset - line_start, |prefix| prefix.chars().count())
        + 1;

    (line_num, col_num, line_text)
}
