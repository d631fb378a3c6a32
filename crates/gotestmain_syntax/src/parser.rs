//! Parser for Go source files
//!
//! Converts a token stream into a [`SourceFile`] declaration tree. Only top-level structure and
//! function signatures are parsed; bodies and initializers are skipped by balanced-delimiter scanning.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use gotestmain_syntax::{lexer, parser};
//!
//! let source = "package foo\n\nfunc BenchmarkX(b *testing.B) {}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use gotestmain_core::lang::keywords::KeywordId;
use gotestmain_core::lang::operators::OperatorId;
use gotestmain_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
