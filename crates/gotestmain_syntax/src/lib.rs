//! Declaration-level Go syntax frontend: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the driver generator and its debug tooling.
//!
//! ## Notes
//! - This crate is intentionally “declaration-only”: function bodies and initializer expressions are
//!   tokenized and balanced but not parsed. It does no name resolution or type checking.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `gotestmain_core::lang` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use gotestmain_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package foo\n\nfunc TestA(t *testing.T) {}\n").unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.package.node, "foo");
//! assert_eq!(file.declarations.len(), 1);
//! ```
//!
//! ## See also
//! - `gotestmain_core::lang` for registry-backed Go vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
