//! Go language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation, and the well-known identifiers of the Go testing convention.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer and parser.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata such as whether a
//!   token may end a statement (Go's automatic semicolon insertion).
//!
//! ## Examples
//! ```rust
//! use gotestmain_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod conventions;
pub mod keywords;
pub mod operators;
pub mod punctuation;
