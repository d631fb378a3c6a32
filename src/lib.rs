#![forbid(unsafe_code)]
//! gotestmain: Go test-driver generator
//!
//! Given the source files of one Go package, gotestmain finds the test and benchmark entry points
//! by static inspection of their declarations and renders a standalone `package main` program that
//! runs exactly those entry points. Build systems use it to run Go tests without `go test`.
//!
//! The pipeline is one-directional:
//!
//! ```text
//! .go files ──frontend──▶ SourceFile ──scanner──▶ Classification ──backend──▶ driver source
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod errors;
pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{RenderError, render};
pub use errors::GenerateError;
pub use frontend::scanner::{Classification, EntryKind, scan};
