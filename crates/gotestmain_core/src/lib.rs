//! Provide shared, pure vocabulary and helpers for the gotestmain front-end and driver synthesizer.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the syntax front-end can use to tokenize Go source (keywords, operators, punctuation), and
//! - the driver synthesizer can use to emit well-formed Go (identifier checks, string literal quoting).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no front-end-specific types.
//! - The naming convention that decides what counts as a test lives in [`lang::conventions`].

pub mod lang;
pub mod strings;
