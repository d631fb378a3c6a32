//! gotestmain backend
//!
//! This module turns a [`Classification`](crate::frontend::scanner::Classification) into the source
//! text of a Go driver program.
//!
//! ## Module Organization
//!
//! - `driver.rs` - Driver layout and rendering entry point
//! - `writer.rs` - Tab-indenting string builder

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod driver;
pub mod writer;

pub use driver::{GENERATED_HEADER, RenderError, render};
