//! Library-level errors for driver generation
//!
//! Every failure that ends an invocation is a [`GenerateError`]. Declarations that do not qualify as
//! entry points are not errors; the scanner skips them silently.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::RenderError;

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// A source file could not be turned into a declaration tree.
    #[error("failed to parse {}", path.display())]
    #[diagnostic(code(gotestmain::parse), help("fix the syntax errors above; no driver was written"))]
    Parse {
        path: PathBuf,
        /// Diagnostics rendered with source context, one block per error.
        rendered: String,
    },

    /// A source file could not be read, or the output could not be written.
    #[error("{}: {source}", path.display())]
    #[diagnostic(code(gotestmain::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(gotestmain::render))]
    Render(#[from] RenderError),
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
