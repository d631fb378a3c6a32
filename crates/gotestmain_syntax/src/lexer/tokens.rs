//! Token types for the Go lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including the channel arrow `<-`)
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - Numeric literals keep their source spelling; discovery never needs their value.
//! - Semicolons inserted by the lexer at line ends are ordinary `Punctuation(Semicolon)` tokens.

use crate::ast::Span;
use gotestmain_core::lang::keywords::{self, KeywordId};
use gotestmain_core::lang::operators::{self, OperatorId};
use gotestmain_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(String),
    Float(String),
    Imag(String),
    /// Rune literal spelling between the quotes (escapes not decoded).
    Rune(String),
    /// Interpreted or raw string literal, decoded.
    String(String),

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Return `true` if a newline directly after this token inserts a semicolon.
    pub fn ends_statement(&self) -> bool {
        match self {
            TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Imag(_)
            | TokenKind::Rune(_)
            | TokenKind::String(_) => true,
            TokenKind::Keyword(id) => keywords::ends_statement(*id),
            TokenKind::Operator(id) => operators::ends_statement(*id),
            TokenKind::Punctuation(id) => punctuation::ends_statement(*id),
            TokenKind::Eof => false,
        }
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Int(s) | TokenKind::Float(s) | TokenKind::Imag(s) => format!("literal {}", s),
            TokenKind::Rune(s) => format!("rune literal '{}'", s),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Eof => "end of file".to_string(),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
