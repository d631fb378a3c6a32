//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters, separators, and access markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use gotestmain_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("..."), Some(PunctuationId::Ellipsis));
//! assert_eq!(punctuation::as_str(PunctuationId::RBrace), "}");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access
    Dot,

    // Markers
    Ellipsis,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
///
/// ## Notes
/// - `ends_statement` marks closing delimiters after which a newline inserts a semicolon.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub ends_statement: bool,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ","),
    info(PunctuationId::Semicolon, ";"),
    info(PunctuationId::Colon, ":"),
    // Access
    info(PunctuationId::Dot, "."),
    // Markers
    info(PunctuationId::Ellipsis, "..."),
    // Delimiters
    info(PunctuationId::LParen, "("),
    closing(PunctuationId::RParen, ")"),
    info(PunctuationId::LBracket, "["),
    closing(PunctuationId::RBracket, "]"),
    info(PunctuationId::LBrace, "{"),
    closing(PunctuationId::RBrace, "}"),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return `true` if a newline directly after this token inserts a semicolon.
pub fn ends_statement(id: PunctuationId) -> bool {
    info_for(id).ends_statement
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        ends_statement: false,
    }
}

const fn closing(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        ends_statement: true,
    }
}
