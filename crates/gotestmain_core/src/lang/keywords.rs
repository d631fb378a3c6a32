//! Define the reserved keyword vocabulary of Go.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and whether the keyword may terminate a statement.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. Go has no keyword aliases.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use gotestmain_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("package"), Some(KeywordId::Package));
//! assert_eq!(keywords::from_str("Package"), None);
//! assert!(keywords::ends_statement(KeywordId::Return));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Const,
    Func,
    Import,
    Package,
    Type,
    Var,

    // Composite types
    Chan,
    Interface,
    Map,
    Struct,

    // Control flow
    Break,
    Case,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Go,
    Goto,
    If,
    Range,
    Return,
    Select,
    Switch,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `ends_statement` marks the keywords after which a newline inserts an implicit semicolon.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub ends_statement: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Const, "const"),
    info(KeywordId::Func, "func"),
    info(KeywordId::Import, "import"),
    info(KeywordId::Package, "package"),
    info(KeywordId::Type, "type"),
    info(KeywordId::Var, "var"),
    // Composite types
    info(KeywordId::Chan, "chan"),
    info(KeywordId::Interface, "interface"),
    info(KeywordId::Map, "map"),
    info(KeywordId::Struct, "struct"),
    // Control flow
    terminal(KeywordId::Break, "break"),
    info(KeywordId::Case, "case"),
    terminal(KeywordId::Continue, "continue"),
    info(KeywordId::Default, "default"),
    info(KeywordId::Defer, "defer"),
    info(KeywordId::Else, "else"),
    terminal(KeywordId::Fallthrough, "fallthrough"),
    info(KeywordId::For, "for"),
    info(KeywordId::Go, "go"),
    info(KeywordId::Goto, "goto"),
    info(KeywordId::If, "if"),
    info(KeywordId::Range, "range"),
    terminal(KeywordId::Return, "return"),
    info(KeywordId::Select, "select"),
    info(KeywordId::Switch, "switch"),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return `true` if a newline directly after this keyword inserts a semicolon.
pub fn ends_statement(id: KeywordId) -> bool {
    info_for(id).ends_statement
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("keyword info missing")
}

/// Resolve a spelling to its keyword identifier.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        ends_statement: false,
    }
}

const fn terminal(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        ends_statement: true,
    }
}
