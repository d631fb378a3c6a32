//! Operator vocabulary.
//!
//! Go operators, including assignment forms and the channel arrow. Lookup is by exact spelling so
//! the lexer can perform longest-match tokenization against this table.
//!
//! ## Examples
//! ```rust
//! use gotestmain_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&^="), Some(OperatorId::AndNotEq));
//! assert_eq!(operators::as_str(OperatorId::Arrow), "<-");
//! assert!(operators::ends_statement(OperatorId::PlusPlus));
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Bitwise,
    Comparison,
    Logical,
    Assignment,
    Channel,
    IncDec,
}

/// Stable identifier for operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    AndNot,
    Tilde,

    // Assignment
    Eq,
    Define,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    AndNotEq,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Channel
    Arrow,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator token.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    info(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    info(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    info(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    info(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    info(OperatorId::Amp, "&", OperatorCategory::Bitwise),
    info(OperatorId::Pipe, "|", OperatorCategory::Bitwise),
    info(OperatorId::Caret, "^", OperatorCategory::Bitwise),
    info(OperatorId::Shl, "<<", OperatorCategory::Bitwise),
    info(OperatorId::Shr, ">>", OperatorCategory::Bitwise),
    info(OperatorId::AndNot, "&^", OperatorCategory::Bitwise),
    info(OperatorId::Tilde, "~", OperatorCategory::Bitwise),
    info(OperatorId::Eq, "=", OperatorCategory::Assignment),
    info(OperatorId::Define, ":=", OperatorCategory::Assignment),
    info(OperatorId::PlusEq, "+=", OperatorCategory::Assignment),
    info(OperatorId::MinusEq, "-=", OperatorCategory::Assignment),
    info(OperatorId::StarEq, "*=", OperatorCategory::Assignment),
    info(OperatorId::SlashEq, "/=", OperatorCategory::Assignment),
    info(OperatorId::PercentEq, "%=", OperatorCategory::Assignment),
    info(OperatorId::AmpEq, "&=", OperatorCategory::Assignment),
    info(OperatorId::PipeEq, "|=", OperatorCategory::Assignment),
    info(OperatorId::CaretEq, "^=", OperatorCategory::Assignment),
    info(OperatorId::ShlEq, "<<=", OperatorCategory::Assignment),
    info(OperatorId::ShrEq, ">>=", OperatorCategory::Assignment),
    info(OperatorId::AndNotEq, "&^=", OperatorCategory::Assignment),
    info(OperatorId::AndAnd, "&&", OperatorCategory::Logical),
    info(OperatorId::OrOr, "||", OperatorCategory::Logical),
    info(OperatorId::Not, "!", OperatorCategory::Logical),
    info(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    info(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    info(OperatorId::Lt, "<", OperatorCategory::Comparison),
    info(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    info(OperatorId::Gt, ">", OperatorCategory::Comparison),
    info(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    info(OperatorId::Arrow, "<-", OperatorCategory::Channel),
    info(OperatorId::PlusPlus, "++", OperatorCategory::IncDec),
    info(OperatorId::MinusMinus, "--", OperatorCategory::IncDec),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` if a newline directly after this operator inserts a semicolon.
pub fn ends_statement(id: OperatorId) -> bool {
    category(id) == OperatorCategory::IncDec
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn info(id: OperatorId, canonical: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, canonical, category }
}
