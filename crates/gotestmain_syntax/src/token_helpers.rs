//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use gotestmain_core::lang::keywords::KeywordId;
use gotestmain_core::lang::operators::OperatorId;
use gotestmain_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for explicit or inserted semicolons.
    pub fn is_semicolon(&self) -> bool {
        self.is_punctuation(PunctuationId::Semicolon)
    }

    /// Return `true` if this token can begin a type expression.
    pub fn starts_type(&self) -> bool {
        match self {
            TokenKind::Ident(_) => true,
            TokenKind::Operator(OperatorId::Star | OperatorId::Arrow) => true,
            TokenKind::Punctuation(PunctuationId::LBracket | PunctuationId::LParen) => true,
            TokenKind::Keyword(
                KeywordId::Map | KeywordId::Chan | KeywordId::Func | KeywordId::Struct | KeywordId::Interface,
            ) => true,
            _ => false,
        }
    }

    /// Return `true` if this keyword introduces a top-level declaration.
    pub fn starts_declaration(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(
                KeywordId::Func | KeywordId::Var | KeywordId::Const | KeywordId::Type | KeywordId::Import
            )
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.is_semicolon()`.
    pub fn is_semicolon(&self) -> bool {
        self.kind.is_semicolon()
    }
}
