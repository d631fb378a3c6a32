//! Lexer for Go source files
//!
//! Handles tokenization including:
//! - Keywords and identifiers (Unicode letters allowed)
//! - Numeric literals (kept as text), rune literals, interpreted and raw strings
//! - Operators and punctuation, matched longest-first against the `gotestmain_core` registries
//! - Line and block comments
//! - Automatic semicolon insertion at line ends
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use gotestmain_core::lang::{operators, punctuation};
use gotestmain_core::lang::punctuation::PunctuationId;
use gotestmain_core::strings::{is_identifier_char, is_letter};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Semicolon insertion (Go spec, "Semicolons"):
//
//   last token ends a statement?  ──no──▶ newline is whitespace
//            │yes
//            ▼
//   newline / EOF / block comment spanning a newline ──▶ emit ';'
// ============================================================================

/// Lexer for Go source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        // A leading byte order mark is ignored.
        if self.peek() == Some('\u{FEFF}') {
            self.advance();
        }

        while !self.is_at_end() {
            self.scan_token();
        }

        let end = self.current_pos;
        self.insert_semicolon(Span::new(end, end));
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn error(&mut self, message: impl Into<String>, start: usize) {
        self.errors
            .push(CompileError::new(message.into(), Span::new(start, self.current_pos)));
    }

    /// Emit an implicit `;` if the previous token can end a statement.
    fn insert_semicolon(&mut self, span: Span) {
        if self.tokens.last().is_some_and(|t| t.kind.ends_statement()) {
            self.tokens.push(Token::new(
                TokenKind::Punctuation(PunctuationId::Semicolon),
                span,
            ));
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' => {}
            '\n' => self.insert_semicolon(Span::new(start, self.current_pos)),
            '/' if self.peek() == Some('/') => self.line_comment(),
            '/' if self.peek() == Some('*') => self.block_comment(start),
            '"' => self.interpreted_string(start),
            '`' => self.raw_string(start),
            '\'' => self.rune(start),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.number(start, c),
            c if c.is_ascii_digit() => self.number(start, c),
            c if is_letter(c) => self.identifier(start),
            _ => self.operator_or_punctuation(start, c),
        }
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn line_comment(&mut self) {
        // The newline itself is left for `scan_token` so it can insert a semicolon.
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn block_comment(&mut self, start: usize) {
        self.advance(); // '*'
        let mut saw_newline = false;
        loop {
            match self.advance() {
                None => {
                    self.error("comment not terminated", start);
                    return;
                }
                Some('*') if self.match_char('/') => break,
                Some('\n') => saw_newline = true,
                Some(_) => {}
            }
        }
        if saw_newline {
            self.insert_semicolon(Span::new(start, self.current_pos));
        }
    }

    // ========================================================================
    // Identifiers and keywords
    // ========================================================================

    fn identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_identifier_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.current_pos];
        let kind = match keyword_id(text) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(text.to_string()),
        };
        self.push(kind, start);
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan a numeric literal. The spelling is kept verbatim; only its category is decided.
    fn number(&mut self, start: usize, first: char) {
        let hex = first == '0' && matches!(self.peek(), Some('x' | 'X'));
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_' || c == '.') {
                break;
            }
            self.advance();
            let exponent = if hex { matches!(c, 'p' | 'P') } else { matches!(c, 'e' | 'E') };
            if exponent && matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
        }

        let text = self.source[start..self.current_pos].to_string();
        let lower = text.to_ascii_lowercase();
        let prefixed = lower.starts_with("0x") || lower.starts_with("0b") || lower.starts_with("0o");
        let kind = if lower.ends_with('i') {
            TokenKind::Imag(text)
        } else if (hex && (lower.contains('.') || lower.contains('p')))
            || (!prefixed && (lower.contains('.') || lower.contains('e')))
        {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        };
        self.push(kind, start);
    }

    // ========================================================================
    // Runes and strings
    // ========================================================================

    fn rune(&mut self, start: usize) {
        let body_start = self.current_pos;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error("rune literal not terminated", start);
                    return;
                }
                Some('\'') => break,
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        let body = self.source[body_start..self.current_pos].to_string();
        self.advance(); // closing '
        if body.is_empty() {
            self.error("empty rune literal or unescaped ' in rune literal", start);
            return;
        }
        self.push(TokenKind::Rune(body), start);
    }

    fn raw_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    self.error("raw string literal not terminated", start);
                    return;
                }
                Some('`') => break,
                // Carriage returns inside raw strings are discarded.
                Some('\r') => {}
                Some(c) => value.push(c),
            }
        }
        self.push(TokenKind::String(value), start);
    }

    fn interpreted_string(&mut self, start: usize) {
        let mut bytes: Vec<u8> = Vec::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error("string literal not terminated", start);
                    return;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.current_pos;
                    self.advance();
                    self.escape(escape_start, &mut bytes);
                }
                Some(c) => {
                    self.advance();
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        let value = String::from_utf8_lossy(&bytes).into_owned();
        self.push(TokenKind::String(value), start);
    }

    /// Decode one escape sequence (the backslash is already consumed) into `out`.
    fn escape(&mut self, start: usize, out: &mut Vec<u8>) {
        let simple = match self.peek() {
            Some('a') => Some(0x07),
            Some('b') => Some(0x08),
            Some('f') => Some(0x0C),
            Some('n') => Some(b'\n'),
            Some('r') => Some(b'\r'),
            Some('t') => Some(b'\t'),
            Some('v') => Some(0x0B),
            Some('\\') => Some(b'\\'),
            Some('"') => Some(b'"'),
            _ => None,
        };
        if let Some(byte) = simple {
            self.advance();
            out.push(byte);
            return;
        }

        match self.peek() {
            Some('x') => {
                self.advance();
                match self.digits(2, 16).and_then(|v| u8::try_from(v).ok()) {
                    Some(byte) => out.push(byte),
                    None => self.error("invalid hexadecimal escape", start),
                }
            }
            Some('0'..='7') => match self.digits(3, 8).and_then(|v| u8::try_from(v).ok()) {
                Some(byte) => out.push(byte),
                None => self.error("invalid octal escape", start),
            },
            Some(marker @ ('u' | 'U')) => {
                self.advance();
                let count = if marker == 'u' { 4 } else { 8 };
                match self.digits(count, 16).and_then(char::from_u32) {
                    Some(c) => {
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                    }
                    None => self.error("escape sequence is invalid Unicode code point", start),
                }
            }
            _ => {
                self.advance();
                self.error("unknown escape sequence", start);
            }
        }
    }

    /// Consume exactly `count` digits in `radix`, returning their value.
    fn digits(&mut self, count: usize, radix: u32) -> Option<u32> {
        let mut value: u32 = 0;
        for _ in 0..count {
            let digit = self.peek().and_then(|c| c.to_digit(radix))?;
            self.advance();
            value = value.checked_mul(radix)?.checked_add(digit)?;
        }
        Some(value)
    }

    // ========================================================================
    // Operators and punctuation
    // ========================================================================

    /// Longest-match lookup against the operator and punctuation registries.
    fn operator_or_punctuation(&mut self, start: usize, first: char) {
        for len in (2..=3).rev() {
            let Some(candidate) = self.source.get(start..start + len) else {
                continue;
            };
            let kind = operators::from_str(candidate)
                .map(TokenKind::Operator)
                .or_else(|| punctuation::from_str(candidate).map(TokenKind::Punctuation));
            if let Some(kind) = kind {
                // First char is already consumed.
                for _ in 1..candidate.chars().count() {
                    self.advance();
                }
                self.push(kind, start);
                return;
            }
        }

        let single = &self.source[start..self.current_pos];
        if let Some(id) = operators::from_str(single) {
            self.push(TokenKind::Operator(id), start);
        } else if let Some(id) = punctuation::from_str(single) {
            self.push(TokenKind::Punctuation(id), start);
        } else {
            self.error(format!("Unexpected character '{}'", first.escape_debug()), start);
        }
    }
}

/// Tokenize Go source text.
///
/// ## Errors
/// Returns every lexical error found; tokenization continues past errors so a file's problems are
/// reported together.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}
