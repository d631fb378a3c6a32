/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_at`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Semicolon handling (`skip_semicolons`, `expect_terminator`)
/// - Balanced skipping of bodies and initializers
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Return the token `offset` positions ahead, clamped to the final `Eof`.
    fn peek_at(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// End offset of the most recently consumed token.
    fn previous_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[self.pos - 1].span.end
        }
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Build an "`msg`, found X" syntax error at the current token.
    fn unexpected(&self, msg: &str) -> CompileError {
        let token = self.peek();
        let found = if token.is_semicolon() {
            // Most semicolons are inserted by the lexer at line ends.
            "newline".to_string()
        } else {
            token.kind.describe()
        };
        CompileError::syntax(format!("{}, found {}", msg, found), self.current_span())
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn skip_semicolons(&mut self) {
        while self.peek().is_semicolon() {
            self.advance();
        }
    }

    /// Consume a statement terminator.
    ///
    /// A semicolon may be omitted before a closing `)` or `}` and at end of file.
    fn expect_terminator(&mut self, context: &str) -> Result<(), CompileError> {
        if self.peek().is_semicolon() {
            self.advance();
            return Ok(());
        }
        if self.is_at_end() || self.check_punct(PunctuationId::RParen) || self.check_punct(PunctuationId::RBrace) {
            return Ok(());
        }
        Err(self.unexpected(&format!("Expected ';' or newline {}", context)))
    }

    /// Skip a balanced `open ... close` group. The current token must be `open`.
    ///
    /// Only `open`/`close` are counted; other delimiter kinds inside are ignored.
    fn skip_balanced(&mut self, open: PunctuationId, close: PunctuationId, what: &str) -> Result<(), CompileError> {
        let start = self.current_span();
        self.expect_punct(open, &format!("Expected '{}'", gotestmain_core::lang::punctuation::as_str(open)))?;
        let mut depth = 1usize;
        while depth > 0 {
            if self.is_at_end() {
                return Err(CompileError::syntax(
                    format!("unexpected end of file in {}", what),
                    start.merge(self.current_span()),
                )
                .with_note(format!(
                    "expected '{}' to close the '{}' opened here",
                    gotestmain_core::lang::punctuation::as_str(close),
                    gotestmain_core::lang::punctuation::as_str(open)
                )));
            }
            if self.check_punct(open) {
                depth += 1;
            } else if self.check_punct(close) {
                depth -= 1;
            }
            self.advance();
        }
        Ok(())
    }

    /// Skip the remainder of a declaration spec up to (not including) its terminating `;`,
    /// the `)` closing its group, or end of file. Nested delimiters are balanced.
    fn skip_spec(&mut self) -> Result<(), CompileError> {
        let mut depth = 0usize;
        loop {
            let token = self.peek();
            match &token.kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Punctuation(PunctuationId::Semicolon) if depth == 0 => return Ok(()),
                TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => {
                    depth += 1;
                }
                TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    if depth == 0 {
                        if self.check_punct(PunctuationId::RParen) {
                            return Ok(());
                        }
                        return Err(self.unexpected("Unbalanced delimiter in declaration"));
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Recover after an error by skipping to the next top-level declaration keyword that
    /// starts a line (follows a semicolon) outside any braces.
    fn synchronize(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if depth == 0 && self.peek().kind.starts_declaration() && self.pos > 0 && self.tokens[self.pos - 1].is_semicolon() {
                return;
            }
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                depth = depth.saturating_sub(1);
            }
            self.advance();
        }
    }
}
