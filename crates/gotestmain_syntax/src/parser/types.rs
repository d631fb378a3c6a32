/// Type expression parsing.
///
/// This chunk parses Go type syntax as it appears in function signatures: named and qualified
/// types, pointers, slices/arrays, maps, channels, function types and generic instantiations.
///
/// ## Notes
/// - Array lengths and `struct`/`interface` bodies are skipped, not parsed.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<TypeExpr>, CompileError> {
        if self.depth >= MAX_TYPE_NESTING {
            return Err(CompileError::syntax(
                format!("exceeded max nesting depth of {} in type", MAX_TYPE_NESTING),
                self.current_span(),
            ));
        }
        self.depth += 1;
        let ty = self.nested_type();
        self.depth -= 1;
        ty
    }

    fn nested_type(&mut self) -> Result<Spanned<TypeExpr>, CompileError> {
        let start = self.current_span().start;

        let ty = match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                let base = if self.match_punct(PunctuationId::Dot) {
                    let selected = self.identifier()?;
                    TypeExpr::Qualified {
                        qualifier: name,
                        name: selected,
                    }
                } else {
                    TypeExpr::Named(name)
                };
                if self.check_punct(PunctuationId::LBracket) {
                    let base = Spanned::new(base, Span::new(start, self.previous_end()));
                    let args = self.type_args()?;
                    TypeExpr::Generic {
                        base: Box::new(base),
                        args,
                    }
                } else {
                    base
                }
            }
            TokenKind::Operator(OperatorId::Star) => {
                self.advance();
                TypeExpr::Pointer(Box::new(self.type_expr()?))
            }
            TokenKind::Operator(OperatorId::Arrow) => {
                self.advance();
                self.expect_keyword(KeywordId::Chan, "Expected 'chan' after '<-'")?;
                TypeExpr::Chan(ChanDir::Recv, Box::new(self.type_expr()?))
            }
            TokenKind::Keyword(KeywordId::Chan) => {
                self.advance();
                let dir = if self.match_op(OperatorId::Arrow) {
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                TypeExpr::Chan(dir, Box::new(self.type_expr()?))
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                if self.peek_at(1).kind.is_punctuation(PunctuationId::RBracket) {
                    self.advance();
                    self.advance();
                    TypeExpr::Slice(Box::new(self.type_expr()?))
                } else {
                    self.skip_balanced(PunctuationId::LBracket, PunctuationId::RBracket, "array length")?;
                    TypeExpr::Array(Box::new(self.type_expr()?))
                }
            }
            TokenKind::Keyword(KeywordId::Map) => {
                self.advance();
                self.expect_punct(PunctuationId::LBracket, "Expected '[' after 'map'")?;
                let key = self.type_expr()?;
                self.expect_punct(PunctuationId::RBracket, "Expected ']' after map key type")?;
                let value = self.type_expr()?;
                TypeExpr::Map(Box::new(key), Box::new(value))
            }
            TokenKind::Keyword(KeywordId::Func) => {
                self.advance();
                let params = self.param_list()?;
                let results = self.results()?;
                TypeExpr::Func { params, results }
            }
            TokenKind::Keyword(KeywordId::Struct) => {
                self.advance();
                self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace, "struct type")?;
                TypeExpr::Struct
            }
            TokenKind::Keyword(KeywordId::Interface) => {
                self.advance();
                self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace, "interface type")?;
                TypeExpr::Interface
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.type_expr()?;
                self.expect_punct(PunctuationId::RParen, "Expected ')' after parenthesized type")?;
                TypeExpr::Paren(Box::new(inner))
            }
            _ => return Err(self.unexpected("Expected type")),
        };

        Ok(Spanned::new(ty, Span::new(start, self.previous_end())))
    }

    /// `[T1, T2]` after a generic type name.
    fn type_args(&mut self) -> Result<Vec<Spanned<TypeExpr>>, CompileError> {
        self.expect_punct(PunctuationId::LBracket, "Expected '['")?;
        let mut args = Vec::new();
        loop {
            if self.check_punct(PunctuationId::RBracket) && !args.is_empty() {
                break;
            }
            args.push(self.type_expr()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after type arguments")?;
        Ok(args)
    }
}
