/// Declaration parsing methods.
///
/// This chunk is responsible for the package clause and the top-level declarations:
/// imports, `const`/`var`/`type` groups, and functions/methods.
///
/// ## Notes
/// - `const`/`var`/`type` keep only their declared names; the rest of each spec is skipped.
/// - Function bodies are skipped by brace balancing; signatures are parsed in full.
/// - Error recovery is handled by `Parser::synchronize()` (in `helpers.rs`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Package clause
    // ========================================================================

    fn package_clause(&mut self) -> Result<Spanned<Ident>, CompileError> {
        self.expect_keyword(KeywordId::Package, "Expected package clause at start of file")?;
        let name = self.identifier_spanned()?;
        if name.node == "_" {
            return Err(CompileError::syntax("invalid package name _".to_string(), name.span));
        }
        self.expect_terminator("after package clause")?;
        Ok(name)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Parse one top-level declaration.
    ///
    /// Grouped imports expand to one declaration per import spec, hence the `Vec`.
    fn declaration(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        match self.peek().keyword_id() {
            Some(KeywordId::Import) => self.import_decl(),
            Some(KeywordId::Const) => Ok(vec![self.gen_decl(KeywordId::Const)?]),
            Some(KeywordId::Var) => Ok(vec![self.gen_decl(KeywordId::Var)?]),
            Some(KeywordId::Type) => Ok(vec![self.gen_decl(KeywordId::Type)?]),
            Some(KeywordId::Func) => {
                let start = self.current_span().start;
                let func = self.function_decl()?;
                Ok(vec![Spanned::new(
                    Declaration::Function(func),
                    Span::new(start, self.previous_end()),
                )])
            }
            _ => Err(self.unexpected("Expected declaration")),
        }
    }

    fn import_decl(&mut self) -> Result<Vec<Spanned<Declaration>>, CompileError> {
        self.expect_keyword(KeywordId::Import, "Expected 'import'")?;

        if !self.match_punct(PunctuationId::LParen) {
            return Ok(vec![self.import_spec()?]);
        }

        let mut specs = Vec::new();
        loop {
            self.skip_semicolons();
            if self.match_punct(PunctuationId::RParen) {
                break;
            }
            if self.is_at_end() {
                return Err(self.unexpected("Expected ')' to close import group"));
            }
            specs.push(self.import_spec()?);
            self.expect_terminator("after import spec")?;
        }
        Ok(specs)
    }

    fn import_spec(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.current_span().start;

        let alias = match &self.peek().kind {
            TokenKind::Ident(name) if name == "_" => Some(ImportAlias::Blank),
            TokenKind::Ident(name) => Some(ImportAlias::Named(name.clone())),
            TokenKind::Punctuation(PunctuationId::Dot) => Some(ImportAlias::Dot),
            _ => None,
        };
        if alias.is_some() {
            self.advance();
        }

        let path_span = self.current_span();
        let path = match &self.peek().kind {
            TokenKind::String(path) => path.clone(),
            _ => return Err(self.unexpected("Expected import path")),
        };
        self.advance();
        if path.is_empty() {
            return Err(CompileError::syntax("invalid import path: empty string".to_string(), path_span));
        }

        Ok(Spanned::new(
            Declaration::Import(ImportDecl { path, alias }),
            Span::new(start, self.previous_end()),
        ))
    }

    /// Parse a `const`, `var` or `type` declaration, keeping only the declared names.
    fn gen_decl(&mut self, keyword: KeywordId) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.current_span().start;
        self.expect_keyword(keyword, "Expected declaration keyword")?;

        let grouped = self.match_punct(PunctuationId::LParen);
        let mut names = Vec::new();
        if grouped {
            loop {
                self.skip_semicolons();
                if self.match_punct(PunctuationId::RParen) {
                    break;
                }
                if self.is_at_end() {
                    return Err(self.unexpected("Expected ')' to close declaration group"));
                }
                names.extend(self.spec_names(keyword)?);
                self.skip_spec()?;
                self.expect_terminator("after declaration spec")?;
            }
        } else {
            names = self.spec_names(keyword)?;
            self.skip_spec()?;
        }

        let decl = GenDecl { grouped, names };
        let node = match keyword {
            KeywordId::Const => Declaration::Const(decl),
            KeywordId::Var => Declaration::Var(decl),
            _ => Declaration::Type(decl),
        };
        Ok(Spanned::new(node, Span::new(start, self.previous_end())))
    }

    /// `type` specs declare exactly one name; `const`/`var` specs declare a list.
    fn spec_names(&mut self, keyword: KeywordId) -> Result<Vec<Spanned<Ident>>, CompileError> {
        if keyword == KeywordId::Type {
            Ok(vec![self.identifier_spanned()?])
        } else {
            self.identifier_list()
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    fn function_decl(&mut self) -> Result<FunctionDecl, CompileError> {
        self.expect_keyword(KeywordId::Func, "Expected 'func'")?;

        let receiver = if self.check_punct(PunctuationId::LParen) {
            let open = self.current_span();
            let mut receivers = self.param_list()?;
            match receivers.len() {
                1 => receivers.pop(),
                0 => {
                    return Err(CompileError::syntax(
                        "method has no receiver".to_string(),
                        Span::new(open.start, self.previous_end()),
                    ));
                }
                _ => {
                    return Err(CompileError::syntax(
                        "method has multiple receivers".to_string(),
                        receivers[1].span,
                    ));
                }
            }
        } else {
            None
        };

        let name = self.identifier()?;

        let has_type_params = if self.check_punct(PunctuationId::LBracket) {
            if receiver.is_some() {
                return Err(CompileError::syntax(
                    "methods cannot have type parameters".to_string(),
                    self.current_span(),
                )
                .with_hint("declare the type parameters on the receiver's type instead"));
            }
            self.skip_balanced(PunctuationId::LBracket, PunctuationId::RBracket, "type parameter list")?;
            true
        } else {
            false
        };

        let params = self.param_list()?;
        let results = self.results()?;

        let has_body = if self.check_punct(PunctuationId::LBrace) {
            self.skip_balanced(PunctuationId::LBrace, PunctuationId::RBrace, "function body")?;
            true
        } else {
            false
        };

        Ok(FunctionDecl {
            name,
            receiver,
            has_type_params,
            params,
            results,
            has_body,
        })
    }

    /// Parse an optional result list: `(T1, T2)`, `(n int, err error)`, a single type, or nothing.
    fn results(&mut self) -> Result<Vec<Spanned<Param>>, CompileError> {
        if self.check_punct(PunctuationId::LParen) {
            return self.param_list();
        }
        if self.peek().kind.starts_type() {
            let ty = self.type_expr()?;
            let span = ty.span;
            return Ok(vec![Spanned::new(Param { name: None, ty }, span)]);
        }
        Ok(Vec::new())
    }

    /// Parse a parenthesized parameter list and apply Go's grouping rules.
    ///
    /// Either every parameter is named (`a, b int, c string`) or none is (`int, string`);
    /// a name without a type takes the type of the next named entry.
    fn param_list(&mut self) -> Result<Vec<Spanned<Param>>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '('")?;

        let mut entries = Vec::new();
        loop {
            if self.match_punct(PunctuationId::RParen) {
                break;
            }
            entries.push(self.param_entry()?);
            if !self.match_punct(PunctuationId::Comma) {
                self.expect_punct(PunctuationId::RParen, "Expected ',' or ')' in parameter list")?;
                break;
            }
        }

        if !entries.iter().any(|e| matches!(e, ParamEntry::Named(..))) {
            return Ok(entries
                .into_iter()
                .map(|entry| match entry {
                    ParamEntry::Bare(name) => {
                        let span = name.span;
                        let ty = Spanned::new(TypeExpr::Named(name.node), span);
                        Spanned::new(Param { name: None, ty }, span)
                    }
                    ParamEntry::Type(ty) | ParamEntry::Named(_, ty) => {
                        let span = ty.span;
                        Spanned::new(Param { name: None, ty }, span)
                    }
                })
                .collect());
        }

        let mut params = Vec::new();
        let mut pending: Vec<Spanned<Ident>> = Vec::new();
        for entry in entries {
            match entry {
                ParamEntry::Bare(name) => pending.push(name),
                ParamEntry::Named(name, ty) => {
                    for n in pending.drain(..).chain(std::iter::once(name)) {
                        let span = n.span.merge(ty.span);
                        params.push(Spanned::new(
                            Param {
                                name: Some(n.node),
                                ty: ty.clone(),
                            },
                            span,
                        ));
                    }
                }
                ParamEntry::Type(ty) => {
                    return Err(CompileError::syntax(
                        "mixed named and unnamed parameters".to_string(),
                        ty.span,
                    ));
                }
            }
        }
        if let Some(name) = pending.first() {
            return Err(CompileError::syntax(
                "mixed named and unnamed parameters".to_string(),
                name.span,
            )
            .with_note(format!("'{}' has no type", name.node)));
        }
        Ok(params)
    }

    /// Classify one parameter-list entry by looking ahead past a leading identifier.
    fn param_entry(&mut self) -> Result<ParamEntry, CompileError> {
        if !matches!(self.peek().kind, TokenKind::Ident(_)) {
            return Ok(ParamEntry::Type(self.param_type()?));
        }

        let next = &self.peek_at(1).kind;
        if next.is_punctuation(PunctuationId::Comma) || next.is_punctuation(PunctuationId::RParen) {
            return Ok(ParamEntry::Bare(self.identifier_spanned()?));
        }
        let named = match next {
            // `pkg.Type`
            TokenKind::Punctuation(PunctuationId::Dot) => false,
            TokenKind::Punctuation(PunctuationId::Ellipsis) => true,
            // `name []T` / `name [N]T` versus an instantiation `List[int]`.
            TokenKind::Punctuation(PunctuationId::LBracket) => self.bracket_starts_named_param(),
            next => next.starts_type(),
        };

        if named {
            let name = self.identifier_spanned()?;
            let ty = self.param_type()?;
            Ok(ParamEntry::Named(name, ty))
        } else {
            Ok(ParamEntry::Type(self.param_type()?))
        }
    }

    /// With the current token an identifier followed by `[`, decide whether the brackets start
    /// the parameter's type (`[]T`, `[N]T`) or instantiate the identifier (`Set[int]`).
    fn bracket_starts_named_param(&self) -> bool {
        if self.peek_at(2).kind.is_punctuation(PunctuationId::RBracket) {
            return true;
        }
        let mut depth = 0usize;
        let mut offset = 1;
        loop {
            let kind = &self.peek_at(offset).kind;
            match kind {
                TokenKind::Eof => return false,
                TokenKind::Punctuation(PunctuationId::LBracket) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RBracket) => {
                    depth -= 1;
                    if depth == 0 {
                        let after = &self.peek_at(offset + 1).kind;
                        return !(after.is_punctuation(PunctuationId::Comma)
                            || after.is_punctuation(PunctuationId::RParen));
                    }
                }
                _ => {}
            }
            offset += 1;
        }
    }

    /// A parameter type, which may be variadic (`...T`).
    fn param_type(&mut self) -> Result<Spanned<TypeExpr>, CompileError> {
        let start = self.current_span().start;
        if self.match_punct(PunctuationId::Ellipsis) {
            let inner = self.type_expr()?;
            return Ok(Spanned::new(
                TypeExpr::Variadic(Box::new(inner)),
                Span::new(start, self.previous_end()),
            ));
        }
        self.type_expr()
    }
}
