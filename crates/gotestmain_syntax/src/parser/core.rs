/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
/// It also contains a small internal helper type shared across the other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
///
/// One comma-separated entry of a parameter list before Go's grouping rules are applied.
///
/// `(a, b int)` yields `[Bare(a), Named(b, int)]`; `(int, string)` yields two `Bare`/`Type`
/// entries that are later read as unnamed types.
enum ParamEntry {
    Bare(Spanned<Ident>),
    Named(Spanned<Ident>, Spanned<TypeExpr>),
    Type(Spanned<TypeExpr>),
}

/// Deepest type nesting accepted before parsing gives up with an error.
///
/// Every nesting level costs several stack frames (`type_expr`, and for function types
/// `param_list`/`param_entry`/`results`), so this bounds stack use of the recursive descent.
pub const MAX_TYPE_NESTING: usize = 100;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at top-level
///   declaration boundaries, so several errors in one file are reported together.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
    /// Current type nesting, bounded by [`MAX_TYPE_NESTING`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `gotestmain_syntax::lexer`; must end with `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the entire token stream into a [`SourceFile`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. A missing package clause is fatal;
    /// errors inside declarations are collected and parsing resumes at the next declaration.
    pub fn parse(mut self) -> Result<SourceFile, Vec<CompileError>> {
        if self.tokens.is_empty() {
            return Err(vec![CompileError::syntax(
                "empty token stream".to_string(),
                Span::default(),
            )]);
        }

        self.skip_semicolons();
        let package = match self.package_clause() {
            Ok(package) => package,
            Err(e) => return Err(vec![e]),
        };

        let mut declarations = Vec::new();
        let mut seen_other = false;

        loop {
            self.skip_semicolons();
            if self.is_at_end() {
                break;
            }

            if self.check_keyword(KeywordId::Import) && seen_other {
                self.errors.push(CompileError::syntax(
                    "imports must appear before other declarations".to_string(),
                    self.current_span(),
                ));
            }

            match self.declaration() {
                Ok(decls) => {
                    seen_other |= decls
                        .iter()
                        .any(|d| !matches!(d.node, Declaration::Import(_)));
                    declarations.extend(decls);
                    if let Err(e) = self.expect_terminator("after top level declaration") {
                        self.errors.push(e);
                        self.synchronize();
                    }
                }
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(SourceFile { package, declarations })
        } else {
            Err(self.errors)
        }
    }
}
