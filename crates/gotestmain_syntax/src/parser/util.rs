/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl” or “types” (identifier and identifier-list parsing).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        Ok(self.identifier_spanned()?.node)
    }

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.unexpected("Expected identifier")),
        }
    }

    /// `a, b, c`
    fn identifier_list(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        let mut idents = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier_spanned()?);
        }
        Ok(idents)
    }
}
