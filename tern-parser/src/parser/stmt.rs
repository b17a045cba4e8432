use super::*;

impl<'t> Cursor<'t> {
    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.nested(|cursor| match cursor.peek().kind() {
            TokenKind::If => cursor.parse_if_stmt(),
            TokenKind::LeftBrace => Ok(Stmt::Block(cursor.parse_block()?)),
            _ => cursor.parse_expr_stmt(),
        })
    }

    /// Parses a compound statement. `{}` is a valid block with no statements.
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RightBrace)?;

        Ok(Block::new(statements))
    }

    /// Parses an `if` statement.
    /// An `else` always belongs to the innermost `if` that does not have one yet.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RightParen)?;

        let then_branch = self.parse_stmt()?;
        let else_branch = if self.eat(TokenKind::Else) {
            Some(self.parse_stmt()?)
        } else {
            None
        };

        Ok(Stmt::if_stmt(condition, then_branch, else_branch))
    }

    /// Parses an expression statement. A lone `;` is the empty statement.
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.eat(TokenKind::Semicolon) {
            return Ok(Stmt::ExprStmt(None));
        }

        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Stmt::ExprStmt(Some(expr)))
    }
}
