use super::*;

/// Binary precedence levels, from loosest to tightest binding.
///
/// The bitwise levels are placeholders in the chain: no token maps to them yet, so they pass straight through to
/// the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

impl Precedence {
    /// Entry point of the expression grammar.
    pub const LOWEST: Precedence = Precedence::BitwiseOr;

    /// Returns the next tighter level or `None` for [`Precedence::Multiplicative`], whose operands are unary
    /// expressions.
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::BitwiseOr => Some(Precedence::BitwiseXor),
            Precedence::BitwiseXor => Some(Precedence::BitwiseAnd),
            Precedence::BitwiseAnd => Some(Precedence::Equality),
            Precedence::Equality => Some(Precedence::Relational),
            Precedence::Relational => Some(Precedence::Shift),
            Precedence::Shift => Some(Precedence::Additive),
            Precedence::Additive => Some(Precedence::Multiplicative),
            Precedence::Multiplicative => None,
        }
    }

    /// The tokens folded at this level and the operator each one produces.
    pub fn operators(self) -> &'static [(TokenKind, Operator)] {
        match self {
            Precedence::BitwiseOr | Precedence::BitwiseXor | Precedence::BitwiseAnd => &[],
            Precedence::Equality => &[
                (TokenKind::EqualEqual, Operator::EqualTo),
                (TokenKind::BangEqual, Operator::NotEqualTo),
            ],
            Precedence::Relational => &[
                (TokenKind::Less, Operator::LessThan),
                (TokenKind::LessEqual, Operator::LessThanOrEqualTo),
                (TokenKind::Greater, Operator::GreaterThan),
                (TokenKind::GreaterEqual, Operator::GreaterThanOrEqualTo),
            ],
            Precedence::Shift => &[
                (TokenKind::LessLess, Operator::BitwiseLeftShift),
                (TokenKind::GreaterGreater, Operator::BitwiseRightShift),
            ],
            Precedence::Additive => &[
                (TokenKind::Plus, Operator::Addition),
                (TokenKind::Minus, Operator::Subtraction),
            ],
            Precedence::Multiplicative => &[
                (TokenKind::Star, Operator::Multiplication),
                (TokenKind::Slash, Operator::Division),
                (TokenKind::Percent, Operator::Remainder),
            ],
        }
    }

    /// Returns the operator `kind` stands for at this level, if any.
    pub fn binary_op(self, kind: TokenKind) -> Option<Operator> {
        self.operators()
            .iter()
            .find(|(token, _)| *token == kind)
            .map(|&(_, op)| op)
    }
}

impl<'t> Cursor<'t> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_binary_expr`] with [`Precedence::LOWEST`], one nesting level
    /// deeper.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.nested(|cursor| cursor.parse_binary_expr(Precedence::LOWEST))
    }

    /// Parses a left associative chain of operators of `level`, with operands of the next tighter level.
    pub fn parse_binary_expr(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_operand(level)?;

        while let Some(op) = level.binary_op(self.peek().kind()) {
            self.next(); // eat operator
            let rhs = self.parse_operand(level)?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn parse_operand(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        match level.tighter() {
            Some(tighter) => self.parse_binary_expr(tighter),
            None => self.parse_unary_expr(),
        }
    }

    /// Parses a prefix operator applied to a unary expression, or a primary expression.
    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek().kind() {
            TokenKind::Minus => Operator::UnaryMinus,
            TokenKind::Plus => Operator::UnaryPlus,
            TokenKind::Bang => Operator::LogicalNot,
            _ => return self.parse_primary_expr(),
        };
        self.next();

        let operand = self.nested(|cursor| cursor.parse_unary_expr())?;
        Ok(Expr::unary(op, operand))
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek();
        let expr = match token.kind() {
            TokenKind::True => Expr::bool_lit(true),
            TokenKind::False => Expr::bool_lit(false),
            TokenKind::Number => Expr::number_lit(token.text().unwrap_or_default()),
            TokenKind::String => Expr::string_lit(token.text().unwrap_or_default()),
            TokenKind::LeftParen => {
                self.next();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RightParen)?;
                return Ok(inner);
            }
            found => {
                return Err(ParseError::ExpectedExpression {
                    found,
                    line: token.line(),
                })
            }
        };
        self.next(); // eat literal
        Ok(expr)
    }
}
