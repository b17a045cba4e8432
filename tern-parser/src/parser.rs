use crate::ast::{Ast, Block, Expr, Operator, Stmt};
use crate::lexer::{Token, TokenKind};
use thiserror::Error;

mod expr;
mod stmt;

pub use expr::Precedence;

/// How deeply expressions and statements may nest before the parse is rejected.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Fatal errors. The first one aborts the parse and no tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser was handed an empty token sequence.
    #[error("no tokens were supplied")]
    NoTokens,

    /// The token sequence does not end with [`TokenKind::EndOfInput`].
    #[error("expected the tokens to end with END_OF_INPUT but the last token is {found}")]
    MissingEndOfInput { found: TokenKind },

    /// A [`TokenKind::EndOfInput`] appears before the last token.
    #[error("END_OF_INPUT at position {position} is followed by more tokens")]
    EarlyEndOfInput { position: usize },

    /// A specific token was required by the grammar.
    #[error("line {line}: expected {expected} but encountered {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        line: usize,
    },

    /// No primary expression starts with the current token.
    #[error("line {line}: expected an expression but encountered {found} instead")]
    ExpectedExpression { found: TokenKind, line: usize },

    #[error("line {line}: nesting exceeds the limit of {} levels", MAX_NESTING_DEPTH)]
    NestingTooDeep { line: usize },
}

pub struct Parser {
    /// Exactly one [`TokenKind::EndOfInput`], at the end.
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        match tokens.last() {
            None => Err(ParseError::NoTokens),
            Some(last) if last.kind() != TokenKind::EndOfInput => {
                Err(ParseError::MissingEndOfInput { found: last.kind() })
            }
            Some(_) => match tokens[..tokens.len() - 1]
                .iter()
                .position(|token| token.kind() == TokenKind::EndOfInput)
            {
                Some(position) => Err(ParseError::EarlyEndOfInput { position }),
                None => Ok(Self { tokens }),
            },
        }
    }

    /// Returns a fresh cursor positioned on the first token.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            tokens: &self.tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parses the whole token sequence into an [`Ast`].
    pub fn parse(&self) -> Result<Ast, ParseError> {
        self.cursor().parse_program()
    }
}

/// Read position into a [`Parser`]'s tokens. Grammar productions are implemented as methods on the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    position: usize,
    /// Productions currently entered through [`Cursor::nested`].
    depth: usize,
}

impl<'t> Cursor<'t> {
    /// Parses statements until [`TokenKind::EndOfInput`] and collects them into the root block.
    pub fn parse_program(&mut self) -> Result<Ast, ParseError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_stmt()?);
        }
        Ok(Ast::new(Block::new(statements)))
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().kind() == TokenKind::EndOfInput
    }
}

/// Parse utilities
impl<'t> Cursor<'t> {
    fn peek(&self) -> &'t Token {
        &self.tokens[self.position]
    }

    /// Moves past the current token and returns it. Never moves past [`TokenKind::EndOfInput`].
    fn next(&mut self) -> &'t Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind() == kind
    }

    /// Predicate that tests whether the current token is `kind` and eats it if yes as a side effect.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParseError> {
        if self.check(kind) {
            Ok(self.next())
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Runs `production` one nesting level deeper, failing past [`MAX_NESTING_DEPTH`].
    fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                line: self.peek().line(),
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Creates an unexpected token error for the current token.
    fn unexpected(&self, expected: TokenKind) -> ParseError {
        let found = self.peek();
        ParseError::UnexpectedToken {
            expected,
            found: found.kind(),
            line: found.line(),
        }
    }
}
