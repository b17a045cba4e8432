use logos::{Lexer, Logos};
use std::fmt;
use tern_source::{Source, SyntaxError};

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // single character punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // one or two character operators
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<<")]
    LessLess,
    #[token(">>")]
    GreaterGreater,

    // literals
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("\"", lex_string)]
    String,
    #[regex("[0-9]+", lex_fraction)]
    Number,

    // keywords
    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("fun")]
    #[token("function")]
    Fun,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("or")]
    Or,
    #[token("return")]
    Return,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("while")]
    While,
    #[token("const")]
    Const,

    // misc
    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Error,

    /// Only generated by [`Scanner`] once the input is exhausted.
    EndOfInput,
}

/// Consumes the rest of a string literal after its opening quote.
/// An unterminated literal swallows the remaining input and lexes as [`TokenKind::Error`].
fn lex_string(lex: &mut Lexer<TokenKind>) -> bool {
    match string_len(lex.remainder()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => {
            let rest = lex.remainder().len();
            lex.bump(rest);
            false
        }
    }
}

/// Length of the string body including the closing quote, or `None` if there is none.
fn string_len(rest: &str) -> Option<usize> {
    let mut escaped = false;
    for (offset, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(offset + 1),
            _ => {}
        }
    }
    None
}

/// Extends a digit run with `.` and a fractional digit run, if there is at least one digit after the dot.
fn lex_fraction(lex: &mut Lexer<TokenKind>) -> bool {
    let len = fraction_len(lex.remainder());
    lex.bump(len);
    true
}

fn fraction_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    match (bytes.first(), bytes.get(1)) {
        (Some(b'.'), Some(digit)) if digit.is_ascii_digit() => {
            1 + bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count()
        }
        _ => 0,
    }
}

impl TokenKind {
    /// Returns the canonical upper case name of the token kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LessLess => "LESS_LESS",
            TokenKind::GreaterGreater => "GREATER_GREATER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Or => "OR",
            TokenKind::Return => "RETURN",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::While => "WHILE",
            TokenKind::Const => "CONST",
            TokenKind::Error => "ERROR",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit.
/// `text` is only present for identifiers, strings and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Option<String>,
    /// 1-based source line.
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self {
            kind,
            text: None,
            line,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}: {} ({})", self.line, self.kind, text),
            None => write!(f, "{}: {}", self.line, self.kind),
        }
    }
}

/// Turns source code into a [`Token`] sequence terminated by [`TokenKind::EndOfInput`].
/// Unexpected characters and unterminated strings are reported to the source's error reporter and skipped.
pub struct Scanner<'a> {
    lexer: Lexer<'a, TokenKind>,
    /// Source code
    source: &'a Source<'a>,
    /// Current 1-based line.
    line: usize,
    /// Offset up to which newlines have been counted into `line`.
    line_offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        Self {
            lexer: TokenKind::lexer(source.content),
            source,
            line: 1,
            line_offset: 0,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(kind) = self.lexer.next() {
            let line = self.line_at(self.lexer.span().start);
            let slice = self.lexer.slice();

            match kind {
                TokenKind::Error => self.report(slice, line),
                TokenKind::Identifier | TokenKind::Number => {
                    tokens.push(Token::with_text(kind, slice, line))
                }
                // strip the surrounding quotes
                TokenKind::String => {
                    tokens.push(Token::with_text(kind, &slice[1..slice.len() - 1], line))
                }
                _ => tokens.push(Token::new(kind, line)),
            }
        }

        let line = self.line_at(self.source.content.len());
        tokens.push(Token::new(TokenKind::EndOfInput, line));
        tokens
    }

    /// Advances the line counter up to `offset` and returns the line `offset` is on.
    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.source.content[self.line_offset..offset]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.line_offset = offset;
        self.line
    }

    fn report(&self, slice: &str, line: usize) {
        let message = if slice.starts_with('"') {
            "Unterminated string literal".to_string()
        } else {
            format!("Unexpected character `{}`", slice)
        };
        self.source
            .errors
            .add_error(SyntaxError::new(message, line, self.lexer.span()));
    }
}

/// Scans the whole `source`. See [`Scanner`].
pub fn scan<'a>(source: &'a Source<'a>) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}
