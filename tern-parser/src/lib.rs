//! Scanner, syntax tree and recursive-descent parser of the Tern front end.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;

use ast::Ast;
use parser::{ParseError, Parser};
use tern_source::Source;

/// Scans and parses `source`. Scan diagnostics are reported to `source.errors` and do not stop the parse.
pub fn parse_program(source: &Source) -> Result<Ast, ParseError> {
    let tokens = lexer::scan(source);
    Parser::new(tokens)?.parse()
}
