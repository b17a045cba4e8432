use tern_parser::ast::Ast;
use tern_parser::parser::ParseError;
use tern_source::{Source, SyntaxError};

/// Result of running the front end over one piece of source code.
#[derive(Debug)]
pub struct Output {
    pub ast: Result<Ast, ParseError>,
    /// Non-fatal scan diagnostics, in source order.
    pub diagnostics: Vec<SyntaxError>,
}

/// Scans and parses `content`.
pub fn parse(content: &str) -> Output {
    let source = Source::new(content);
    let ast = tern_parser::parse_program(&source);
    let diagnostics = source.errors.errors().clone();
    Output { ast, diagnostics }
}
