//! Syntax tree produced by [`crate::parser::Parser`].
//!
//! Every node exclusively owns its children. Mandatory children are plain (boxed) fields and optional children are
//! [`Option`]s, so a node can never be observed half built. The [`fmt::Display`] implementations produce the
//! canonical textual representation used to compare trees.

use std::fmt;

/// Operators that can appear on [`Expr::Unary`] and [`Expr::Binary`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // arithmetic
    UnaryPlus,
    UnaryMinus,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    // bitwise
    BitwiseNot,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseLeftShift,
    BitwiseRightShift,
    // logical
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    // comparison
    EqualTo,
    NotEqualTo,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

impl Operator {
    pub fn name(self) -> &'static str {
        match self {
            Operator::UnaryPlus => "UNARY_PLUS",
            Operator::UnaryMinus => "UNARY_MINUS",
            Operator::Addition => "ADDITION",
            Operator::Subtraction => "SUBTRACTION",
            Operator::Multiplication => "MULTIPLICATION",
            Operator::Division => "DIVISION",
            Operator::Remainder => "REMAINDER",
            Operator::BitwiseNot => "BITWISE_NOT",
            Operator::BitwiseAnd => "BITWISE_AND",
            Operator::BitwiseOr => "BITWISE_OR",
            Operator::BitwiseXor => "BITWISE_XOR",
            Operator::BitwiseLeftShift => "BITWISE_LEFT_SHIFT",
            Operator::BitwiseRightShift => "BITWISE_RIGHT_SHIFT",
            Operator::LogicalNot => "LOGICAL_NOT",
            Operator::LogicalAnd => "LOGICAL_AND",
            Operator::LogicalOr => "LOGICAL_OR",
            Operator::EqualTo => "EQUAL_TO",
            Operator::NotEqualTo => "NOT_EQUAL_TO",
            Operator::LessThan => "LESS_THAN",
            Operator::LessThanOrEqualTo => "LESS_THAN_OR_EQUAL_TO",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::GreaterThanOrEqualTo => "GREATER_THAN_OR_EQUAL_TO",
        }
    }

    /// Returns `true` for prefix operators taking a single operand.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::UnaryPlus | Operator::UnaryMinus | Operator::BitwiseNot | Operator::LogicalNot
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal value. Text payloads are the exact source text, no escapes are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Bool(bool),
    /// Raw digits, e.g. `342.024`.
    Number(String),
    /// String contents without the surrounding quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Number(text) | Literal::String(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// A unary expression (e.g. `-1`).
    Unary { op: Operator, operand: Box<Expr> },
    /// A binary expression (e.g. `1+1`).
    Binary {
        lhs: Box<Expr>,
        op: Operator,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn bool_lit(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn number_lit(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::Number(text.into()))
    }

    pub fn string_lit(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(text.into()))
    }

    pub fn unary(op: Operator, operand: Expr) -> Self {
        debug_assert!(op.is_unary(), "{} is not a unary operator", op);
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(lhs: Expr, op: Operator, rhs: Expr) -> Self {
        debug_assert!(!op.is_unary(), "{} is not a binary operator", op);
        Expr::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "Literal(value: {})", literal),
            Expr::Unary { op, operand } => {
                write!(f, "UnaryExpression(operator: {}, operand: {})", op, operand)
            }
            Expr::Binary { lhs, op, rhs } => write!(
                f,
                "BinaryExpression(left: {}, operation: {}, right: {})",
                lhs, op, rhs
            ),
        }
    }
}

/// An ordered list of statements (e.g. `{ 1; 2; }`). Also the root of every [`Ast`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompoundStatement(statements: [")?;
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", stmt)?;
        }
        f.write_str("])")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression followed by `;`. `None` is the empty statement (a lone `;`).
    ExprStmt(Option<Expr>),
    Block(Block),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
}

impl Stmt {
    pub fn if_stmt(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }
}

/// Writes `value`, or `None` if it is absent.
fn fmt_optional(f: &mut fmt::Formatter<'_>, value: Option<&impl fmt::Display>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{}", value),
        None => f.write_str("None"),
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::ExprStmt(expr) => {
                f.write_str("ExpressionStatement(expression: ")?;
                fmt_optional(f, expr.as_ref())?;
                f.write_str(")")
            }
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "IfStatement(condition: {}, then: {}, else: ", condition, then_branch)?;
                fmt_optional(f, else_branch.as_ref())?;
                f.write_str(")")
            }
        }
    }
}

/// A parsed program. Owns the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    root: Block,
}

impl Ast {
    pub fn new(root: Block) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Block {
        &self.root
    }

    pub fn into_root(self) -> Block {
        self.root
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AST(root: {})", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_literal() {
        assert_snapshot!(Expr::number_lit("3.14").to_string(), @"Literal(value: 3.14)");
        assert_snapshot!(Expr::bool_lit(false).to_string(), @"Literal(value: false)");
        assert_snapshot!(Expr::string_lit("hello world").to_string(), @"Literal(value: hello world)");
    }

    #[test]
    fn test_unary_expr() {
        let unary = Expr::unary(Operator::UnaryPlus, Expr::number_lit("3.15"));
        assert_snapshot!(
            unary.to_string(),
            @"UnaryExpression(operator: UNARY_PLUS, operand: Literal(value: 3.15))"
        );
    }

    #[test]
    fn test_binary_expr() {
        let binary = Expr::binary(
            Expr::number_lit("3.14"),
            Operator::Addition,
            Expr::number_lit("3.15"),
        );
        assert_snapshot!(
            binary.to_string(),
            @"BinaryExpression(left: Literal(value: 3.14), operation: ADDITION, right: Literal(value: 3.15))"
        );
    }

    #[test]
    fn test_statements() {
        assert_snapshot!(Stmt::ExprStmt(None).to_string(), @"ExpressionStatement(expression: None)");
        assert_snapshot!(Stmt::Block(Block::default()).to_string(), @"CompoundStatement(statements: [])");

        let block = Block::new(vec![
            Stmt::ExprStmt(Some(Expr::bool_lit(true))),
            Stmt::ExprStmt(None),
        ]);
        assert_snapshot!(
            block.to_string(),
            @"CompoundStatement(statements: [ExpressionStatement(expression: Literal(value: true)), ExpressionStatement(expression: None)])"
        );
    }

    #[test]
    fn test_if_stmt() {
        let without_else = Stmt::if_stmt(Expr::bool_lit(true), Stmt::ExprStmt(None), None);
        assert_snapshot!(
            without_else.to_string(),
            @"IfStatement(condition: Literal(value: true), then: ExpressionStatement(expression: None), else: None)"
        );

        let with_else = Stmt::if_stmt(
            Expr::bool_lit(false),
            Stmt::Block(Block::default()),
            Some(Stmt::ExprStmt(Some(Expr::number_lit("1")))),
        );
        assert_snapshot!(
            with_else.to_string(),
            @"IfStatement(condition: Literal(value: false), then: CompoundStatement(statements: []), else: ExpressionStatement(expression: Literal(value: 1)))"
        );
    }

    #[test]
    fn test_ast_container() {
        let ast = Ast::new(Block::new(vec![Stmt::ExprStmt(None)]));
        assert_snapshot!(
            ast.to_string(),
            @"AST(root: CompoundStatement(statements: [ExpressionStatement(expression: None)]))"
        );
        assert_eq!(ast.root().statements.len(), 1);
        assert_eq!(ast.into_root(), Block::new(vec![Stmt::ExprStmt(None)]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let stmt = Stmt::if_stmt(
            Expr::binary(Expr::number_lit("1"), Operator::LessThan, Expr::number_lit("2")),
            Stmt::ExprStmt(Some(Expr::unary(Operator::LogicalNot, Expr::bool_lit(true)))),
            None,
        );
        assert_eq!(stmt.to_string(), stmt.to_string());
    }

    #[test]
    fn test_operator_arity() {
        assert!(Operator::UnaryMinus.is_unary());
        assert!(Operator::LogicalNot.is_unary());
        assert!(!Operator::Remainder.is_unary());
        assert!(!Operator::BitwiseXor.is_unary());
    }
}
