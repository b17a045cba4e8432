//! Visitor pattern for AST nodes.

use crate::ast::{Ast, Block, Expr, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }
}

pub fn walk_ast<'ast>(visitor: &mut impl Visitor<'ast>, ast: &'ast Ast) {
    visitor.visit_block(ast.root());
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Literal(_) => {}
        Expr::Unary { op: _, operand } => visitor.visit_expr(operand),
        Expr::Binary { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
    }
}

pub fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast Block) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::ExprStmt(Some(expr)) => visitor.visit_expr(expr),
        Stmt::ExprStmt(None) => {}
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(else_branch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Literal, Operator};
    use crate::parse_program;
    use tern_source::Source;

    /// Records operators and literals in visiting order.
    #[derive(Default)]
    struct Recorder<'ast> {
        operators: Vec<Operator>,
        literals: Vec<&'ast Literal>,
        empty_stmts: usize,
    }

    impl<'ast> Visitor<'ast> for Recorder<'ast> {
        fn visit_expr(&mut self, expr: &'ast Expr) {
            match expr {
                Expr::Literal(literal) => self.literals.push(literal),
                Expr::Unary { op, .. } | Expr::Binary { op, .. } => self.operators.push(*op),
            }
            walk_expr(self, expr);
        }

        fn visit_stmt(&mut self, stmt: &'ast Stmt) {
            if let Stmt::ExprStmt(None) = stmt {
                self.empty_stmts += 1;
            }
            walk_stmt(self, stmt);
        }
    }

    #[test]
    fn test_visit_order() {
        let source = Source::new("if (1 < 2) { -3 * 4; } else ; ;");
        let ast = parse_program(&source).unwrap();

        let mut recorder = Recorder::default();
        walk_ast(&mut recorder, &ast);

        assert_eq!(
            recorder.operators,
            vec![
                Operator::LessThan,
                Operator::Multiplication,
                Operator::UnaryMinus
            ]
        );
        assert_eq!(
            recorder.literals,
            vec![
                &Literal::Number("1".to_string()),
                &Literal::Number("2".to_string()),
                &Literal::Number("3".to_string()),
                &Literal::Number("4".to_string()),
            ]
        );
        assert_eq!(recorder.empty_stmts, 2);
    }

    #[test]
    fn test_default_walk_visits_nothing_in_empty_program() {
        struct Counter(usize);
        impl<'ast> Visitor<'ast> for Counter {
            fn visit_stmt(&mut self, stmt: &'ast Stmt) {
                self.0 += 1;
                walk_stmt(self, stmt);
            }
        }

        let source = Source::new("");
        let ast = parse_program(&source).unwrap();
        let mut counter = Counter(0);
        walk_ast(&mut counter, &ast);
        assert_eq!(counter.0, 0);

        let source = Source::new("{ {} ; }");
        let ast = parse_program(&source).unwrap();
        walk_ast(&mut counter, &ast);
        assert_eq!(counter.0, 3);
    }
}
