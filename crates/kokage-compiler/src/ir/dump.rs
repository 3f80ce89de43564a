//! Indented tree rendering of the typed IR, for `kokage ir`.

use std::fmt::Write;

use super::{AssignTarget, TypedExpression, TypedFunction, TypedStatement};

impl TypedFunction {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        write!(out, "fn {}(", self.name).expect("String write never fails");
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{}: {}", param.name, param.ty).expect("String write never fails");
        }
        out.push(')');
        if let Some(result) = &self.result {
            write!(out, " -> {result}").expect("String write never fails");
        }
        out.push('\n');
        for stmt in &self.body {
            dump_statement(&mut out, stmt, 1);
        }
        out
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

fn dump_statement(out: &mut String, stmt: &TypedStatement, depth: usize) {
    match stmt {
        TypedStatement::Assignment { lhs, op, rhs } => {
            line(out, depth, &format!("Assignment {}", op.as_str()));
            match lhs {
                AssignTarget::Phony => line(out, depth + 1, "_"),
                AssignTarget::Expression(expr) => dump_expression(out, expr, depth + 1),
            }
            dump_expression(out, rhs, depth + 1);
        }
        TypedStatement::Increment(expr) | TypedStatement::Decrement(expr) => {
            line(out, depth, stmt.name());
            dump_expression(out, expr, depth + 1);
        }
        TypedStatement::Return(expr) => {
            line(out, depth, "Return");
            if let Some(expr) = expr {
                dump_expression(out, expr, depth + 1);
            }
        }
    }
}

fn dump_expression(out: &mut String, expr: &TypedExpression, depth: usize) {
    match expr {
        TypedExpression::BoolLiteral(v) => line(out, depth, &format!("BoolLiteral {v}")),
        TypedExpression::I32Literal(v) => line(out, depth, &format!("I32Literal {v}")),
        TypedExpression::U32Literal(v) => line(out, depth, &format!("U32Literal {v}")),
        TypedExpression::F32Literal(v) => line(out, depth, &format!("F32Literal {v}")),
        TypedExpression::F16Literal(v) => line(out, depth, &format!("F16Literal {v}")),
        TypedExpression::Unary { op, operand } => {
            line(out, depth, op.name());
            dump_expression(out, operand, depth + 1);
        }
        TypedExpression::Binary { op, lhs, rhs } => {
            line(out, depth, op.name());
            dump_expression(out, lhs, depth + 1);
            dump_expression(out, rhs, depth + 1);
        }
        TypedExpression::FunctionCall { callee, arguments } => {
            line(out, depth, &format!("FunctionCall {callee}"));
            for arg in arguments {
                dump_expression(out, arg, depth + 1);
            }
        }
        TypedExpression::Identifier(name) => line(out, depth, &format!("Identifier {name}")),
    }
}
