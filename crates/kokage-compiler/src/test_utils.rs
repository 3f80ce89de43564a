//! Test utilities: ESTree builders and snapshot macros.
//!
//! Builders produce nodes with zeroed spans. Tests that care about positions
//! go through acorn JSON instead.

use kokage_core::{
    BinaryExpression, BinaryOperator, BlockStatement, CallExpression, Expression, Function,
    Identifier, Literal, Node, Pattern, ReturnStatement, Statement,
};

use crate::Diagnostic;
use crate::elaborate::{Scope, elaborate_function};
use crate::emit::emit_function;
use crate::types::ShaderType;

/// Snapshot test for the WGSL emitted from a hand-built function.
#[macro_export]
macro_rules! shot_wgsl {
    ($func:expr, @$snapshot:tt) => {{
        let output = $crate::test_utils::expect_wgsl(&$func);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

/// Snapshot test for the diagnostic a hand-built function fails with.
#[macro_export]
macro_rules! shot_error {
    ($func:expr, @$snapshot:tt) => {{
        let output = $crate::test_utils::expect_error(&$func);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

pub fn expect_wgsl(func: &Function) -> String {
    let typed = match elaborate_function(func) {
        Ok(typed) => typed,
        Err(diag) => panic!("expected elaboration to succeed, got: {}", describe(&diag)),
    };
    match emit_function(&typed) {
        Ok(text) => text,
        Err(diag) => panic!("expected emission to succeed, got: {}", describe(&diag)),
    }
}

pub fn expect_error(func: &Function) -> String {
    match elaborate_function(func).and_then(|typed| emit_function(&typed)) {
        Ok(text) => panic!("expected compilation to fail, got:\n{text}"),
        Err(diag) => describe(&diag),
    }
}

/// One-line rendering: `Code: message`, with the range when there is one.
pub fn describe(diag: &Diagnostic) -> String {
    match diag.range {
        Some(range) => format!(
            "{} at {}..{}: {}",
            diag.code(),
            u32::from(range.start()),
            u32::from(range.end()),
            diag
        ),
        None => format!("{}: {}", diag.code(), diag),
    }
}

/// Scope holding `names`, all typed `u32`.
pub fn scope(names: &[&str]) -> Scope {
    names.iter().map(|name| (*name, ShaderType::U32)).collect()
}

pub fn identifier(name: &str) -> Identifier {
    Identifier {
        name: name.to_string(),
        start: 0,
        end: 0,
    }
}

pub fn ident(name: &str) -> Expression {
    Expression::Identifier(identifier(name))
}

pub fn num(value: f64) -> Expression {
    Expression::Literal(Literal {
        value: serde_json::json!(value),
        raw: Some(value.to_string()),
        regex: None,
        bigint: None,
        start: 0,
        end: 0,
    })
}

pub fn string(value: &str) -> Expression {
    Expression::Literal(Literal {
        value: serde_json::json!(value),
        raw: Some(format!("{value:?}")),
        regex: None,
        bigint: None,
        start: 0,
        end: 0,
    })
}

pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::BinaryExpression(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        start: 0,
        end: 0,
    })
}

pub fn add(left: Expression, right: Expression) -> Expression {
    binary(BinaryOperator::Add, left, right)
}

pub fn call(name: &str, arguments: Vec<Expression>) -> Expression {
    call_expr(ident(name), arguments)
}

pub fn call_expr(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::CallExpression(CallExpression {
        callee: Box::new(callee),
        arguments,
        optional: false,
        start: 0,
        end: 0,
    })
}

/// `object.method(arguments)`; the member access itself is opaque.
pub fn method_call(arguments: Vec<Expression>) -> Expression {
    call_expr(Expression::MemberExpression(Node::default()), arguments)
}

pub fn ret(argument: Option<Expression>) -> Statement {
    Statement::ReturnStatement(ReturnStatement {
        argument,
        start: 0,
        end: 0,
    })
}

pub fn func(name: &str, params: &[&str], body: Vec<Statement>) -> Function {
    Function {
        id: Some(identifier(name)),
        params: params
            .iter()
            .map(|p| Pattern::Identifier(identifier(p)))
            .collect(),
        body: BlockStatement {
            body,
            start: 0,
            end: 0,
        },
        generator: false,
        is_async: false,
        start: 0,
        end: 0,
    }
}

/// `function name(params) { return expr }`
pub fn returning(name: &str, params: &[&str], expr: Expression) -> Function {
    func(name, params, vec![ret(Some(expr))])
}
