//! Pretty-printer for WGSL functions.
//!
//! Output depends on nothing but the IR passed in: emitting the same tree
//! twice yields the same bytes.

use std::fmt::Write;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::ir::{BinaryOp, TypedExpression, TypedFunction, TypedStatement};

use super::names::is_declarable;

type EmitResult<T> = Result<T, Diagnostic>;

const INDENT: &str = "  ";

/// Emit a complete function definition, closing brace and trailing newline
/// included.
///
/// Parameters and result are always declared `u32`. The function and
/// parameter names must be declarable WGSL identifiers.
pub fn emit_function(func: &TypedFunction) -> EmitResult<String> {
    let mut out = String::new();
    write!(out, "fn {}(", declared(&func.name)?).expect("String write never fails");
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write!(out, "{}: u32", declared(&param.name)?).expect("String write never fails");
    }
    out.push_str(") -> u32 {\n");

    for stmt in &func.body {
        out.push_str(INDENT);
        write_statement(&mut out, stmt)?;
        out.push('\n');
    }
    out.push_str("}\n");

    tracing::trace!(function = %func.name, bytes = out.len(), "emitted function");
    Ok(out)
}

/// Emit one statement, without indentation or newline.
pub fn emit_statement(stmt: &TypedStatement) -> EmitResult<String> {
    let mut out = String::new();
    write_statement(&mut out, stmt)?;
    Ok(out)
}

pub fn emit_expression(expr: &TypedExpression) -> EmitResult<String> {
    let mut out = String::new();
    write_expression(&mut out, expr)?;
    Ok(out)
}

fn write_statement(out: &mut String, stmt: &TypedStatement) -> EmitResult<()> {
    match stmt {
        TypedStatement::Return(Some(expr)) => {
            out.push_str("return ");
            write_expression(out, expr)?;
            out.push(';');
        }
        TypedStatement::Return(None) => out.push_str("return;"),
        TypedStatement::Assignment { .. }
        | TypedStatement::Increment(_)
        | TypedStatement::Decrement(_) => return Err(unsupported(stmt.name())),
    }
    Ok(())
}

fn write_expression(out: &mut String, expr: &TypedExpression) -> EmitResult<()> {
    match expr {
        TypedExpression::BoolLiteral(v) => write!(out, "{v}").expect("String write never fails"),
        TypedExpression::I32Literal(v) => write!(out, "{v}").expect("String write never fails"),
        TypedExpression::U32Literal(v) => write!(out, "{v}").expect("String write never fails"),
        TypedExpression::Binary {
            op: BinaryOp::Addition,
            lhs,
            rhs,
        } => {
            out.push('(');
            write_expression(out, lhs)?;
            out.push_str(" + ");
            write_expression(out, rhs)?;
            out.push(')');
        }
        TypedExpression::FunctionCall { callee, arguments } => {
            out.push_str(callee);
            out.push('(');
            for (i, arg) in arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expression(out, arg)?;
            }
            out.push(')');
        }
        TypedExpression::Identifier(name) => out.push_str(declared(name)?),
        TypedExpression::F32Literal(_)
        | TypedExpression::F16Literal(_)
        | TypedExpression::Unary { .. }
        | TypedExpression::Binary { .. } => return Err(unsupported(expr.name())),
    }
    Ok(())
}

fn unsupported(node: &'static str) -> Diagnostic {
    Diagnostic::detached(DiagnosticKind::UnsupportedEmission(node))
}

fn declared(name: &str) -> EmitResult<&str> {
    if is_declarable(name) {
        Ok(name)
    } else {
        Err(Diagnostic::detached(DiagnosticKind::InvalidIdentifier(
            name.to_string(),
        )))
    }
}
