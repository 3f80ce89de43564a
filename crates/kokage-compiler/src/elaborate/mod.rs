//! Bidirectional elaboration of ESTree nodes into the typed IR.
//!
//! Two mutually recursive judgments:
//! - [`synth_expression`] infers a type bottom-up,
//! - [`check_expression`] verifies an expression against an expected type.
//!
//! The first violation aborts elaboration with a [`Diagnostic`] pointing at
//! the offending node.

mod scope;


use kokage_core::{
    BinaryExpression, BinaryOperator, CallExpression, Expression, Function, Literal, Pattern,
    ReturnStatement, Spanned, Statement,
};

pub use scope::Scope;

use crate::builtins::builtin;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::ir::{BinaryOp, TypedExpression, TypedFunction, TypedParam, TypedStatement};
use crate::types::{ShaderType, subtype};

type ElabResult<T> = Result<T, Diagnostic>;

/// Elaborate a whole function expression.
///
/// Parameters enter the scope as `u32`. The body must be exactly one
/// supported statement.
pub fn elaborate_function(func: &Function) -> ElabResult<TypedFunction> {
    let Some(id) = &func.id else {
        return Err(Diagnostic::new(
            DiagnosticKind::MissingFunctionName,
            func.span(),
        ));
    };

    let _span = tracing::info_span!("elaborate", function = %id.name).entered();

    if func.is_async {
        return Err(unsupported_construct("async function", func));
    }
    if func.generator {
        return Err(unsupported_construct("generator function", func));
    }

    let mut scope = Scope::new();
    let mut params = Vec::with_capacity(func.params.len());
    for param in &func.params {
        let Pattern::Identifier(ident) = param else {
            return Err(Diagnostic::new(
                DiagnosticKind::UnsupportedParameter(param.kind()),
                param.span(),
            ));
        };
        if !scope.declare(ident.name.as_str(), ShaderType::U32) {
            return Err(Diagnostic::new(
                DiagnosticKind::DuplicateParameter(ident.name.clone()),
                ident.span(),
            ));
        }
        params.push(TypedParam {
            name: ident.name.clone(),
            ty: ShaderType::U32,
        });
    }

    let stmt = match func.body.body.as_slice() {
        [stmt] => stmt,
        [] => return Err(unsupported_construct("empty function body", &func.body)),
        stmts => {
            return Err(unsupported_construct(
                format!("function body with {} statements", stmts.len()),
                &func.body,
            ));
        }
    };

    let (stmt, result) = elaborate_statement(stmt, &scope)?;
    tracing::debug!(params = params.len(), "elaborated function");

    Ok(TypedFunction {
        name: id.name.clone(),
        params,
        result,
        body: vec![stmt],
    })
}

/// Elaborate one body statement.
///
/// Returns the typed statement and, for a `return` with an argument, the
/// synthesized type of the returned value.
pub fn elaborate_statement(
    stmt: &Statement,
    scope: &Scope,
) -> ElabResult<(TypedStatement, Option<ShaderType>)> {
    tracing::debug!(kind = stmt.kind(), "elaborate statement");

    match stmt {
        Statement::ReturnStatement(ReturnStatement { argument, .. }) => match argument {
            Some(expr) => {
                let (expr, ty) = synth_expression(expr, scope)?;
                Ok((TypedStatement::Return(Some(expr)), Some(ty)))
            }
            None => Ok((TypedStatement::Return(None), None)),
        },
        other => Err(unsupported_construct(other.kind(), other)),
    }
}

/// Infer the type of `expr` with no expectation.
pub fn synth_expression(
    expr: &Expression,
    scope: &Scope,
) -> ElabResult<(TypedExpression, ShaderType)> {
    let (typed, ty) = match expr {
        Expression::Literal(lit) => synth_literal(lit)?,
        Expression::Identifier(ident) => {
            let Some(ty) = scope.get(&ident.name) else {
                return Err(Diagnostic::new(
                    DiagnosticKind::UnknownIdentifier(ident.name.clone()),
                    ident.span(),
                ));
            };
            (TypedExpression::ident(ident.name.as_str()), ty.clone())
        }
        Expression::BinaryExpression(binary) => synth_binary(binary, scope)?,
        Expression::CallExpression(call) => synth_call(call, scope)?,
        other => {
            return Err(Diagnostic::new(
                DiagnosticKind::UnsupportedExpression(other.kind()),
                other.span(),
            ));
        }
    };

    tracing::debug!(node = typed.name(), ty = %ty, "synth");
    Ok((typed, ty))
}

/// Verify that `expr` has a type that fits `expected`.
///
/// Synthesizes first, then requires the result to be a subtype of
/// `expected`. Literals are not narrowed to the expected kind.
pub fn check_expression(
    expr: &Expression,
    expected: &ShaderType,
    scope: &Scope,
) -> ElabResult<TypedExpression> {
    let (typed, actual) = synth_expression(expr, scope)?;
    tracing::debug!(node = typed.name(), %expected, %actual, "check");

    if !subtype(&actual, expected) {
        return Err(Diagnostic::new(
            DiagnosticKind::TypeMismatch {
                expected: expected.clone(),
                actual,
            },
            expr.span(),
        ));
    }
    Ok(typed)
}

fn synth_literal(lit: &Literal) -> ElabResult<(TypedExpression, ShaderType)> {
    let value = lit
        .number()
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX));
    let Some(value) = value else {
        return Err(Diagnostic::new(
            DiagnosticKind::UnsupportedLiteral(lit.text()),
            lit.span(),
        ));
    };
    Ok((TypedExpression::U32Literal(value as u32), ShaderType::U32))
}

fn synth_binary(
    binary: &BinaryExpression,
    scope: &Scope,
) -> ElabResult<(TypedExpression, ShaderType)> {
    if binary.operator != BinaryOperator::Add {
        return Err(Diagnostic::new(
            DiagnosticKind::UnsupportedOperator(binary.operator),
            binary.span(),
        ));
    }

    let (lhs, ty) = synth_expression(&binary.left, scope)?;
    let rhs = check_expression(&binary.right, &ty, scope)?;
    Ok((TypedExpression::binary(BinaryOp::Addition, lhs, rhs), ty))
}

fn synth_call(call: &CallExpression, scope: &Scope) -> ElabResult<(TypedExpression, ShaderType)> {
    let Expression::Identifier(callee) = call.callee.as_ref() else {
        return Err(Diagnostic::new(
            DiagnosticKind::UnsupportedCallee(call.callee.kind()),
            call.callee.span(),
        ));
    };
    if call.optional {
        return Err(Diagnostic::new(
            DiagnosticKind::UnsupportedExpression("optional call"),
            call.span(),
        ));
    }

    let Some(signature) = builtin(&callee.name) else {
        return Err(Diagnostic::new(
            DiagnosticKind::UnknownFunction(callee.name.clone()),
            callee.span(),
        ));
    };

    if call.arguments.len() != signature.arity() {
        return Err(Diagnostic::new(
            DiagnosticKind::ArityMismatch {
                function: callee.name.clone(),
                expected: signature.arity(),
                actual: call.arguments.len(),
            },
            call.span(),
        ));
    }

    let arguments = call
        .arguments
        .iter()
        .zip(&signature.params)
        .map(|(arg, expected)| check_expression(arg, expected, scope))
        .collect::<ElabResult<Vec<_>>>()?;

    Ok((
        TypedExpression::call(callee.name.as_str(), arguments),
        signature.result.clone(),
    ))
}

fn unsupported_construct(what: impl Into<String>, node: &impl Spanned) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::UnsupportedConstruct(what.into()), node.span())
}
