//! High-level facade over the compilation pipeline.
//!
//! ```text
//! Root ──extract──▶ Function ──elaborate──▶ TypedFunction ──emit──▶ WGSL
//! ```

use kokage_core::{Expression, Function, Root, Spanned, Statement};

use crate::Result;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::elaborate::elaborate_function;
use crate::emit::{KernelConfig, emit_function, emit_kernel};
use crate::ir::TypedFunction;

/// A syntax tree ready to be compiled.
///
/// Holds the input only. Every stage runs from scratch on each call, so one
/// compiler can be shared across threads.
#[derive(Debug, Clone)]
pub struct Compiler {
    root: Root,
}

impl Compiler {
    pub fn new(root: Root) -> Self {
        Self { root }
    }

    /// Deserialize ESTree JSON (a `Program` or a bare `FunctionExpression`).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(kokage_core::parse_tree(json)?))
    }

    /// Locate the function to compile.
    ///
    /// A program must start with an expression statement holding a named
    /// function expression; anything after it is ignored.
    pub fn function(&self) -> std::result::Result<&Function, Diagnostic> {
        let func = match &self.root {
            Root::FunctionExpression(func) => func.as_ref(),
            Root::Program(program) => match program.body.first() {
                Some(Statement::ExpressionStatement(stmt)) => match &stmt.expression {
                    Expression::FunctionExpression(func) => func.as_ref(),
                    other => {
                        return Err(Diagnostic::new(
                            DiagnosticKind::ExpectedFunctionExpression(other.kind()),
                            other.span(),
                        ));
                    }
                },
                Some(other) => {
                    return Err(Diagnostic::new(
                        DiagnosticKind::ExpectedExpressionStatement(other.kind()),
                        other.span(),
                    ));
                }
                None => {
                    return Err(Diagnostic::new(
                        DiagnosticKind::ExpectedExpressionStatement("empty program"),
                        program.span(),
                    ));
                }
            },
        };

        if func.id.is_none() {
            return Err(Diagnostic::new(
                DiagnosticKind::MissingFunctionName,
                func.span(),
            ));
        }
        Ok(func)
    }

    pub fn elaborate(&self) -> Result<TypedFunction> {
        let func = self.function()?;
        Ok(elaborate_function(func)?)
    }

    /// Compile to a WGSL function definition.
    pub fn emit(&self) -> Result<String> {
        let typed = self.elaborate()?;
        Ok(emit_function(&typed)?)
    }

    /// Compile to a WGSL module with a compute entry point.
    pub fn emit_kernel(&self, config: &KernelConfig) -> Result<String> {
        let typed = self.elaborate()?;
        Ok(emit_kernel(&typed, config)?)
    }
}
