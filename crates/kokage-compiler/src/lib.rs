//! Kokage compiler: elaborator, WGSL emitter, and diagnostics.
//!
//! This crate turns the ESTree of one host function into WGSL:
//! - `types` - scalar kinds, unions, and the subtype relation
//! - `builtins` - the read-only registry of callable builtins
//! - `elaborate` - bidirectional type checking into the typed IR
//! - `ir` - the typed intermediate representation
//! - `emit` - WGSL text for functions and compute kernels
//! - `diagnostics` - error reporting
//! - `compiler` - high-level Compiler facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builtins;
pub mod compiler;
pub mod diagnostics;
pub mod elaborate;
pub mod emit;
pub mod ir;
pub mod types;

#[cfg(test)]
mod builtins_tests;
#[cfg(test)]
mod compiler_tests;

#[cfg(test)]
pub mod test_utils;

pub use builtins::{BuiltinSignature, builtin};
pub use compiler::Compiler;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticPrinter};
pub use elaborate::{
    Scope, check_expression, elaborate_function, elaborate_statement, synth_expression,
};
pub use emit::{KernelConfig, emit_expression, emit_function, emit_kernel, emit_statement};
pub use ir::{TypedExpression, TypedFunction, TypedStatement};
pub use types::{ScalarKind, ShaderType, all_scalars, subtype};

/// Errors that can occur while compiling a function.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid ESTree JSON.
    #[error("malformed syntax tree: {0}")]
    MalformedTree(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] Diagnostic),
}

impl Error {
    /// The diagnostic, if the tree was well-formed but could not be compiled.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Compile(diag) => Some(diag),
            Error::MalformedTree(_) => None,
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
