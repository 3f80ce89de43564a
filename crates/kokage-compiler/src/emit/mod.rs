//! WGSL text emission from the typed IR.
//!
//! - `wgsl`: the function definition itself
//! - `kernel`: storage bindings and a compute entry point around it
//! - `names`: which identifiers may be declared

mod kernel;
mod names;
mod wgsl;

#[cfg(test)]
mod kernel_tests;

pub use kernel::{KernelConfig, emit_kernel};
pub use wgsl::{emit_expression, emit_function, emit_statement};
