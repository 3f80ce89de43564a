//! Compute-kernel wrapper around an emitted function.
//!
//! Each parameter is fed from its own read-only `array<u32>` storage buffer
//! and the result is written element-wise into a read-write buffer, indexed
//! by `global_invocation_id.x`.

use std::fmt::Write;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::ir::TypedFunction;

use super::names::is_declarable;
use super::wgsl::emit_function;

const RESULT_BINDING: &str = "result";
const INVOCATION_ID: &str = "gid";

/// Kernel layout options.
#[derive(Clone, Debug)]
pub struct KernelConfig {
    entry_point: String,
    workgroup_size: u32,
    group: u32,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            entry_point: "compute_main".to_string(),
            workgroup_size: 1,
            group: 0,
        }
    }
}

impl KernelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the `@compute` function.
    pub fn entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }

    /// X dimension of `@workgroup_size`. Must be at least 1.
    pub fn workgroup_size(mut self, size: u32) -> Self {
        self.workgroup_size = size;
        self
    }

    /// Bind group holding every storage buffer.
    pub fn group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    fn validate(&self) -> Result<(), Diagnostic> {
        if self.workgroup_size == 0 {
            return Err(invalid("workgroup size must be at least 1".to_string()));
        }
        if !is_declarable(&self.entry_point) {
            return Err(invalid(format!(
                "`{}` is not a valid entry point name",
                self.entry_point
            )));
        }
        Ok(())
    }
}

/// Emit a full WGSL module: the function, its storage bindings, and the
/// compute entry point calling it.
pub fn emit_kernel(func: &TypedFunction, config: &KernelConfig) -> Result<String, Diagnostic> {
    config.validate()?;

    let args: Vec<String> = (0..func.params.len()).map(|i| format!("arg{i}")).collect();
    let is_binding = |name: &str| {
        name == RESULT_BINDING || name == INVOCATION_ID || args.iter().any(|a| a == name)
    };

    if is_binding(&func.name) || func.name == config.entry_point {
        return Err(collision(&func.name));
    }
    if is_binding(&config.entry_point) {
        return Err(collision(&config.entry_point));
    }

    let mut out = emit_function(func)?;
    out.push('\n');

    for (binding, arg) in args.iter().enumerate() {
        writeln!(
            out,
            "@group({}) @binding({binding}) var<storage, read> {arg} : array<u32>;",
            config.group
        )
        .expect("String write never fails");
    }
    writeln!(
        out,
        "@group({}) @binding({}) var<storage, read_write> {RESULT_BINDING} : array<u32>;",
        config.group,
        args.len()
    )
    .expect("String write never fails");

    let call_args = args
        .iter()
        .map(|arg| format!("{arg}[{INVOCATION_ID}.x]"))
        .collect::<Vec<_>>()
        .join(", ");
    write!(
        out,
        "\n@compute @workgroup_size({})\n\
         fn {}(@builtin(global_invocation_id) {INVOCATION_ID} : vec3<u32>) {{\n\
         \x20 {RESULT_BINDING}[{INVOCATION_ID}.x] = {}({call_args});\n\
         }}\n",
        config.workgroup_size, config.entry_point, func.name
    )
    .expect("String write never fails");

    tracing::trace!(entry_point = %config.entry_point, "emitted kernel");
    Ok(out)
}

fn invalid(message: String) -> Diagnostic {
    Diagnostic::detached(DiagnosticKind::InvalidKernelConfig(message))
}

fn collision(name: &str) -> Diagnostic {
    Diagnostic::detached(DiagnosticKind::NameCollision(name.to_string()))
}
