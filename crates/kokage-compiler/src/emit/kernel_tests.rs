use crate::diagnostics::DiagnosticKind;
use crate::emit::{KernelConfig, emit_kernel};
use crate::ir::{BinaryOp, TypedExpression, TypedFunction, TypedParam, TypedStatement};
use crate::types::ShaderType;

fn sum(name: &str, params: &[&str]) -> TypedFunction {
    let body = params
        .iter()
        .map(|p| TypedExpression::ident(*p))
        .reduce(|lhs, rhs| TypedExpression::binary(BinaryOp::Addition, lhs, rhs))
        .unwrap_or(TypedExpression::U32Literal(0));

    TypedFunction {
        name: name.to_string(),
        params: params
            .iter()
            .map(|p| TypedParam {
                name: p.to_string(),
                ty: ShaderType::U32,
            })
            .collect(),
        result: Some(ShaderType::U32),
        body: vec![TypedStatement::Return(Some(body))],
    }
}

#[test]
fn default_kernel() {
    let text = emit_kernel(&sum("f", &["x"]), &KernelConfig::default()).unwrap();

    insta::assert_snapshot!(text, @r"
    fn f(x: u32) -> u32 {
      return x;
    }

    @group(0) @binding(0) var<storage, read> arg0 : array<u32>;
    @group(0) @binding(1) var<storage, read_write> result : array<u32>;

    @compute @workgroup_size(1)
    fn compute_main(@builtin(global_invocation_id) gid : vec3<u32>) {
      result[gid.x] = f(arg0[gid.x]);
    }
    ");
}

#[test]
fn configured_kernel_with_two_parameters() {
    let config = KernelConfig::new()
        .entry_point("main")
        .workgroup_size(64)
        .group(2);
    let text = emit_kernel(&sum("add", &["a", "b"]), &config).unwrap();

    insta::assert_snapshot!(text, @r"
    fn add(a: u32, b: u32) -> u32 {
      return (a + b);
    }

    @group(2) @binding(0) var<storage, read> arg0 : array<u32>;
    @group(2) @binding(1) var<storage, read> arg1 : array<u32>;
    @group(2) @binding(2) var<storage, read_write> result : array<u32>;

    @compute @workgroup_size(64)
    fn main(@builtin(global_invocation_id) gid : vec3<u32>) {
      result[gid.x] = add(arg0[gid.x], arg1[gid.x]);
    }
    ");
}

#[test]
fn kernel_without_parameters() {
    let text = emit_kernel(&sum("zero", &[]), &KernelConfig::default()).unwrap();

    assert!(text.contains("@group(0) @binding(0) var<storage, read_write> result : array<u32>;"));
    assert!(text.contains("  result[gid.x] = zero();\n"));
    assert!(!text.contains("arg0"));
}

#[test]
fn parameter_names_may_shadow_bindings() {
    let text = emit_kernel(&sum("f", &["result"]), &KernelConfig::default()).unwrap();
    assert!(text.starts_with("fn f(result: u32) -> u32 {\n"));
}

#[test]
fn function_named_like_a_binding() {
    let err = emit_kernel(&sum("result", &["x"]), &KernelConfig::default()).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NameCollision("result".to_string()));

    let err = emit_kernel(&sum("arg1", &["x", "y"]), &KernelConfig::default()).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NameCollision("arg1".to_string()));
}

#[test]
fn function_named_like_the_invocation_id() {
    let err = emit_kernel(&sum("gid", &["x"]), &KernelConfig::default()).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NameCollision("gid".to_string()));
}

#[test]
fn function_named_like_the_entry_point() {
    let err = emit_kernel(&sum("compute_main", &[]), &KernelConfig::default()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"`compute_main` collides with a name declared by the kernel");
}

#[test]
fn entry_point_named_like_a_binding() {
    let config = KernelConfig::new().entry_point("arg0");
    let err = emit_kernel(&sum("f", &["x"]), &config).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::NameCollision("arg0".to_string()));
}

#[test]
fn zero_workgroup_size() {
    let config = KernelConfig::new().workgroup_size(0);
    let err = emit_kernel(&sum("f", &["x"]), &config).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid kernel configuration: workgroup size must be at least 1");
}

#[test]
fn malformed_entry_point() {
    for name in ["", "1main", "main-kernel", "_", "__reserved", "loop", "u32"] {
        let config = KernelConfig::new().entry_point(name);
        let err = emit_kernel(&sum("f", &["x"]), &config).unwrap_err();
        assert_eq!(err.code(), "InvalidKernelConfig", "{name:?}");
    }
}

#[test]
fn unicode_entry_point() {
    let config = KernelConfig::new().entry_point("π_main");
    let text = emit_kernel(&sum("f", &["x"]), &config).unwrap();
    assert!(text.contains("fn π_main(@builtin(global_invocation_id) gid : vec3<u32>) {\n"));
}

#[test]
fn emitter_failure_propagates() {
    let mut func = sum("f", &["x"]);
    func.body = vec![TypedStatement::Increment(TypedExpression::ident("x"))];

    let err = emit_kernel(&func, &KernelConfig::default()).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::UnsupportedEmission("Increment"));
}
