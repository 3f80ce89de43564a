use indoc::indoc;

use crate::test_utils::describe;
use crate::{Compiler, DiagnosticKind, Error, KernelConfig};

/// acorn output for `(function f(x) { return u32(x + 1) })`.
const CAST_OF_SUM: &str = indoc! {r#"
    {"type": "Program", "start": 0, "end": 37, "sourceType": "script", "body": [
      {"type": "ExpressionStatement", "start": 0, "end": 37, "expression":
        {"type": "FunctionExpression", "start": 1, "end": 36,
         "id": {"type": "Identifier", "start": 10, "end": 11, "name": "f"},
         "expression": false, "generator": false, "async": false,
         "params": [{"type": "Identifier", "start": 12, "end": 13, "name": "x"}],
         "body": {"type": "BlockStatement", "start": 15, "end": 36, "body": [
           {"type": "ReturnStatement", "start": 17, "end": 34, "argument":
             {"type": "CallExpression", "start": 24, "end": 34, "optional": false,
              "callee": {"type": "Identifier", "start": 24, "end": 27, "name": "u32"},
              "arguments": [
                {"type": "BinaryExpression", "start": 28, "end": 33, "operator": "+",
                 "left": {"type": "Identifier", "start": 28, "end": 29, "name": "x"},
                 "right": {"type": "Literal", "start": 32, "end": 33, "value": 1, "raw": "1"}}
              ]}}
         ]}}}
    ]}
"#};

/// acorn output for `(function f(x) { return x - 1 })`.
const SUBTRACTION: &str = indoc! {r#"
    {"type": "Program", "start": 0, "end": 32, "body": [
      {"type": "ExpressionStatement", "start": 0, "end": 32, "expression":
        {"type": "FunctionExpression", "start": 1, "end": 31,
         "id": {"type": "Identifier", "start": 10, "end": 11, "name": "f"},
         "generator": false, "async": false,
         "params": [{"type": "Identifier", "start": 12, "end": 13, "name": "x"}],
         "body": {"type": "BlockStatement", "start": 15, "end": 31, "body": [
           {"type": "ReturnStatement", "start": 17, "end": 29, "argument":
             {"type": "BinaryExpression", "start": 24, "end": 29, "operator": "-",
              "left": {"type": "Identifier", "start": 24, "end": 25, "name": "x"},
              "right": {"type": "Literal", "start": 28, "end": 29, "value": 1, "raw": "1"}}}
         ]}}}
    ]}
"#};

/// acorn output for `(function g(x) { return x.add(u32(1)) })`.
const METHOD_CALL: &str = indoc! {r#"
    {"type": "Program", "start": 0, "end": 40, "body": [
      {"type": "ExpressionStatement", "start": 0, "end": 40, "expression":
        {"type": "FunctionExpression", "start": 1, "end": 39,
         "id": {"type": "Identifier", "start": 10, "end": 11, "name": "g"},
         "generator": false, "async": false,
         "params": [{"type": "Identifier", "start": 12, "end": 13, "name": "x"}],
         "body": {"type": "BlockStatement", "start": 15, "end": 39, "body": [
           {"type": "ReturnStatement", "start": 17, "end": 37, "argument":
             {"type": "CallExpression", "start": 24, "end": 37, "optional": false,
              "callee": {"type": "MemberExpression", "start": 24, "end": 29,
                "computed": false, "optional": false,
                "object": {"type": "Identifier", "start": 24, "end": 25, "name": "x"},
                "property": {"type": "Identifier", "start": 26, "end": 29, "name": "add"}},
              "arguments": [
                {"type": "CallExpression", "start": 30, "end": 36, "optional": false,
                 "callee": {"type": "Identifier", "start": 30, "end": 33, "name": "u32"},
                 "arguments": [{"type": "Literal", "start": 34, "end": 35, "value": 1, "raw": "1"}]}
              ]}}
         ]}}}
    ]}
"#};

fn compile_error(json: &str) -> String {
    match Compiler::from_json(json).and_then(|c| c.emit()) {
        Ok(text) => panic!("expected compilation to fail, got:\n{text}"),
        Err(Error::Compile(diag)) => describe(&diag),
        Err(err) => panic!("expected a diagnostic, got: {err}"),
    }
}

#[test]
fn compile_program() {
    let text = Compiler::from_json(CAST_OF_SUM).unwrap().emit().unwrap();

    assert_eq!(text, "fn f(x: u32) -> u32 {\n  return u32((x + 1));\n}\n");
}

#[test]
fn compile_bare_function_expression() {
    let json = indoc! {r#"
        {"type": "FunctionExpression", "start": 0, "end": 31,
         "id": {"type": "Identifier", "start": 9, "end": 11, "name": "id"},
         "params": [{"type": "Identifier", "start": 12, "end": 13, "name": "v"}],
         "body": {"type": "BlockStatement", "start": 15, "end": 31, "body": [
           {"type": "ReturnStatement", "start": 17, "end": 29, "argument":
             {"type": "Identifier", "start": 24, "end": 25, "name": "v"}}
         ]}}
    "#};

    insta::assert_snapshot!(Compiler::from_json(json).unwrap().emit().unwrap(), @r"
    fn id(v: u32) -> u32 {
      return v;
    }
    ");
}

#[test]
fn elaborate_program() {
    let typed = Compiler::from_json(CAST_OF_SUM).unwrap().elaborate().unwrap();

    insta::assert_snapshot!(typed.dump(), @r"
    fn f(x: u32) -> u32
      Return
        FunctionCall u32
          Addition
            Identifier x
            U32Literal 1
    ");
}

#[test]
fn compile_kernel() {
    let config = KernelConfig::new().workgroup_size(8);
    let text = Compiler::from_json(CAST_OF_SUM)
        .unwrap()
        .emit_kernel(&config)
        .unwrap();

    assert!(text.starts_with("fn f(x: u32) -> u32 {\n  return u32((x + 1));\n}\n\n"));
    assert!(text.contains("@compute @workgroup_size(8)\n"));
    assert!(text.contains("  result[gid.x] = f(arg0[gid.x]);\n"));
}

#[test]
fn subtraction_points_at_the_expression() {
    insta::assert_snapshot!(compile_error(SUBTRACTION), @"UnsupportedOperator at 24..29: unsupported binary operator `-`");
}

#[test]
fn method_call_points_at_the_callee() {
    insta::assert_snapshot!(compile_error(METHOD_CALL), @"UnsupportedCallee at 24..29: unsupported callee: MemberExpression");
}

#[test]
fn program_must_start_with_an_expression_statement() {
    let json = r#"{"type": "Program", "start": 0, "end": 26, "body": [
        {"type": "FunctionDeclaration", "start": 0, "end": 26}
    ]}"#;

    insta::assert_snapshot!(compile_error(json), @"ExpectedExpressionStatement at 0..26: expected an expression statement, found FunctionDeclaration");
}

#[test]
fn empty_program() {
    let json = r#"{"type": "Program", "start": 0, "end": 0, "body": []}"#;

    insta::assert_snapshot!(compile_error(json), @"ExpectedExpressionStatement at 0..0: expected an expression statement, found empty program");
}

#[test]
fn statement_must_hold_a_function_expression() {
    let json = r#"{"type": "Program", "start": 0, "end": 9, "body": [
        {"type": "ExpressionStatement", "start": 0, "end": 9, "expression":
          {"type": "ArrowFunctionExpression", "start": 0, "end": 9}}
    ]}"#;

    insta::assert_snapshot!(compile_error(json), @"ExpectedFunctionExpression at 0..9: expected a function expression, found ArrowFunctionExpression");
}

#[test]
fn function_must_be_named() {
    let json = r#"{"type": "Program", "start": 0, "end": 24, "body": [
        {"type": "ExpressionStatement", "start": 0, "end": 24, "expression":
          {"type": "FunctionExpression", "start": 1, "end": 23, "id": null, "params": [],
           "body": {"type": "BlockStatement", "start": 12, "end": 23, "body": []}}}
    ]}"#;

    let err = Compiler::from_json(json).unwrap().function().unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::MissingFunctionName);
    insta::assert_snapshot!(describe(&err), @"MissingFunctionName at 1..23: function expression must be named");
}

#[test]
fn malformed_json() {
    let err = Compiler::from_json("{").unwrap_err();
    assert!(matches!(err, Error::MalformedTree(_)));
    assert!(err.diagnostic().is_none());
}

#[test]
fn unknown_node_type() {
    let err = Compiler::from_json(r#"{"type": "Nonsense"}"#).unwrap_err();
    assert!(err.to_string().starts_with("malformed syntax tree:"));
}

#[test]
fn compile_error_display_is_the_diagnostic_message() {
    let err = Compiler::from_json(SUBTRACTION).unwrap().emit().unwrap_err();
    assert_eq!(err.to_string(), "unsupported binary operator `-`");
    assert_eq!(err.diagnostic().map(|d| d.code()), Some("UnsupportedOperator"));
}

#[test]
fn compilers_are_shareable_across_threads() {
    let compiler = Compiler::from_json(CAST_OF_SUM).unwrap();

    let outputs: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| compiler.emit().unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}
