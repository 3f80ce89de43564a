#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Input data structures for the kokage shader compiler.
//!
//! The compiler never parses JavaScript itself. It consumes the syntax tree a
//! front-end parser (acorn) produces for the host function, serialized as
//! ESTree JSON. This crate is the deserialization layer: a 1:1 mapping of
//! that JSON onto closed Rust enums, with source spans on every node.

pub mod estree;


pub use estree::{
    BinaryExpression, BinaryOperator, BlockStatement, CallExpression, Expression,
    ExpressionStatement, Function, Identifier, Literal, Node, Pattern, Program, ReturnStatement,
    Root, Span, Spanned, Statement,
};

/// Parse ESTree JSON into a [`Root`] node.
///
/// Accepts either a whole `Program` or a bare `FunctionExpression`.
pub fn parse_tree(json: &str) -> Result<Root, serde_json::Error> {
    serde_json::from_str(json)
}
