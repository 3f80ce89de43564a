//! Typed intermediate representation.
//!
//! Mirrors the WGSL expression and statement grammar. Elaboration produces a
//! subset of it (literals, addition, calls, identifiers, `return`); the rest
//! exists so the target model is complete and the emitter has to take a
//! position on every form.
//!
//! Every node owns its children outright and is never mutated after
//! construction.

mod dump;


use crate::types::ShaderType;

/// A function after elaboration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedFunction {
    pub name: String,
    pub params: Vec<TypedParam>,
    /// Synthesized type of the returned expression, `None` for a bare `return`.
    pub result: Option<ShaderType>,
    pub body: Vec<TypedStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedParam {
    pub name: String,
    pub ty: ShaderType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedStatement {
    Assignment {
        lhs: AssignTarget,
        op: AssignOp,
        rhs: TypedExpression,
    },
    Increment(TypedExpression),
    Decrement(TypedExpression),
    Return(Option<TypedExpression>),
}

impl TypedStatement {
    pub fn name(&self) -> &'static str {
        match self {
            TypedStatement::Assignment { .. } => "Assignment",
            TypedStatement::Increment(_) => "Increment",
            TypedStatement::Decrement(_) => "Decrement",
            TypedStatement::Return(_) => "Return",
        }
    }
}

/// Left-hand side of an assignment. `Phony` is WGSL's `_ = expr`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Phony,
    Expression(TypedExpression),
}

/// `=` and the compound assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    ShiftRight,
    ShiftLeft,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::ShiftRight => ">>=",
            AssignOp::ShiftLeft => "<<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpression {
    BoolLiteral(bool),
    I32Literal(i32),
    U32Literal(u32),
    F32Literal(f32),
    /// Stored widened; WGSL `f16` has no native Rust counterpart.
    F16Literal(f32),
    Unary {
        op: UnaryOp,
        operand: Box<TypedExpression>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<TypedExpression>,
        rhs: Box<TypedExpression>,
    },
    FunctionCall {
        callee: String,
        arguments: Vec<TypedExpression>,
    },
    Identifier(String),
}

impl TypedExpression {
    pub fn binary(op: BinaryOp, lhs: TypedExpression, rhs: TypedExpression) -> Self {
        TypedExpression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: TypedExpression) -> Self {
        TypedExpression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<TypedExpression>) -> Self {
        TypedExpression::FunctionCall {
            callee: callee.into(),
            arguments,
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        TypedExpression::Identifier(name.into())
    }

    /// Node name used in diagnostics and dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TypedExpression::BoolLiteral(_) => "BoolLiteral",
            TypedExpression::I32Literal(_) => "I32Literal",
            TypedExpression::U32Literal(_) => "U32Literal",
            TypedExpression::F32Literal(_) => "F32Literal",
            TypedExpression::F16Literal(_) => "F16Literal",
            TypedExpression::Unary { op, .. } => op.name(),
            TypedExpression::Binary { op, .. } => op.name(),
            TypedExpression::FunctionCall { .. } => "FunctionCall",
            TypedExpression::Identifier(_) => "Identifier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    LogicalNegation,
    Negation,
    BitwiseComplement,
}

impl UnaryOp {
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::LogicalNegation => "LogicalNegation",
            UnaryOp::Negation => "Negation",
            UnaryOp::BitwiseComplement => "BitwiseComplement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    ShortCircuitingOr,
    ShortCircuitingAnd,
    LogicalOr,
    LogicalAnd,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Equality,
    Inequality,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    BitwiseOr,
    BitwiseAnd,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::ShortCircuitingOr => "ShortCircuitingOr",
            BinaryOp::ShortCircuitingAnd => "ShortCircuitingAnd",
            BinaryOp::LogicalOr => "LogicalOr",
            BinaryOp::LogicalAnd => "LogicalAnd",
            BinaryOp::Addition => "Addition",
            BinaryOp::Subtraction => "Subtraction",
            BinaryOp::Multiplication => "Multiplication",
            BinaryOp::Division => "Division",
            BinaryOp::Remainder => "Remainder",
            BinaryOp::Equality => "Equality",
            BinaryOp::Inequality => "Inequality",
            BinaryOp::LessThan => "LessThan",
            BinaryOp::GreaterThan => "GreaterThan",
            BinaryOp::LessThanOrEqual => "LessThanOrEqual",
            BinaryOp::GreaterThanOrEqual => "GreaterThanOrEqual",
            BinaryOp::BitwiseOr => "BitwiseOr",
            BinaryOp::BitwiseAnd => "BitwiseAnd",
            BinaryOp::BitwiseXor => "BitwiseXor",
            BinaryOp::ShiftLeft => "ShiftLeft",
            BinaryOp::ShiftRight => "ShiftRight",
        }
    }
}
