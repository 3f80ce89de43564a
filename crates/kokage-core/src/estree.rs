//! ESTree node types.
//!
//! Every node kind acorn can produce for ES2024 deserializes. Kinds the
//! compiler has no rule for are kept as [`Node`], which records only the
//! span, so they can be reported precisely rather than rejected while
//! reading the JSON.

use std::fmt;

use serde::Deserialize;

/// Source offsets of a node, as reported by the parser.
///
/// acorn counts UTF-16 code units, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Anything that knows where it came from in the host source.
pub trait Spanned {
    fn span(&self) -> Span;
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                fn span(&self) -> Span {
                    Span::new(self.start, self.end)
                }
            }
        )*
    };
}

impl_spanned!(
    Node,
    Program,
    Function,
    Identifier,
    Literal,
    BinaryExpression,
    CallExpression,
    BlockStatement,
    ExpressionStatement,
    ReturnStatement,
);

// ============================================================================
// Roots
// ============================================================================

/// Top-level node handed to the compiler.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Root {
    Program(Program),
    FunctionExpression(Box<Function>),
}

impl Spanned for Root {
    fn span(&self) -> Span {
        match self {
            Root::Program(p) => p.span(),
            Root::FunctionExpression(f) => f.span(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
    #[serde(rename = "sourceType", default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

/// A node the compiler does not look inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

// ============================================================================
// Functions and patterns
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Function {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(default)]
    pub generator: bool,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

/// Binding position (function parameters).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ObjectPattern(Node),
    ArrayPattern(Node),
    RestElement(Node),
    AssignmentPattern(Node),
    MemberExpression(Node),
}

impl Pattern {
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Identifier(_) => "Identifier",
            Pattern::ObjectPattern(_) => "ObjectPattern",
            Pattern::ArrayPattern(_) => "ArrayPattern",
            Pattern::RestElement(_) => "RestElement",
            Pattern::AssignmentPattern(_) => "AssignmentPattern",
            Pattern::MemberExpression(_) => "MemberExpression",
        }
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        match self {
            Pattern::Identifier(id) => id.span(),
            Pattern::ObjectPattern(n)
            | Pattern::ArrayPattern(n)
            | Pattern::RestElement(n)
            | Pattern::AssignmentPattern(n)
            | Pattern::MemberExpression(n) => n.span(),
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    ReturnStatement(ReturnStatement),
    BlockStatement(BlockStatement),
    EmptyStatement(Node),
    DebuggerStatement(Node),
    WithStatement(Node),
    LabeledStatement(Node),
    BreakStatement(Node),
    ContinueStatement(Node),
    IfStatement(Node),
    SwitchStatement(Node),
    ThrowStatement(Node),
    TryStatement(Node),
    WhileStatement(Node),
    DoWhileStatement(Node),
    ForStatement(Node),
    ForInStatement(Node),
    ForOfStatement(Node),
    FunctionDeclaration(Node),
    VariableDeclaration(Node),
    ClassDeclaration(Node),
    ImportDeclaration(Node),
    ExportNamedDeclaration(Node),
    ExportDefaultDeclaration(Node),
    ExportAllDeclaration(Node),
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::ExpressionStatement(_) => "ExpressionStatement",
            Statement::ReturnStatement(_) => "ReturnStatement",
            Statement::BlockStatement(_) => "BlockStatement",
            Statement::EmptyStatement(_) => "EmptyStatement",
            Statement::DebuggerStatement(_) => "DebuggerStatement",
            Statement::WithStatement(_) => "WithStatement",
            Statement::LabeledStatement(_) => "LabeledStatement",
            Statement::BreakStatement(_) => "BreakStatement",
            Statement::ContinueStatement(_) => "ContinueStatement",
            Statement::IfStatement(_) => "IfStatement",
            Statement::SwitchStatement(_) => "SwitchStatement",
            Statement::ThrowStatement(_) => "ThrowStatement",
            Statement::TryStatement(_) => "TryStatement",
            Statement::WhileStatement(_) => "WhileStatement",
            Statement::DoWhileStatement(_) => "DoWhileStatement",
            Statement::ForStatement(_) => "ForStatement",
            Statement::ForInStatement(_) => "ForInStatement",
            Statement::ForOfStatement(_) => "ForOfStatement",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::ClassDeclaration(_) => "ClassDeclaration",
            Statement::ImportDeclaration(_) => "ImportDeclaration",
            Statement::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Statement::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
            Statement::ExportAllDeclaration(_) => "ExportAllDeclaration",
        }
    }
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::ExpressionStatement(s) => s.span(),
            Statement::ReturnStatement(s) => s.span(),
            Statement::BlockStatement(s) => s.span(),
            Statement::EmptyStatement(n)
            | Statement::DebuggerStatement(n)
            | Statement::WithStatement(n)
            | Statement::LabeledStatement(n)
            | Statement::BreakStatement(n)
            | Statement::ContinueStatement(n)
            | Statement::IfStatement(n)
            | Statement::SwitchStatement(n)
            | Statement::ThrowStatement(n)
            | Statement::TryStatement(n)
            | Statement::WhileStatement(n)
            | Statement::DoWhileStatement(n)
            | Statement::ForStatement(n)
            | Statement::ForInStatement(n)
            | Statement::ForOfStatement(n)
            | Statement::FunctionDeclaration(n)
            | Statement::VariableDeclaration(n)
            | Statement::ClassDeclaration(n)
            | Statement::ImportDeclaration(n)
            | Statement::ExportNamedDeclaration(n)
            | Statement::ExportDefaultDeclaration(n)
            | Statement::ExportAllDeclaration(n) => n.span(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    BinaryExpression(BinaryExpression),
    CallExpression(CallExpression),
    FunctionExpression(Box<Function>),
    ThisExpression(Node),
    Super(Node),
    PrivateIdentifier(Node),
    ArrayExpression(Node),
    ObjectExpression(Node),
    ArrowFunctionExpression(Node),
    ClassExpression(Node),
    TemplateLiteral(Node),
    TaggedTemplateExpression(Node),
    MemberExpression(Node),
    MetaProperty(Node),
    NewExpression(Node),
    UpdateExpression(Node),
    AwaitExpression(Node),
    UnaryExpression(Node),
    LogicalExpression(Node),
    ConditionalExpression(Node),
    YieldExpression(Node),
    AssignmentExpression(Node),
    SequenceExpression(Node),
    ChainExpression(Node),
    ImportExpression(Node),
    ParenthesizedExpression(Node),
    SpreadElement(Node),
}

impl Expression {
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::Literal(_) => "Literal",
            Expression::BinaryExpression(_) => "BinaryExpression",
            Expression::CallExpression(_) => "CallExpression",
            Expression::FunctionExpression(_) => "FunctionExpression",
            Expression::ThisExpression(_) => "ThisExpression",
            Expression::Super(_) => "Super",
            Expression::PrivateIdentifier(_) => "PrivateIdentifier",
            Expression::ArrayExpression(_) => "ArrayExpression",
            Expression::ObjectExpression(_) => "ObjectExpression",
            Expression::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Expression::ClassExpression(_) => "ClassExpression",
            Expression::TemplateLiteral(_) => "TemplateLiteral",
            Expression::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
            Expression::MemberExpression(_) => "MemberExpression",
            Expression::MetaProperty(_) => "MetaProperty",
            Expression::NewExpression(_) => "NewExpression",
            Expression::UpdateExpression(_) => "UpdateExpression",
            Expression::AwaitExpression(_) => "AwaitExpression",
            Expression::UnaryExpression(_) => "UnaryExpression",
            Expression::LogicalExpression(_) => "LogicalExpression",
            Expression::ConditionalExpression(_) => "ConditionalExpression",
            Expression::YieldExpression(_) => "YieldExpression",
            Expression::AssignmentExpression(_) => "AssignmentExpression",
            Expression::SequenceExpression(_) => "SequenceExpression",
            Expression::ChainExpression(_) => "ChainExpression",
            Expression::ImportExpression(_) => "ImportExpression",
            Expression::ParenthesizedExpression(_) => "ParenthesizedExpression",
            Expression::SpreadElement(_) => "SpreadElement",
        }
    }
}

impl Spanned for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::Identifier(e) => e.span(),
            Expression::Literal(e) => e.span(),
            Expression::BinaryExpression(e) => e.span(),
            Expression::CallExpression(e) => e.span(),
            Expression::FunctionExpression(e) => e.span(),
            Expression::ThisExpression(n)
            | Expression::Super(n)
            | Expression::PrivateIdentifier(n)
            | Expression::ArrayExpression(n)
            | Expression::ObjectExpression(n)
            | Expression::ArrowFunctionExpression(n)
            | Expression::ClassExpression(n)
            | Expression::TemplateLiteral(n)
            | Expression::TaggedTemplateExpression(n)
            | Expression::MemberExpression(n)
            | Expression::MetaProperty(n)
            | Expression::NewExpression(n)
            | Expression::UpdateExpression(n)
            | Expression::AwaitExpression(n)
            | Expression::UnaryExpression(n)
            | Expression::LogicalExpression(n)
            | Expression::ConditionalExpression(n)
            | Expression::YieldExpression(n)
            | Expression::AssignmentExpression(n)
            | Expression::SequenceExpression(n)
            | Expression::ChainExpression(n)
            | Expression::ImportExpression(n)
            | Expression::ParenthesizedExpression(n)
            | Expression::SpreadElement(n) => n.span(),
        }
    }
}

/// A literal as acorn reports it: `value` is whatever JSON the parser
/// serialized (number, string, bool, null, or `{}` for regular expressions).
#[derive(Debug, Clone, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub regex: Option<serde_json::Value>,
    #[serde(default)]
    pub bigint: Option<String>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

impl Literal {
    /// The numeric value, if this is a plain number literal.
    pub fn number(&self) -> Option<f64> {
        if self.regex.is_some() || self.bigint.is_some() {
            return None;
        }
        self.value.as_f64()
    }

    /// Source text of the literal, falling back to its JSON value.
    pub fn text(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => self.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
}

/// Operators of `BinaryExpression` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "**")]
    Exp,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    InstanceOf,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::StrictNotEq => "!==",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::UShr => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Exp => "**",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::In => "in",
            BinaryOperator::InstanceOf => "instanceof",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
