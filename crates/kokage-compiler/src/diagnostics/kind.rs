use kokage_core::BinaryOperator;

use crate::types::ShaderType;

/// Every way a compilation can fail.
///
/// Grouped by the stage that reports them: function extraction, elaboration,
/// emission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    // Extraction
    #[error("expected an expression statement, found {0}")]
    ExpectedExpressionStatement(&'static str),
    #[error("expected a function expression, found {0}")]
    ExpectedFunctionExpression(&'static str),
    #[error("function expression must be named")]
    MissingFunctionName,

    // Elaboration
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),
    #[error("unsupported parameter pattern: {0}")]
    UnsupportedParameter(&'static str),
    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),
    #[error("unsupported expression: {0}")]
    UnsupportedExpression(&'static str),
    #[error("unsupported binary operator `{0}`")]
    UnsupportedOperator(BinaryOperator),
    #[error("unsupported callee: {0}")]
    UnsupportedCallee(&'static str),
    #[error("unsupported literal `{0}`: expected an unsigned 32-bit integer")]
    UnsupportedLiteral(String),
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("function `{function}` expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ShaderType,
        actual: ShaderType,
    },

    // Emission
    #[error("cannot emit {0}")]
    UnsupportedEmission(&'static str),
    #[error("`{0}` is not a valid WGSL identifier")]
    InvalidIdentifier(String),
    #[error("`{0}` collides with a name declared by the kernel")]
    NameCollision(String),
    #[error("invalid kernel configuration: {0}")]
    InvalidKernelConfig(String),
}

impl DiagnosticKind {
    /// Stable identifier of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpectedExpressionStatement(_) => "ExpectedExpressionStatement",
            Self::ExpectedFunctionExpression(_) => "ExpectedFunctionExpression",
            Self::MissingFunctionName => "MissingFunctionName",
            Self::UnsupportedConstruct(_) => "UnsupportedConstruct",
            Self::UnsupportedParameter(_) => "UnsupportedParameter",
            Self::DuplicateParameter(_) => "DuplicateParameter",
            Self::UnsupportedExpression(_) => "UnsupportedExpression",
            Self::UnsupportedOperator(_) => "UnsupportedOperator",
            Self::UnsupportedCallee(_) => "UnsupportedCallee",
            Self::UnsupportedLiteral(_) => "UnsupportedLiteral",
            Self::UnknownIdentifier(_) => "UnknownIdentifier",
            Self::UnknownFunction(_) => "UnknownFunction",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::UnsupportedEmission(_) => "UnsupportedEmission",
            Self::InvalidIdentifier(_) => "InvalidIdentifier",
            Self::NameCollision(_) => "NameCollision",
            Self::InvalidKernelConfig(_) => "InvalidKernelConfig",
        }
    }
}
