//! Type lattice: scalar kinds, unions, and the subtype relation.

use std::fmt;

/// WGSL scalar kinds.
///
/// `AbstractInt` and `AbstractFloat` only describe literals that have not been
/// given a concrete kind yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    AbstractInt,
    AbstractFloat,
    Bool,
    I32,
    U32,
    F32,
    F16,
}

impl ScalarKind {
    /// The concrete scalars, in declaration order.
    pub const CONCRETE: [ScalarKind; 5] = [
        ScalarKind::Bool,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::F32,
        ScalarKind::F16,
    ];

    /// WGSL spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::AbstractInt => "AbstractInt",
            ScalarKind::AbstractFloat => "AbstractFloat",
            ScalarKind::Bool => "bool",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::F32 => "f32",
            ScalarKind::F16 => "f16",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type in expected or synthesized position.
///
/// Synthesis only ever yields `Scalar`; `Union` appears as an expected type,
/// e.g. the parameter of a cast builtin that accepts any scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Scalar(ScalarKind),
    Union(Vec<ShaderType>),
}

impl ShaderType {
    pub const BOOL: ShaderType = ShaderType::Scalar(ScalarKind::Bool);
    pub const I32: ShaderType = ShaderType::Scalar(ScalarKind::I32);
    pub const U32: ShaderType = ShaderType::Scalar(ScalarKind::U32);
    pub const F32: ShaderType = ShaderType::Scalar(ScalarKind::F32);
    pub const F16: ShaderType = ShaderType::Scalar(ScalarKind::F16);

    pub fn union(variants: impl IntoIterator<Item = ShaderType>) -> Self {
        ShaderType::Union(variants.into_iter().collect())
    }
}

impl From<ScalarKind> for ShaderType {
    fn from(kind: ScalarKind) -> Self {
        ShaderType::Scalar(kind)
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Scalar(kind) => write!(f, "{kind}"),
            ShaderType::Union(variants) => {
                for (i, variant) in variants.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{variant}")?;
                }
                Ok(())
            }
        }
    }
}

/// The union of every concrete scalar: `bool | i32 | u32 | f32 | f16`.
pub fn all_scalars() -> ShaderType {
    ShaderType::union(ScalarKind::CONCRETE.map(ShaderType::Scalar))
}

/// Whether a value of type `candidate` may be used where `expected` is required.
///
/// Scalars are only subtypes of themselves. A union on the right accepts any
/// subtype of one of its variants; a union on the left is a subtype only if
/// all of its variants are.
pub fn subtype(candidate: &ShaderType, expected: &ShaderType) -> bool {
    match (candidate, expected) {
        (ShaderType::Scalar(a), ShaderType::Scalar(b)) => a == b,
        (ShaderType::Union(variants), _) => variants.iter().all(|v| subtype(v, expected)),
        (ShaderType::Scalar(_), ShaderType::Union(variants)) => {
            variants.iter().any(|v| subtype(candidate, v))
        }
    }
}
