//! Builtin function registry.
//!
//! The only vocabulary of callable names the elaborator knows. Initialized on
//! first use and never mutated afterwards, so any number of compilations can
//! read it concurrently.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::types::{ScalarKind, ShaderType, all_scalars};

/// Parameter and result types of a builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinSignature {
    pub params: Vec<ShaderType>,
    pub result: ShaderType,
}

impl BuiltinSignature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

static BUILTINS: LazyLock<IndexMap<&'static str, BuiltinSignature>> = LazyLock::new(|| {
    // Value constructors: one argument of any scalar kind, converted to the
    // kind named by the function.
    ScalarKind::CONCRETE
        .into_iter()
        .map(|kind| {
            let signature = BuiltinSignature {
                params: vec![all_scalars()],
                result: ShaderType::Scalar(kind),
            };
            (kind.as_str(), signature)
        })
        .collect()
});

/// Look up a builtin by name.
pub fn builtin(name: &str) -> Option<&'static BuiltinSignature> {
    BUILTINS.get(name)
}

/// All builtins, in declaration order.
pub fn builtins() -> impl Iterator<Item = (&'static str, &'static BuiltinSignature)> {
    BUILTINS.iter().map(|(name, sig)| (*name, sig))
}
