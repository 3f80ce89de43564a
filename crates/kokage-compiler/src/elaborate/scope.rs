use indexmap::IndexMap;

use crate::types::ShaderType;

/// Names visible to the function body, with their declared types.
///
/// Built from the formal parameters of one function and dropped when its
/// elaboration ends.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: IndexMap<String, ShaderType>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the scope unchanged if `name` is taken.
    pub fn declare(&mut self, name: impl Into<String>, ty: ShaderType) -> bool {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return false;
        }
        self.bindings.insert(name, ty);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ShaderType> {
        self.bindings.get(name)
    }
}

impl<S: Into<String>> FromIterator<(S, ShaderType)> for Scope {
    fn from_iter<I: IntoIterator<Item = (S, ShaderType)>>(iter: I) -> Self {
        let mut scope = Scope::new();
        for (name, ty) in iter {
            scope.declare(name, ty);
        }
        scope
    }
}
