use std::fs;
use std::io::{self, Read};
use std::path::Path;

use kokage_compiler::Compiler;

/// Failure to obtain a compilable tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("{path}: {source}")]
    Tree {
        path: String,
        source: kokage_compiler::Error,
    },
}

/// A tree ready to compile, plus the host source when one was given.
pub struct LoadedTree {
    pub compiler: Compiler,
    pub source: Option<SourceFile>,
}

pub struct SourceFile {
    pub path: String,
    pub text: String,
}

pub fn load_tree(tree_path: &Path, source_file: Option<&Path>) -> Result<LoadedTree, LoadError> {
    let (json, tree_name) = if tree_path.as_os_str() == "-" {
        (read_stdin()?, "<stdin>".to_string())
    } else {
        (read_file(tree_path)?, tree_path.display().to_string())
    };
    tracing::debug!(tree = %tree_name, bytes = json.len(), "loaded tree");

    let compiler = Compiler::from_json(&json).map_err(|source| LoadError::Tree {
        path: tree_name,
        source,
    })?;

    let source = source_file
        .map(|path| {
            read_file(path).map(|text| SourceFile {
                path: path.display().to_string(),
                text,
            })
        })
        .transpose()?;

    Ok(LoadedTree { compiler, source })
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })
}
