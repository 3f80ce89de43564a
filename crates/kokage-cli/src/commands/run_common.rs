//! Shared steps of every command: load the tree, report failures.

use std::path::Path;

use kokage_compiler::Error;

use super::tree_loader::{LoadedTree, load_tree};

/// Load the tree or exit with status 1.
pub fn load_or_exit(tree_path: &Path, source_file: Option<&Path>) -> LoadedTree {
    match load_tree(tree_path, source_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a compilation failure and exit with status 1.
///
/// Diagnostics get a source snippet when the host source was supplied.
pub fn exit_with(err: Error, loaded: &LoadedTree, color: bool) -> ! {
    let Some(diag) = err.diagnostic() else {
        eprintln!("error: {}", err);
        std::process::exit(1);
    };

    let mut printer = diag.printer().colored(color);
    if let Some(source) = &loaded.source {
        printer = printer.source(&source.text).path(&source.path);
    }
    eprintln!("{}", printer.render());
    std::process::exit(1);
}
