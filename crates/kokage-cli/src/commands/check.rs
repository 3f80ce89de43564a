use std::path::PathBuf;

use super::run_common::{exit_with, load_or_exit};

pub struct CheckArgs {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let loaded = load_or_exit(&args.tree_path, args.source_file.as_deref());

    // Emission can fail on its own, so run it too.
    if let Err(e) = loaded.compiler.emit() {
        exit_with(e, &loaded, args.color);
    }

    // Silent on success (like cargo check)
}
