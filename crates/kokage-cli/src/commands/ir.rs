use std::path::PathBuf;

use super::run_common::{exit_with, load_or_exit};

pub struct IrArgs {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: IrArgs) {
    let loaded = load_or_exit(&args.tree_path, args.source_file.as_deref());

    match loaded.compiler.elaborate() {
        Ok(typed) => print!("{}", typed.dump()),
        Err(e) => exit_with(e, &loaded, args.color),
    }
}
