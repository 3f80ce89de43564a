use std::fs;
use std::path::PathBuf;

use kokage_compiler::KernelConfig;

use super::run_common::{exit_with, load_or_exit};

pub struct CompileArgs {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// `Some` when a full compute module is requested.
    pub kernel: Option<KernelConfig>,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let loaded = load_or_exit(&args.tree_path, args.source_file.as_deref());

    let result = match &args.kernel {
        Some(config) => loaded.compiler.emit_kernel(config),
        None => loaded.compiler.emit(),
    };
    let wgsl = match result {
        Ok(wgsl) => wgsl,
        Err(e) => exit_with(e, &loaded, args.color),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &wgsl) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!(output = %path.display(), "wrote WGSL");
        }
        None => print!("{}", wgsl),
    }
}
