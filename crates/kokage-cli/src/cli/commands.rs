//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add the flags every command accepts.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(tree_path_arg())
        .arg(source_file_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kokage")
        .about("Compile ESTree function bodies to WGSL")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(ir_command())
}

/// Compile a function to WGSL.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a function to WGSL")
        .after_help(
            r#"EXAMPLES:
  kokage compile f.json                          # WGSL function
  kokage compile f.json --source f.js            # snippets in diagnostics
  kokage compile f.json --kernel -o f.wgsl       # full compute module
  kokage compile - --kernel --workgroup-size 64  # tree from stdin"#,
        )
        .arg(output_file_arg())
        .arg(kernel_arg())
        .arg(entry_point_arg())
        .arg(workgroup_size_arg())
        .arg(group_arg());

    with_common_args(cmd)
}

/// Validate a function without emitting anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that a function compiles")
        .after_help(
            r#"EXAMPLES:
  kokage check f.json                # silent on success
  kokage check f.json --source f.js  # snippets in diagnostics"#,
        );

    with_common_args(cmd)
}

/// Show the typed IR of a function.
pub fn ir_command() -> Command {
    let cmd = Command::new("ir")
        .about("Show the typed IR of a function")
        .after_help(
            r#"EXAMPLES:
  kokage ir f.json
  kokage ir f.json -vv  # with elaboration steps on stderr"#,
        );

    with_common_args(cmd)
}
