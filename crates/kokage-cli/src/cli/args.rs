//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// ESTree JSON file (positional, "-" for stdin).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("TREE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("ESTree JSON of the function (use \"-\" for stdin)")
}

/// Host source the tree was parsed from (--source).
pub fn source_file_arg() -> Arg {
    Arg::new("source_file")
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Host source file, for diagnostics with snippets")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Wrap the function in a compute kernel (--kernel).
pub fn kernel_arg() -> Arg {
    Arg::new("kernel")
        .long("kernel")
        .action(ArgAction::SetTrue)
        .help("Emit a compute kernel with storage bindings around the function")
}

/// Compute entry point name (--entry-point).
pub fn entry_point_arg() -> Arg {
    Arg::new("entry_point")
        .long("entry-point")
        .value_name("NAME")
        .requires("kernel")
        .help("Name of the @compute entry point (default: compute_main)")
}

/// Workgroup size (--workgroup-size).
pub fn workgroup_size_arg() -> Arg {
    Arg::new("workgroup_size")
        .long("workgroup-size")
        .value_name("N")
        .requires("kernel")
        .value_parser(value_parser!(u32))
        .help("X dimension of @workgroup_size (default: 1)")
}

/// Bind group of the kernel buffers (--group).
pub fn group_arg() -> Arg {
    Arg::new("group")
        .long("group")
        .value_name("N")
        .requires("kernel")
        .value_parser(value_parser!(u32))
        .help("Bind group of the storage buffers (default: 0)")
}
