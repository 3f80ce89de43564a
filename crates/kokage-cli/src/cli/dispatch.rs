//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use kokage_compiler::KernelConfig;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::ir::IrArgs;

pub struct CompileParams {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub kernel: bool,
    pub entry_point: Option<String>,
    pub workgroup_size: Option<u32>,
    pub group: Option<u32>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            source_file: m.get_one::<PathBuf>("source_file").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            kernel: m.get_flag("kernel"),
            entry_point: m.get_one::<String>("entry_point").cloned(),
            workgroup_size: m.get_one::<u32>("workgroup_size").copied(),
            group: m.get_one::<u32>("group").copied(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }

    fn kernel_config(&self) -> Option<KernelConfig> {
        if !self.kernel {
            return None;
        }
        let mut config = KernelConfig::new();
        if let Some(name) = &self.entry_point {
            config = config.entry_point(name.as_str());
        }
        if let Some(size) = self.workgroup_size {
            config = config.workgroup_size(size);
        }
        if let Some(group) = self.group {
            config = config.group(group);
        }
        Some(config)
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            kernel: p.kernel_config(),
            tree_path: p.tree_path,
            source_file: p.source_file,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            source_file: m.get_one::<PathBuf>("source_file").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            tree_path: p.tree_path,
            source_file: p.source_file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct IrParams {
    pub tree_path: PathBuf,
    pub source_file: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl IrParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: parse_tree_path(m),
            source_file: m.get_one::<PathBuf>("source_file").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<IrParams> for IrArgs {
    fn from(p: IrParams) -> Self {
        Self {
            tree_path: p.tree_path,
            source_file: p.source_file,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_tree_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("tree_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
