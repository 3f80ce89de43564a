#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;
mod logging;

use cli::{CheckParams, CompileParams, IrParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            logging::init(params.verbose);
            commands::compile::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into());
        }
        Some(("ir", m)) => {
            let params = IrParams::from_matches(m);
            logging::init(params.verbose);
            commands::ir::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
