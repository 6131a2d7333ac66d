//! routenum - Enumerate HTTP route declarations in a backend project
//!
//! routenum provides:
//! - Backend project detection from package.json
//! - Recursive source file discovery
//! - Heuristic matching of `app.<method>('<path>')` registrations
//! - Sorted console, text and JSON reports

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    core::logging::init_cli_logger(cli.verbose);
    cli::run(cli)
}
