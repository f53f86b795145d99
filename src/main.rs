mod cli;
mod combine_cmd;
mod config;
mod convert;
mod estimate_cmd;
mod logging;
mod overlap_cmd;
mod report;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Estimate(args) => estimate_cmd::run(args),
        Command::Overlap(args) => overlap_cmd::run(args),
        Command::Combine(args) => combine_cmd::run(args),
    }
}
