use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Atropos season-of-death estimator.
#[derive(Parser)]
#[command(
    name = "atropos",
    version,
    about = "Season-of-death estimation from fetal bone measurements"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build death-date calendars and segments for every configured specimen.
    Estimate(EstimateArgs),
    /// Test a hypothesized date interval against the configured specimens.
    Overlap(OverlapArgs),
    /// Fuse specimens believed to belong to one individual.
    Combine(CombineArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "atropos.toml")]
    pub config: PathBuf,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the full 365-day probability arrays in the report.
    #[arg(long)]
    pub full_calendars: bool,
}

/// Arguments for the `overlap` subcommand.
#[derive(clap::Args)]
pub struct OverlapArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "atropos.toml")]
    pub config: PathBuf,

    /// First day of the hypothesized interval (1..=365).
    #[arg(long)]
    pub start_day: Option<u16>,

    /// Last day of the hypothesized interval (1..=365); may precede
    /// start-day to wrap through the new year.
    #[arg(long)]
    pub end_day: Option<u16>,

    /// Specimen labels to analyze (all configured specimens if omitted).
    #[arg(long = "specimen")]
    pub specimens: Vec<String>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `combine` subcommand.
#[derive(clap::Args)]
pub struct CombineArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "atropos.toml")]
    pub config: PathBuf,

    /// Specimen labels to fuse (all configured specimens if omitted).
    #[arg(long = "specimen")]
    pub specimens: Vec<String>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
