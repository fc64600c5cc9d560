//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod commands;
pub mod output;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "appsearch",
    version,
    about = "Build App Search request parameters from platform search requests"
)]
pub struct Cli {
    /// Config file (replaces global and project config discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root holding appsearch.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable output: JSON results, JSON errors and JSON log lines
    #[arg(long, global = true)]
    pub robot: bool,

    #[command(subcommand)]
    pub command: Commands,
}
