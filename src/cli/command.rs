//! Command-line interface definitions.
//!
//! Defines the CLI structure for dioptre using `clap`. There are no
//! subcommands: a bare invocation opens the interactive menu, and
//! `--exemplo` runs the batch example insertion instead.

use clap::Parser;
use std::path::PathBuf;

use super::paths;

/// Manual record insertion for the optical shop database
#[derive(Parser, Debug)]
#[command(name = "dioptre")]
#[command(version)]
pub struct Cli {
    /// Insert the built-in example records and exit
    #[arg(long)]
    pub exemplo: bool,

    /// Path to the SQLite database file
    #[arg(long, default_value_os_t = paths::default_database())]
    pub db: PathBuf,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
