//! CLI module graph.

pub mod command;
pub mod exemplo;
pub mod menu;
pub mod output;
pub mod paths;

use crate::error::Result;
use command::Cli;

/// Dispatch the parsed invocation.
pub fn execute(cli: &Cli) -> Result<()> {
    if cli.exemplo {
        exemplo::execute(&cli.db)
    } else {
        menu::run(&cli.db)
    }
}
