use clap::Parser;
use tracing::info;

use dioptre::cli::command::Cli;
use dioptre::cli::output::{self, OutputConfig};
use dioptre::{cli, logging};

fn main() {
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    logging::init(cli.verbose);
    info!(db = %cli.db.display(), "dioptre starting");

    if let Err(err) = cli::execute(&cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
