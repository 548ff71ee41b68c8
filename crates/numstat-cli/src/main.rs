//! Binary entrypoint for numstat.
use clap::Parser;
use numstat_cli::{logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(version = numstat_core::NUMSTAT_VERSION, "numstat starting");
    run(&cli)
}
