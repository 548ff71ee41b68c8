//! numstat command line
//!
//! `numstat stats|convert|words <FILE>` runs one pipeline, prints the report
//! to stdout and saves it as a result file in `--output-dir`.
pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Command};
pub use commands::{execute, OutputOptions};

/// Run against the process stdout
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}
