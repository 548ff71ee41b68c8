//! Log setup: tracing events go to stderr, reports go to stdout.
use tracing_subscriber::EnvFilter;

/// Filter directive variable, e.g. `NUMSTAT_LOG=numstat_stats=debug`
pub const LOG_ENV: &str = "NUMSTAT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// `-v` and `-vv` override whatever `NUMSTAT_LOG` says.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    }
}

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
