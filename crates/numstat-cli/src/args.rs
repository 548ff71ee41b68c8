//! Command line arguments
use clap::{ArgAction, Args, Parser, Subcommand};
use numstat_core::{ModePolicy, NumstatError, RunProfile, SignPolicy, VarianceMode};
use numstat_out::OutputFormat;
use std::path::{Path, PathBuf};

/// Environment variable naming the default profile preset
pub const PROFILE_ENV: &str = "NUMSTAT_PROFILE";

#[derive(Parser, Debug)]
#[command(
    name = "numstat",
    version,
    about = "Descriptive statistics, radix conversion and word counts over line-delimited input"
)]
pub struct Cli {
    /// Profile preset: standard, classic or revised (falls back to $NUMSTAT_PROFILE)
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Load the profile from a YAML file instead of a preset
    #[arg(long, global = true, value_name = "PATH")]
    pub profile_file: Option<PathBuf>,

    /// Directory for result files
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Print the report without writing a result file
    #[arg(long, global = true)]
    pub no_write: bool,

    /// Report format: text or json
    #[arg(long, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count, mean, median, mode, variance and standard deviation
    Stats(StatsArgs),
    /// Binary and hexadecimal form of each integer
    Convert(ConvertArgs),
    /// Word frequency table
    Words(WordsArgs),
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input file, one number per line
    pub file: PathBuf,

    /// population or sample (overrides the profile)
    #[arg(long)]
    pub variance: Option<VarianceMode>,

    /// require-repeat or first-most-frequent (overrides the profile)
    #[arg(long)]
    pub mode_policy: Option<ModePolicy>,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file, one integer per line
    pub file: PathBuf,

    /// twos-complement or sign-magnitude (overrides the profile)
    #[arg(long)]
    pub sign_policy: Option<SignPolicy>,
}

#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Input text file
    pub file: PathBuf,
}

impl Cli {
    /// Profile before per-command overrides.
    ///
    /// `--profile-file` wins over `--profile`, which wins over the
    /// environment preset. With none of them the standard preset is used.
    pub fn base_profile(&self, env_preset: Option<&str>) -> Result<RunProfile, NumstatError> {
        resolve_profile(self.profile_file.as_deref(), self.profile.as_deref(), env_preset)
    }

    /// Profile with the subcommand's flags applied
    pub fn profile(&self, env_preset: Option<&str>) -> Result<RunProfile, NumstatError> {
        let mut profile = self.base_profile(env_preset)?;
        match &self.command {
            Command::Stats(args) => {
                if let Some(variance) = args.variance {
                    profile = profile.with_variance(variance);
                }
                if let Some(policy) = args.mode_policy {
                    profile = profile.with_mode_policy(policy);
                }
            }
            Command::Convert(args) => {
                if let Some(policy) = args.sign_policy {
                    profile = profile.with_sign_policy(policy);
                }
            }
            Command::Words(_) => {}
        }
        Ok(profile)
    }
}

pub fn resolve_profile(
    file: Option<&Path>,
    preset: Option<&str>,
    env_preset: Option<&str>,
) -> Result<RunProfile, NumstatError> {
    if let Some(path) = file {
        return RunProfile::load(path);
    }
    match preset.or(env_preset).filter(|name| !name.trim().is_empty()) {
        Some(name) => RunProfile::for_name(name),
        None => Ok(RunProfile::standard()),
    }
}
