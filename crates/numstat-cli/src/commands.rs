//! Subcommand pipelines
//!
//! Every command runs tokenize → classify → engine through a
//! `PipelineRunner`, so the report carries stage timings and the input
//! digest. Elapsed time starts before the input file is read. Invalid
//! tokens are copied out before the engine stage consumes the dataset.

use anyhow::Context;
use numstat_convert::ConversionStage;
use numstat_core::{
    ConversionRow, ExecutionContext, NumstatError, PipelineRunner, RunProfile, RunReport,
    StatisticsResult, WordCountResult,
};
use numstat_in::{ClassifyStage, TokenizeLinesStage, TokenizeWordsStage};
use numstat_out::{render, result_file_name, write_report, OutputFormat, Report};
use numstat_stats::StatisticsStage;
use numstat_words::WordCountStage;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::args::{Cli, Command, PROFILE_ENV};

/// Where and how a finished report goes
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub write_file: bool,
}

impl OutputOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            output_dir: cli.output_dir.clone(),
            write_file: !cli.no_write,
        }
    }
}

/// Run the parsed command, echoing the report to `out`
pub fn execute(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let env_preset = std::env::var(PROFILE_ENV).ok();
    let profile = cli
        .profile(env_preset.as_deref())
        .context("could not resolve run profile")?;
    let options = OutputOptions::from_cli(cli);
    debug!(profile = %profile.name, variance = %profile.variance, mode_policy = %profile.mode_policy,
        sign_policy = %profile.sign_policy, "resolved profile");

    let written = match &cli.command {
        Command::Stats(args) => {
            let (ctx, text, started) = prepare(&args.file, profile)?;
            let report = run_statistics(&ctx, text, started)
                .with_context(|| format!("statistics failed for {}", args.file.display()))?;
            emit(&report, &options, out)?
        }
        Command::Convert(args) => {
            let (ctx, text, started) = prepare(&args.file, profile)?;
            let report = run_conversion(&ctx, text, started)
                .with_context(|| format!("conversion failed for {}", args.file.display()))?;
            emit(&report, &options, out)?
        }
        Command::Words(args) => {
            let (ctx, text, started) = prepare(&args.file, profile)?;
            let report = run_word_count(&ctx, text, started)
                .with_context(|| format!("word count failed for {}", args.file.display()))?;
            emit(&report, &options, out)?
        }
    };

    if let Some(path) = written {
        info!(path = %path.display(), "result saved");
    }
    Ok(())
}

fn prepare(path: &Path, profile: RunProfile) -> anyhow::Result<(ExecutionContext, String, Instant)> {
    let started = Instant::now();
    let text = read_input(path)?;
    let ctx = ExecutionContext::new(profile).with_source(path.display().to_string());
    info!(run_id = %ctx.run_id, source = %path.display(), bytes = text.len(), "starting run");
    Ok((ctx, text, started))
}

pub fn read_input(path: &Path) -> Result<String, NumstatError> {
    std::fs::read_to_string(path).map_err(|e| NumstatError::io(path.display().to_string(), e))
}

pub fn run_statistics(
    ctx: &ExecutionContext,
    text: String,
    started: Instant,
) -> Result<RunReport<StatisticsResult>, NumstatError> {
    let mut runner = PipelineRunner::new(ctx, text.as_bytes()).started_at(started);
    let tokens = runner.run(&TokenizeLinesStage, text)?;
    let dataset = runner.run(&ClassifyStage::<f64>::new(), tokens)?;
    let invalid = dataset.invalid().to_vec();
    let stats = runner.run(&StatisticsStage, dataset)?;
    Ok(runner.finish(invalid, stats))
}

pub fn run_conversion(
    ctx: &ExecutionContext,
    text: String,
    started: Instant,
) -> Result<RunReport<Vec<ConversionRow>>, NumstatError> {
    let mut runner = PipelineRunner::new(ctx, text.as_bytes()).started_at(started);
    let tokens = runner.run(&TokenizeLinesStage, text)?;
    let dataset = runner.run(&ClassifyStage::<i64>::new(), tokens)?;
    let invalid = dataset.invalid().to_vec();
    let rows = runner.run(&ConversionStage, dataset)?;
    Ok(runner.finish(invalid, rows))
}

pub fn run_word_count(
    ctx: &ExecutionContext,
    text: String,
    started: Instant,
) -> Result<RunReport<WordCountResult>, NumstatError> {
    let mut runner = PipelineRunner::new(ctx, text.as_bytes()).started_at(started);
    let words = runner.run(&TokenizeWordsStage, text)?;
    let result = runner.run(&WordCountStage, words)?;
    Ok(runner.finish(Vec::new(), result))
}

/// Print the report, then write the result file unless disabled.
/// Returns the written path.
pub fn emit<T: Report>(
    report: &RunReport<T>,
    options: &OutputOptions,
    out: &mut dyn Write,
) -> anyhow::Result<Option<PathBuf>> {
    let rendered = render(report, options.format)?;
    out.write_all(rendered.as_bytes()).context("failed to write report to stdout")?;
    out.flush()?;

    if !options.write_file {
        return Ok(None);
    }
    let file_name = result_file_name::<T>(options.format);
    let path = write_report(&options.output_dir, &file_name, &rendered)?;
    Ok(Some(path))
}
