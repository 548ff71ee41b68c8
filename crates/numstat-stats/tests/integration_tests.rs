//! Statistics over the shared fixture files, front to back.

use numstat_core::{ExecutionContext, Mode, NumstatError, PipelineRunner, RunProfile, VarianceMode};
use numstat_in::{ClassifyStage, TokenizeLinesStage};
use numstat_stats::StatisticsStage;

fn fixture(name: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    std::fs::read_to_string(workspace_root.join("fixtures").join(name)).unwrap()
}

fn run(name: &str, profile: RunProfile) -> Result<numstat_core::StatisticsResult, NumstatError> {
    let text = fixture(name);
    let ctx = ExecutionContext::new(profile).with_source(name);
    let mut runner = PipelineRunner::new(&ctx, text.as_bytes());
    let tokens = runner.run(&TokenizeLinesStage, text)?;
    let dataset = runner.run(&ClassifyStage::<f64>::new(), tokens)?;
    runner.run(&StatisticsStage, dataset)
}

#[test]
fn test_basic_file() {
    let stats = run("stats_basic.txt", RunProfile::standard()).unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.median, 2.0);
    assert_eq!(stats.mode, Mode::Value(2.0));
    assert_eq!(stats.variance, 0.5);
}

#[test]
fn test_mixed_file_counts_every_token() {
    let stats = run("stats_mixed.txt", RunProfile::standard()).unwrap();
    assert_eq!(stats.count, 9);
    assert!((stats.mean - 1024.25 / 6.0).abs() < 1e-9);
    assert_eq!(stats.median, 5.875);
    assert_eq!(stats.mode, Mode::Value(4.5));
}

#[test]
fn test_unique_file_by_profile() {
    let strict = run("stats_unique.txt", RunProfile::standard()).unwrap();
    assert_eq!(strict.mode, Mode::NoMode);

    let classic = run("stats_unique.txt", RunProfile::classic()).unwrap();
    assert_eq!(classic.mode, Mode::Value(5.0));
}

#[test]
fn test_revised_profile_uses_sample_variance() {
    let stats = run("stats_basic.txt", RunProfile::revised()).unwrap();
    assert_eq!(stats.variance_mode, VarianceMode::Sample);
    assert!((stats.variance - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(stats.std_dev, stats.variance.sqrt());
}

#[test]
fn test_all_invalid_file() {
    assert_eq!(
        run("stats_all_invalid.txt", RunProfile::standard()),
        Err(NumstatError::EmptyDataset)
    );
}
