//! Numstat Stats: descriptive statistics over a float dataset
//!
//! Produces count, mean, median, mode, variance and standard deviation in
//! one call. Two choices are explicit options rather than baked in:
//!
//! - the variance denominator (`n` or `n - 1`), see [`VarianceMode`]
//! - whether all-unique data has a mode, see [`ModePolicy`]
//!
//! Standard deviation is always the square root of the variance reported
//! next to it, so the two never disagree on the denominator.
//!
//! # Example
//!
//! ```
//! use numstat_stats::{compute_statistics, StatsOptions};
//! use numstat_core::{Mode, VarianceMode};
//!
//! let stats = compute_statistics(&[1.0, 2.0, 2.0, 3.0], StatsOptions::new(VarianceMode::Population)).unwrap();
//! assert_eq!(stats.mean, 2.0);
//! assert_eq!(stats.mode, Mode::Value(2.0));
//! assert_eq!(stats.variance, 0.5);
//! ```

pub mod descriptive;
pub mod frequency;

pub use frequency::FrequencyTable;
pub use numstat_core::{ModePolicy, VarianceMode};

use numstat_core::{Dataset, ExecutionContext, NumstatError, Stage, StatisticsResult};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub variance: VarianceMode,
    pub mode_policy: ModePolicy,
}

impl StatsOptions {
    /// Options with the default (strict) mode policy
    pub fn new(variance: VarianceMode) -> Self {
        Self {
            variance,
            mode_policy: ModePolicy::default(),
        }
    }

    pub fn with_mode_policy(mut self, mode_policy: ModePolicy) -> Self {
        self.mode_policy = mode_policy;
        self
    }
}

/// Statistics over `values`; `count` is the number of values.
///
/// # Errors
/// - `EmptyDataset` when `values` is empty
/// - `SampleVarianceUndefined` for sample variance over a single value
pub fn compute_statistics(values: &[f64], options: StatsOptions) -> Result<StatisticsResult, NumstatError> {
    summarize(values, values.len(), options)
}

/// Statistics over a dataset's valid values; `count` includes rejected tokens.
pub fn compute_dataset_statistics(
    dataset: &Dataset<f64>,
    options: StatsOptions,
) -> Result<StatisticsResult, NumstatError> {
    summarize(dataset.require_values()?, dataset.total_tokens(), options)
}

fn summarize(values: &[f64], count: usize, options: StatsOptions) -> Result<StatisticsResult, NumstatError> {
    if values.is_empty() {
        return Err(NumstatError::EmptyDataset);
    }

    let mean = descriptive::mean(values);
    let variance = descriptive::variance(values, mean, options.variance)?;
    let median = descriptive::median(values);
    let mode = FrequencyTable::from_values(values).mode(options.mode_policy);

    Ok(StatisticsResult {
        count,
        mean,
        median,
        mode,
        variance,
        std_dev: variance.sqrt(),
        variance_mode: options.variance,
        mode_policy: options.mode_policy,
    })
}

/// Dataset → statistics, options taken from the run profile
#[derive(Debug, Default)]
pub struct StatisticsStage;

impl Stage for StatisticsStage {
    type Input = Dataset<f64>;
    type Output = StatisticsResult;

    fn id(&self) -> &'static str {
        "stats.describe.v1"
    }

    fn run(&self, input: Dataset<f64>, ctx: &ExecutionContext) -> Result<StatisticsResult, NumstatError> {
        let options = StatsOptions::new(ctx.profile.variance).with_mode_policy(ctx.profile.mode_policy);
        debug!(
            run_id = %ctx.run_id,
            values = input.valid_count(),
            variance = %options.variance,
            mode_policy = %options.mode_policy,
            "computing statistics"
        );
        compute_dataset_statistics(&input, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numstat_core::{Mode, RunProfile};
    use numstat_in::read_dataset;

    fn population() -> StatsOptions {
        StatsOptions::new(VarianceMode::Population)
    }

    #[test]
    fn test_reference_scenario() {
        let stats = compute_statistics(&[1.0, 2.0, 2.0, 3.0], population()).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.mode, Mode::Value(2.0));
        assert_eq!(stats.variance, 0.5);
        assert!((stats.std_dev - 0.7071).abs() < 1e-4);
        assert_eq!(stats.std_dev, stats.variance.sqrt());
    }

    #[test]
    fn test_tie_is_first_value() {
        let stats = compute_statistics(&[1.0, 1.0, 2.0, 2.0], population()).unwrap();
        assert_eq!(stats.mode, Mode::Value(1.0));
    }

    #[test]
    fn test_sample_std_dev_matches_its_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = compute_statistics(&data, StatsOptions::new(VarianceMode::Sample)).unwrap();
        assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(stats.std_dev, stats.variance.sqrt());
        assert_eq!(stats.variance_mode, VarianceMode::Sample);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_statistics(&[], population()), Err(NumstatError::EmptyDataset));
    }

    #[test]
    fn test_single_value() {
        let stats = compute_statistics(&[42.0], population()).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.mode, Mode::NoMode);

        assert_eq!(
            compute_statistics(&[42.0], StatsOptions::new(VarianceMode::Sample)),
            Err(NumstatError::SampleVarianceUndefined { count: 1 })
        );
    }

    #[test]
    fn test_dataset_count_includes_invalid_tokens() {
        let dataset = read_dataset::<f64>("1\nx\n2\n2\ny\n3\n");
        let stats = compute_dataset_statistics(&dataset, population()).unwrap();
        assert_eq!(stats.count, 6);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn test_carriage_return_only_file() {
        let dataset = read_dataset::<f64>("1\r2\r2\r3\r");
        let stats = compute_dataset_statistics(&dataset, population()).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.mode, Mode::Value(2.0));
    }

    #[test]
    fn test_stage_uses_profile_options() {
        let ctx = ExecutionContext::new(RunProfile::classic());
        let dataset = read_dataset::<f64>("5\n3\n9\n");
        let stats = StatisticsStage.run(dataset, &ctx).unwrap();
        assert_eq!(stats.mode, Mode::Value(5.0));
        assert_eq!(stats.mode_policy, ModePolicy::FirstMostFrequent);
    }
}
