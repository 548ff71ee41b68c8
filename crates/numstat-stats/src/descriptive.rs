//! Central tendency and dispersion over a non-empty slice.
//!
//! All sums run in input order so results are reproducible bit for bit.
//! Callers guarantee `data` is non-empty and finite.

use numstat_core::{NumstatError, VarianceMode};

/// Arithmetic mean, plain left-to-right summation.
pub fn mean(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for &x in data {
        total += x;
    }
    total / data.len() as f64
}

/// Median of a sorted copy; `data` itself is left untouched.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sum of squared deviations from `mean`, divided per `mode`.
///
/// # Errors
/// `SampleVarianceUndefined` when `mode` is `Sample` and there is one value.
pub fn variance(data: &[f64], mean: f64, mode: VarianceMode) -> Result<f64, NumstatError> {
    let denominator = match mode {
        VarianceMode::Population => data.len(),
        VarianceMode::Sample if data.len() < 2 => {
            return Err(NumstatError::SampleVarianceUndefined { count: data.len() });
        }
        VarianceMode::Sample => data.len() - 1,
    };

    let mut total = 0.0;
    for &x in data {
        let d = x - mean;
        total += d * d;
    }
    Ok(total / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[-4.0]), -4.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_leaves_input_alone() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = median(&data);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_variance_denominators() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data);
        assert_eq!(variance(&data, m, VarianceMode::Population).unwrap(), 4.0);
        let sample = variance(&data, m, VarianceMode::Sample).unwrap();
        assert!((sample - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_of_one_value() {
        assert_eq!(
            variance(&[5.0], 5.0, VarianceMode::Sample),
            Err(NumstatError::SampleVarianceUndefined { count: 1 })
        );
        assert_eq!(variance(&[5.0], 5.0, VarianceMode::Population), Ok(0.0));
    }
}
