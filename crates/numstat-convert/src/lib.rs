//! Numstat Convert: per-value binary and hexadecimal forms
//!
//! Each integer is converted on its own; results come back in input order,
//! one per input value. A value that cannot be written under the active
//! [`SignPolicy`] gets an error on its own result and the rest carry on.
//!
//! # Example
//!
//! ```
//! use numstat_convert::{convert_numbers, SignPolicy};
//!
//! let results = convert_numbers(&[10, -5], SignPolicy::TwosComplement);
//! assert_eq!(results[0].binary.as_deref(), Some("1010"));
//! assert_eq!(results[1].binary.as_deref(), Some("1011"));
//! assert_eq!(results[1].hex.as_deref(), Some("FFFFFFFB"));
//! ```

pub mod radix;

pub use numstat_core::SignPolicy;
pub use radix::{bit_length, to_binary, to_hex, HEX_WIDTH};

use numstat_core::{ConversionResult, ConversionRow, Dataset, ExecutionContext, NumstatError, Stage};
use tracing::warn;

/// Convert one integer
pub fn convert_number(value: i64, policy: SignPolicy) -> ConversionResult {
    let binary = to_binary(value, policy);
    match to_hex(value, policy) {
        Ok(hex) => ConversionResult {
            value,
            binary: Some(binary),
            hex: Some(hex),
            error: None,
        },
        Err(err) => ConversionResult {
            value,
            binary: Some(binary),
            hex: None,
            error: Some(err),
        },
    }
}

/// Convert every integer, preserving order and count
pub fn convert_numbers(values: &[i64], policy: SignPolicy) -> Vec<ConversionResult> {
    values.iter().map(|&v| convert_number(v, policy)).collect()
}

/// Dataset → one row per valid integer, sign policy from the run profile
#[derive(Debug, Default)]
pub struct ConversionStage;

impl Stage for ConversionStage {
    type Input = Dataset<i64>;
    type Output = Vec<ConversionRow>;

    fn id(&self) -> &'static str {
        "convert.radix.v1"
    }

    fn run(&self, input: Dataset<i64>, ctx: &ExecutionContext) -> Result<Vec<ConversionRow>, NumstatError> {
        let values = input.require_values()?;
        let results = convert_numbers(values, ctx.profile.sign_policy);

        let rows: Vec<ConversionRow> = input
            .lines()
            .iter()
            .zip(results)
            .map(|(&line, result)| ConversionRow { line, result })
            .collect();

        for row in rows.iter().filter(|r| !r.result.is_ok()) {
            if let Some(err) = &row.result.error {
                warn!(run_id = %ctx.run_id, line = row.line, "cannot encode: {}", err);
            }
        }

        Ok(rows)
    }
}
