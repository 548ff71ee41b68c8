//! Data Model: tokens, datasets and result records
use crate::error::{EncodingError, NumstatError, ParseError};
use crate::profile::{ModePolicy, VarianceMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trimmed, non-empty line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// 1-based source line number
    pub line: usize,
    pub text: String,
}

/// A token the classifier rejected. Kept for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidToken {
    pub line: usize,
    pub text: String,
    pub error: ParseError,
}

/// Outcome of classifying one token.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue<T> {
    Valid(T),
    Invalid(InvalidToken),
}

/// Ordered valid values plus the tokens that were rejected on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset<T> {
    values: Vec<T>,
    lines: Vec<usize>,
    invalid: Vec<InvalidToken>,
}

impl<T> Dataset<T> {
    /// Split `(line, parsed)` pairs into valid values and invalid tokens,
    /// keeping source order on both sides.
    pub fn from_parsed<I>(parsed: I) -> Self
    where
        I: IntoIterator<Item = (usize, ParsedValue<T>)>,
    {
        let mut values = Vec::new();
        let mut lines = Vec::new();
        let mut invalid = Vec::new();

        for (line, value) in parsed {
            match value {
                ParsedValue::Valid(v) => {
                    values.push(v);
                    lines.push(line);
                }
                ParsedValue::Invalid(token) => invalid.push(token),
            }
        }

        Self { values, lines, invalid }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Source line of each valid value, parallel to `values()`
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    pub fn invalid(&self) -> &[InvalidToken] {
        &self.invalid
    }

    pub fn valid_count(&self) -> usize {
        self.values.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    /// Every token seen, valid or not
    pub fn total_tokens(&self) -> usize {
        self.values.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Valid values, or `EmptyDataset` when nothing survived parsing.
    pub fn require_values(&self) -> Result<&[T], NumstatError> {
        if self.values.is_empty() {
            Err(NumstatError::EmptyDataset)
        } else {
            Ok(&self.values)
        }
    }
}

/// Most frequent value, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Value(f64),
    NoMode,
}

impl Mode {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::NoMode => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Tokens seen, valid plus invalid
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub std_dev: f64,
    pub variance_mode: VarianceMode,
    pub mode_policy: ModePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: i64,
    pub binary: Option<String>,
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EncodingError>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A conversion result tied to the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub line: usize,
    #[serde(flatten)]
    pub result: ConversionResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountResult {
    /// Sorted by count descending, then word ascending
    pub rows: Vec<WordFrequency>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageTrace {
    pub id: String,
    pub deterministic: bool,
    pub latency_us: u64,
}

/// Everything one run produced, handed to presentation and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport<T> {
    pub run_id: String,
    pub profile: String,
    pub generated_at: DateTime<Utc>,
    pub input_digest: String,
    pub stages: Vec<StageTrace>,
    pub elapsed_secs: f64,
    pub invalid: Vec<InvalidToken>,
    pub result: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(line: usize, text: &str) -> ParsedValue<f64> {
        ParsedValue::Invalid(InvalidToken {
            line,
            text: text.to_string(),
            error: ParseError::NotANumber {
                token: text.to_string(),
                kind: "float".to_string(),
            },
        })
    }

    #[test]
    fn test_dataset_split_keeps_order() {
        let dataset = Dataset::from_parsed(vec![
            (1, ParsedValue::Valid(3.0)),
            (2, invalid(2, "abc")),
            (4, ParsedValue::Valid(1.5)),
        ]);

        assert_eq!(dataset.values(), &[3.0, 1.5]);
        assert_eq!(dataset.lines(), &[1, 4]);
        assert_eq!(dataset.invalid_count(), 1);
        assert_eq!(dataset.total_tokens(), 3);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let dataset = Dataset::from_parsed(vec![(1, invalid(1, "x"))]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.require_values(), Err(NumstatError::EmptyDataset));
    }

    #[test]
    fn test_mode_value() {
        assert_eq!(Mode::Value(2.0).value(), Some(2.0));
        assert_eq!(Mode::NoMode.value(), None);
    }
}
