//! Token classification: valid number of the target kind, or rejected.
//!
//! Accepted syntax:
//! - optional leading `+` or `-`
//! - `_` digit separators, only between two digits (`1_000`)
//! - floats: decimal point on either side (`.5`, `5.`) and exponents (`1e-3`)
//!
//! Anything else is rejected whole; `12abc` is never read as `12`.

use lazy_static::lazy_static;
use numstat_core::{InvalidToken, ParseError, ParsedValue, RawToken};
use regex::Regex;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+(?:_[0-9]+)*$").unwrap();

    static ref FLOAT: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+(?:_[0-9]+)*(?:\.(?:[0-9]+(?:_[0-9]+)*)?)?|\.[0-9]+(?:_[0-9]+)*)(?:[eE][+-]?[0-9]+(?:_[0-9]+)*)?$"
    ).unwrap();

    static ref NON_FINITE: Regex = Regex::new(r"(?i)^[+-]?(?:inf|infinity|nan)$").unwrap();
}

/// A numeric type tokens can be classified into.
pub trait Classify: Sized {
    /// Human-readable kind, used in error messages
    const KIND: &'static str;

    fn parse_token(text: &str) -> Result<Self, ParseError>;
}

impl Classify for f64 {
    const KIND: &'static str = "float";

    fn parse_token(text: &str) -> Result<Self, ParseError> {
        parse_float(text)
    }
}

impl Classify for i64 {
    const KIND: &'static str = "integer";

    fn parse_token(text: &str) -> Result<Self, ParseError> {
        parse_int(text)
    }
}

/// Parse a finite float.
pub fn parse_float(text: &str) -> Result<f64, ParseError> {
    if NON_FINITE.is_match(text) {
        return Err(ParseError::NonFinite { token: text.to_string() });
    }
    if !FLOAT.is_match(text) {
        return Err(not_a_number(text, f64::KIND));
    }

    let value: f64 = text
        .replace('_', "")
        .parse()
        .map_err(|_| not_a_number(text, f64::KIND))?;

    // Overflowing literals such as 1e400 parse to infinity
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::NonFinite { token: text.to_string() })
    }
}

/// Parse a signed 64-bit integer.
pub fn parse_int(text: &str) -> Result<i64, ParseError> {
    if !INTEGER.is_match(text) {
        return Err(not_a_number(text, i64::KIND));
    }

    // The pattern guarantees digits only, so a failure here is overflow
    text.replace('_', "")
        .parse()
        .map_err(|_| ParseError::OutOfRange { token: text.to_string() })
}

/// Classify one token as a `T`.
pub fn classify<T: Classify>(token: &RawToken) -> ParsedValue<T> {
    match T::parse_token(&token.text) {
        Ok(value) => ParsedValue::Valid(value),
        Err(error) => ParsedValue::Invalid(InvalidToken {
            line: token.line,
            text: token.text.clone(),
            error,
        }),
    }
}

fn not_a_number(text: &str, kind: &str) -> ParseError {
    ParseError::NotANumber {
        token: text.to_string(),
        kind: kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> RawToken {
        RawToken { line: 7, text: text.to_string() }
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(parse_float("3"), Ok(3.0));
        assert_eq!(parse_float("-2.5"), Ok(-2.5));
        assert_eq!(parse_float("+.5"), Ok(0.5));
        assert_eq!(parse_float("5."), Ok(5.0));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert_eq!(parse_float("2.5E-1"), Ok(0.25));
        assert_eq!(parse_float("1_000.5"), Ok(1000.5));
    }

    #[test]
    fn test_float_rejects_partial_numbers() {
        for bad in ["12abc", "abc", "1.2.3", ".", "-", "e5", "1e", "1__0", "_1", "1_", "0x10", "1,5"] {
            assert!(
                matches!(parse_float(bad), Err(ParseError::NotANumber { .. })),
                "accepted: {}",
                bad
            );
        }
    }

    #[test]
    fn test_float_rejects_non_finite() {
        for bad in ["nan", "NaN", "inf", "-Infinity", "1e400"] {
            assert!(
                matches!(parse_float(bad), Err(ParseError::NonFinite { .. })),
                "accepted: {}",
                bad
            );
        }
    }

    #[test]
    fn test_int_forms() {
        assert_eq!(parse_int("10"), Ok(10));
        assert_eq!(parse_int("-5"), Ok(-5));
        assert_eq!(parse_int("+7"), Ok(7));
        assert_eq!(parse_int("007"), Ok(7));
        assert_eq!(parse_int("1_000_000"), Ok(1_000_000));
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_int_rejects() {
        for bad in ["3.0", "1e3", "12abc", "", "--1", "1_"] {
            assert!(
                matches!(parse_int(bad), Err(ParseError::NotANumber { .. })),
                "accepted: {}",
                bad
            );
        }
        assert!(matches!(
            parse_int("9223372036854775808"),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_classify_keeps_original_text() {
        match classify::<i64>(&token("12abc")) {
            ParsedValue::Invalid(invalid) => {
                assert_eq!(invalid.line, 7);
                assert_eq!(invalid.text, "12abc");
            }
            ParsedValue::Valid(v) => panic!("unexpected value {}", v),
        }
        assert_eq!(classify::<f64>(&token("4.5")), ParsedValue::Valid(4.5));
    }
}
