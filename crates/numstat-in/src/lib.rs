//! Numstat-IN: raw text to classified datasets
//!
//! The front half of every pipeline: tokenize the input, then classify each
//! token as a valid number of the requested kind or as an invalid entry.
//!
//! # Example
//!
//! ```
//! use numstat_in::{read_dataset};
//!
//! let dataset = read_dataset::<f64>("1.5\nabc\n\n2\n");
//! assert_eq!(dataset.values(), &[1.5, 2.0]);
//! assert_eq!(dataset.invalid_count(), 1);
//! ```

pub mod classifier;
pub mod tokenizer;

pub use classifier::{classify, parse_float, parse_int, Classify};
pub use tokenizer::{tokenize_lines, tokenize_words};

use numstat_core::{Dataset, ExecutionContext, NumstatError, RawToken, Stage};
use std::marker::PhantomData;
use tracing::warn;

/// Tokenize and classify in one call, without stage bookkeeping
pub fn read_dataset<T: Classify>(text: &str) -> Dataset<T> {
    classify_tokens(&tokenize_lines(text))
}

/// Classify every token, keeping source order
pub fn classify_tokens<T: Classify>(tokens: &[RawToken]) -> Dataset<T> {
    Dataset::from_parsed(tokens.iter().map(|t| (t.line, classify::<T>(t))))
}

/// Input text → one token per non-empty line
#[derive(Debug, Default)]
pub struct TokenizeLinesStage;

impl Stage for TokenizeLinesStage {
    type Input = String;
    type Output = Vec<RawToken>;

    fn id(&self) -> &'static str {
        "tokenize.lines.v1"
    }

    fn run(&self, input: String, _ctx: &ExecutionContext) -> Result<Vec<RawToken>, NumstatError> {
        Ok(tokenize_lines(&input))
    }
}

/// Input text → lowercased words
#[derive(Debug, Default)]
pub struct TokenizeWordsStage;

impl Stage for TokenizeWordsStage {
    type Input = String;
    type Output = Vec<String>;

    fn id(&self) -> &'static str {
        "tokenize.words.v1"
    }

    fn run(&self, input: String, _ctx: &ExecutionContext) -> Result<Vec<String>, NumstatError> {
        Ok(tokenize_words(&input))
    }
}

/// Tokens → dataset of `T`. Rejected tokens are logged and kept, never fatal.
#[derive(Debug)]
pub struct ClassifyStage<T> {
    _kind: PhantomData<T>,
}

impl<T> ClassifyStage<T> {
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<T> Default for ClassifyStage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Classify> Stage for ClassifyStage<T> {
    type Input = Vec<RawToken>;
    type Output = Dataset<T>;

    fn id(&self) -> &'static str {
        "classify.number.v1"
    }

    fn run(&self, input: Vec<RawToken>, ctx: &ExecutionContext) -> Result<Dataset<T>, NumstatError> {
        let dataset = classify_tokens::<T>(&input);

        for invalid in dataset.invalid() {
            warn!(
                run_id = %ctx.run_id,
                source = ctx.source.as_deref().unwrap_or("-"),
                line = invalid.line,
                "invalid data: {}",
                invalid.error
            );
        }

        Ok(dataset)
    }
}
