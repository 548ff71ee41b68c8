//! Numstat Words: word frequency table
//!
//! Counts case-folded words and orders them by count (descending), then by
//! the word itself (ascending).

use numstat_core::{ExecutionContext, NumstatError, Stage, WordCountResult, WordFrequency};
use std::collections::HashMap;
use tracing::debug;

/// Count and sort `words`. Words are expected to be lowercased already.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> WordCountResult {
    let counts = words.iter().fold(HashMap::<&str, usize>::new(), |mut acc, w| {
        *acc.entry(w.as_ref()).or_insert(0) += 1;
        acc
    });

    let mut rows: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    WordCountResult {
        rows,
        total: words.len(),
    }
}

/// Words → frequency table; no words at all is an empty dataset
#[derive(Debug, Default)]
pub struct WordCountStage;

impl Stage for WordCountStage {
    type Input = Vec<String>;
    type Output = WordCountResult;

    fn id(&self) -> &'static str {
        "words.count.v1"
    }

    fn run(&self, input: Vec<String>, ctx: &ExecutionContext) -> Result<WordCountResult, NumstatError> {
        if input.is_empty() {
            return Err(NumstatError::EmptyDataset);
        }
        let result = count_words(&input);
        debug!(run_id = %ctx.run_id, distinct = result.rows.len(), total = result.total, "counted words");
        Ok(result)
    }
}
