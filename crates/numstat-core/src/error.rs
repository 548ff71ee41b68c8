//! Unified Error Model
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumstatError {
    #[error("DATA/EMPTY: no valid values to compute over")]
    EmptyDataset,

    #[error("STATS/SAMPLE_VARIANCE: sample variance needs at least 2 values, got {count}")]
    SampleVarianceUndefined { count: usize },

    #[error("PARSE/{0}")]
    Parse(#[from] ParseError),

    #[error("ENCODE/{0}")]
    Encoding(#[from] EncodingError),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("IO/{path}: {message}")]
    Io { path: String, message: String },

    #[error("RENDER/{0}")]
    Render(String),
}

impl NumstatError {
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Why a token was rejected by the classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ParseError {
    #[error("'{token}' is not a valid {kind}")]
    NotANumber { token: String, kind: String },

    #[error("'{token}' is not a finite number")]
    NonFinite { token: String },

    #[error("'{token}' is outside the 64-bit integer range")]
    OutOfRange { token: String },
}

/// A value that has no representation under the active width policy.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingError {
    #[error("{value} needs {required} bits, exceeds the {width}-bit {encoding} width")]
    OutOfRange {
        value: i64,
        encoding: String,
        width: u32,
        required: u32,
    },
}
