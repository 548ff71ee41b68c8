//! Numstat Core: data model, error model, profiles and the stage runner
//!
//! Every pipeline in the workspace has the same shape:
//! tokenize → classify → engine → result record. This crate holds the
//! types that flow between those steps and the runner that times them.

pub mod context;
pub mod data_model;
pub mod error;
pub mod profile;
pub mod runner;
pub mod stage;

pub use context::ExecutionContext;
pub use data_model::{
    ConversionResult, ConversionRow, Dataset, InvalidToken, Mode, ParsedValue, RawToken, RunReport,
    StageTrace, StatisticsResult, WordCountResult, WordFrequency,
};
pub use error::{EncodingError, NumstatError, ParseError};
pub use profile::{ModePolicy, RunProfile, SignPolicy, VarianceMode};
pub use runner::PipelineRunner;
pub use stage::Stage;

/// Numstat version
pub const NUMSTAT_VERSION: &str = env!("CARGO_PKG_VERSION");
