//! Pipeline Runner: runs stages in order, timing each one
use crate::context::ExecutionContext;
use crate::data_model::{InvalidToken, RunReport, StageTrace};
use crate::error::NumstatError;
use crate::stage::Stage;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

pub struct PipelineRunner<'a> {
    ctx: &'a ExecutionContext,
    started: Instant,
    input_digest: String,
    traces: Vec<StageTrace>,
}

impl<'a> PipelineRunner<'a> {
    /// Start the clock for a run over `raw_input`.
    pub fn new(ctx: &'a ExecutionContext, raw_input: &[u8]) -> Self {
        Self {
            ctx,
            started: Instant::now(),
            input_digest: hash_bytes(raw_input),
            traces: Vec::new(),
        }
    }

    /// Count elapsed time from `started` instead, e.g. from before the
    /// input was read.
    pub fn started_at(mut self, started: Instant) -> Self {
        self.started = started;
        self
    }

    /// Run one stage and record its latency. Failures are returned as-is.
    pub fn run<S: Stage>(&mut self, stage: &S, input: S::Input) -> Result<S::Output, NumstatError> {
        let start = Instant::now();
        let result = stage.run(input, self.ctx);
        let latency_us = start.elapsed().as_micros() as u64;

        debug!(
            run_id = %self.ctx.run_id,
            stage = stage.id(),
            latency_us,
            ok = result.is_ok(),
            "stage finished"
        );

        self.traces.push(StageTrace {
            id: stage.id().to_string(),
            deterministic: stage.deterministic(),
            latency_us,
        });

        result
    }

    /// Short form of the stages run so far, e.g. "tokenize→classify→stats"
    pub fn pipeline_id(&self) -> String {
        self.traces
            .iter()
            .map(|t| t.id.split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→")
    }

    pub fn traces(&self) -> &[StageTrace] {
        &self.traces
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn finish<T>(self, invalid: Vec<InvalidToken>, result: T) -> RunReport<T> {
        let elapsed_secs = self.elapsed_secs();
        info!(
            run_id = %self.ctx.run_id,
            pipeline = %self.pipeline_id(),
            invalid = invalid.len(),
            elapsed_secs,
            "run complete"
        );

        RunReport {
            run_id: self.ctx.run_id.clone(),
            profile: self.ctx.profile.name.clone(),
            generated_at: Utc::now(),
            input_digest: self.input_digest,
            stages: self.traces,
            elapsed_secs,
            invalid,
            result,
        }
    }
}

fn hash_bytes(data: &[u8]) -> String {
    format!("blake3:{}", blake3::hash(data))
}
