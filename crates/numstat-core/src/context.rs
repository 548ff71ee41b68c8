//! Execution Context: per-run settings shared by every stage
use crate::profile::RunProfile;

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub run_id: String,
    pub profile: RunProfile,
    /// Where the input came from, for log lines
    pub source: Option<String>,
}

impl ExecutionContext {
    pub fn new(profile: RunProfile) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            profile,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(RunProfile::default())
    }
}
