//! Stage Trait: one contract for every pipeline step
use crate::context::ExecutionContext;
use crate::error::NumstatError;

pub trait Stage {
    type Input;
    type Output;

    /// Stable stage id (e.g. "classify.float.v1")
    fn id(&self) -> &'static str;

    /// Whether the same input always yields the same output (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    fn run(&self, input: Self::Input, ctx: &ExecutionContext) -> Result<Self::Output, NumstatError>;
}
