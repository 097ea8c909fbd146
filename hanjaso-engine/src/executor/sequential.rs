//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ConvertFn, ExecutionMode, ExecutionOutput, Executor},
};
use hanjaso_core::Codepoint;

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(&self, seq: &[Codepoint], convert: ConvertFn) -> Result<ExecutionOutput> {
        Ok(ExecutionOutput {
            codepoints: convert(seq),
            chunks: 1,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
