//! Execution strategies for codepoint conversion

use crate::{config::EngineConfig, error::Result};
use hanjaso_core::Codepoint;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// A whole-sequence conversion from the core crate
pub type ConvertFn = fn(&[Codepoint]) -> Vec<Codepoint>;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single-threaded conversion
    Sequential,
    /// Chunked multi-threaded conversion
    Parallel,
    /// Pick by input size
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name used in logs and output
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Converted codepoints and how they were produced
#[derive(Debug, Clone)]
pub struct ExecutionOutput {
    /// Converted sequence
    pub codepoints: Vec<Codepoint>,
    /// Number of chunks converted
    pub chunks: usize,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Convert a sequence with `convert`
    fn run(&self, seq: &[Codepoint], convert: ConvertFn) -> Result<ExecutionOutput>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve `Adaptive` into a concrete mode for an input of `len` codepoints
pub fn auto_select(len: usize, config: &EngineConfig) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Adaptive => {}
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => return ExecutionMode::Sequential,
        mode => return mode,
    }

    if len < config.parallel_threshold || config.threads == Some(1) {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    {
        if num_cpus::get() > 1 || config.threads.is_some_and(|n| n > 1) {
            return ExecutionMode::Parallel;
        }
    }

    ExecutionMode::Sequential
}
