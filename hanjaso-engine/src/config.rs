//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};

/// Which way text is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Jaso sequences into syllable blocks
    #[default]
    Compose,
    /// Syllable blocks into jaso sequences
    Decompose,
}

impl Direction {
    /// Lowercase name used in logs and output
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Compose => "compose",
            Direction::Decompose => "decompose",
        }
    }
}

/// Chunking policy for parallel conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Target chunk size in codepoints
    Fixed {
        /// Size of each chunk in codepoints
        size: usize,
    },
    /// Split evenly so that no chunk exceeds the target
    Auto {
        /// Upper bound for each chunk in codepoints
        target_chars: usize,
    },
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Auto {
            target_chars: 64 * 1024,
        }
    }
}

impl ChunkPolicy {
    pub(crate) fn target(&self) -> usize {
        match *self {
            ChunkPolicy::Fixed { size } => size,
            ChunkPolicy::Auto { target_chars } => target_chars,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Conversion direction
    pub direction: Direction,
    /// Render jaso that did not compose as compatibility letters
    pub compat_letters: bool,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Chunk sizing policy
    pub chunk_policy: ChunkPolicy,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum input size in codepoints before parallel execution is considered
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Compose,
            compat_letters: false,
            execution_mode: ExecutionMode::Adaptive,
            chunk_policy: ChunkPolicy::default(),
            threads: None,
            parallel_threshold: 256 * 1024,
        }
    }
}

impl EngineConfig {
    /// Create a fast configuration that goes parallel early
    pub fn fast() -> Self {
        Self {
            chunk_policy: ChunkPolicy::Fixed { size: 256 * 1024 },
            parallel_threshold: 64 * 1024,
            ..Self::default()
        }
    }

    /// Create a single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Check the configuration for values the executors cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_policy.target() == 0 {
            return Err(EngineError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be greater than zero".to_string(),
            ));
        }
        if self.compat_letters && self.direction == Direction::Decompose {
            return Err(EngineError::ConfigError(
                "compatibility letters only apply when composing".to_string(),
            ));
        }
        Ok(())
    }
}
