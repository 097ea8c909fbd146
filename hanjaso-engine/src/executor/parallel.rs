//! Parallel execution strategy

use crate::{
    chunker::ChunkManager,
    config::ChunkPolicy,
    error::{EngineError, Result},
    executor::{ConvertFn, ExecutionMode, ExecutionOutput, Executor},
};
use hanjaso_core::Codepoint;
use rayon::prelude::*;
use tracing::debug;

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_manager: ChunkManager,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a parallel executor on the global rayon pool
    pub fn new(chunk_policy: ChunkPolicy) -> Self {
        Self {
            chunk_manager: ChunkManager::new(chunk_policy),
            pool: None,
        }
    }

    /// Create a parallel executor with its own pool of `threads` workers
    ///
    /// `None` falls back to the global pool.
    pub fn with_threads(chunk_policy: ChunkPolicy, threads: Option<usize>) -> Result<Self> {
        let pool = threads
            .map(|threads| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))
            })
            .transpose()?;

        Ok(Self {
            chunk_manager: ChunkManager::new(chunk_policy),
            pool,
        })
    }

    /// Number of worker threads conversions run on
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn convert_chunks(&self, seq: &[Codepoint], convert: ConvertFn) -> Result<ExecutionOutput> {
        let chunks = self.chunk_manager.chunk(seq)?;
        debug!(chunks = chunks.len(), threads = self.threads(), "parallel conversion");

        let run = || {
            chunks
                .par_iter()
                .map(|range| convert(&seq[range.clone()]))
                .collect::<Vec<_>>()
        };

        let converted = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        Ok(ExecutionOutput {
            codepoints: converted.concat(),
            chunks: chunks.len(),
        })
    }
}

impl Executor for ParallelExecutor {
    fn run(&self, seq: &[Codepoint], convert: ConvertFn) -> Result<ExecutionOutput> {
        self.convert_chunks(seq, convert)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanjaso_core::{jaso_to_syllables, syllables_to_jaso};

    #[test]
    fn test_parallel_equals_sequential() {
        let text: Vec<Codepoint> = "닭갈비와 뷁! 한글 자모를 음절로 바꿉니다. "
            .repeat(50)
            .chars()
            .map(u32::from)
            .collect();
        let jaso = syllables_to_jaso(&text);

        let executor =
            ParallelExecutor::with_threads(ChunkPolicy::Fixed { size: 7 }, Some(3)).unwrap();
        let output = executor.run(&jaso, jaso_to_syllables).unwrap();

        assert!(output.chunks > 1);
        assert_eq!(output.codepoints, jaso_to_syllables(&jaso));
        assert_eq!(output.codepoints, text);
    }

    #[test]
    fn test_parallel_empty() {
        let executor = ParallelExecutor::new(ChunkPolicy::default());
        let output = executor.run(&[], jaso_to_syllables).unwrap();
        assert!(output.codepoints.is_empty());
        assert_eq!(output.chunks, 0);
        assert_eq!(executor.mode(), ExecutionMode::Parallel);
    }

    fn worker_count(_: &[Codepoint]) -> Vec<Codepoint> {
        vec![rayon::current_num_threads() as Codepoint]
    }

    #[test]
    fn test_pool_is_built_once_and_reused() {
        let executor =
            ParallelExecutor::with_threads(ChunkPolicy::Fixed { size: 4 }, Some(3)).unwrap();
        assert!(executor.pool.is_some());
        assert_eq!(executor.threads(), 3);

        let seq = vec![0x41; 64];
        for _ in 0..3 {
            let output = executor.run(&seq, worker_count).unwrap();
            assert_eq!(output.chunks, 16);
            assert!(output.codepoints.iter().all(|&n| n == 3));
        }
    }

    #[test]
    fn test_without_threads_uses_global_pool() {
        let executor = ParallelExecutor::with_threads(ChunkPolicy::default(), None).unwrap();
        assert!(executor.pool.is_none());
        assert_eq!(executor.threads(), rayon::current_num_threads());
    }
}
