//! Hangul converter and builder
//!
//! [`HangulConverter`] is the entry point for text-level conversion. It
//! turns the input into codepoints, picks an executor, runs the core
//! conversion for the configured direction and maps the result back into
//! a string.

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::{
    config::{ChunkPolicy, Direction, EngineConfig},
    error::{EngineError, Result},
    executor::{auto_select, ConvertFn, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
};
use hanjaso_core::{jaso_to_compat_letters, jaso_to_syllables, syllables_to_jaso, Codepoint};
use std::time::Instant;
use tracing::debug;

/// Converted text with metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Output {
    /// Converted text
    pub text: String,
    /// Conversion metadata
    pub metadata: Metadata,
}

/// Conversion metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Metadata {
    /// Direction that was applied
    pub direction: Direction,
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Input length in codepoints
    pub input_chars: usize,
    /// Output length in codepoints
    pub output_chars: usize,
    /// Number of chunks converted
    pub chunks: usize,
    /// Conversion time in milliseconds
    pub processing_time_ms: f64,
}

/// Text-level Hangul jaso/syllable converter
pub struct HangulConverter {
    config: EngineConfig,
    sequential: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

impl Default for HangulConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulConverter {
    /// Create a composing converter with default configuration
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            sequential: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::new(config.chunk_policy),
            config,
        }
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sequential: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel: ParallelExecutor::with_threads(config.chunk_policy, config.threads)?,
            config,
        })
    }

    /// Start building a converter
    pub fn builder() -> HangulConverterBuilder {
        HangulConverterBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Convert any input source
    pub fn convert(&self, input: Input) -> Result<Output> {
        let text = input.to_text()?;
        self.convert_text(&text)
    }

    /// Convert a string directly
    pub fn convert_text(&self, text: &str) -> Result<Output> {
        let start_time = Instant::now();
        let seq: Vec<Codepoint> = text.chars().map(u32::from).collect();

        let mode = auto_select(seq.len(), &self.config);
        debug!(
            direction = self.config.direction.name(),
            mode = mode.name(),
            chars = seq.len(),
            "converting"
        );

        let executor = self.executor(mode);
        let executed = executor.run(&seq, self.converter())?;
        let converted = codepoints_to_string(&executed.codepoints)?;

        let metadata = Metadata {
            direction: self.config.direction,
            execution_mode: executor.mode(),
            input_chars: seq.len(),
            output_chars: executed.codepoints.len(),
            chunks: executed.chunks,
            processing_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            output_chars = metadata.output_chars,
            chunks = metadata.chunks,
            "conversion finished"
        );

        Ok(Output {
            text: converted,
            metadata,
        })
    }

    fn converter(&self) -> ConvertFn {
        match (self.config.direction, self.config.compat_letters) {
            (Direction::Compose, false) => jaso_to_syllables,
            (Direction::Compose, true) => jaso_to_compat_letters,
            (Direction::Decompose, _) => syllables_to_jaso,
        }
    }

    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => &self.parallel,
            _ => &self.sequential,
        }
    }
}

fn codepoints_to_string(codepoints: &[Codepoint]) -> Result<String> {
    codepoints
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            char::from_u32(value).ok_or(EngineError::InvalidCodepoint { value, position })
        })
        .collect()
}

/// Builder for [`HangulConverter`]
#[derive(Debug, Clone, Default)]
pub struct HangulConverterBuilder {
    config: EngineConfig,
}

impl HangulConverterBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversion direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Render jaso that did not compose as compatibility letters
    pub fn compat_letters(mut self, enabled: bool) -> Self {
        self.config.compat_letters = enabled;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the chunk policy
    pub fn chunk_policy(mut self, policy: ChunkPolicy) -> Self {
        self.config.chunk_policy = policy;
        self
    }

    /// Use fixed chunks of `size` codepoints
    pub fn chunk_size(self, size: usize) -> Self {
        self.chunk_policy(ChunkPolicy::Fixed { size })
    }

    /// Set the minimum size for parallel execution
    pub fn parallel_threshold(mut self, chars: usize) -> Self {
        self.config.parallel_threshold = chars;
        self
    }

    /// Use the fast configuration preset, keeping direction and rendering
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig {
            direction: self.config.direction,
            compat_letters: self.config.compat_letters,
            ..EngineConfig::fast()
        };
        self
    }

    /// Use the sequential configuration preset, keeping direction and rendering
    pub fn sequential(mut self) -> Self {
        self.config = EngineConfig {
            direction: self.config.direction,
            compat_letters: self.config.compat_letters,
            ..EngineConfig::sequential()
        };
        self
    }

    /// Build the converter
    pub fn build(self) -> Result<HangulConverter> {
        HangulConverter::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_text() {
        let converter = HangulConverter::new();
        let output = converter.convert_text("\u{1112}\u{1161}\u{11AB}").unwrap();
        assert_eq!(output.text, "한");
        assert_eq!(output.metadata.input_chars, 3);
        assert_eq!(output.metadata.output_chars, 1);
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_decompose_text() {
        let converter = HangulConverter::builder()
            .direction(Direction::Decompose)
            .build()
            .unwrap();
        let output = converter.convert_text("가 A").unwrap();
        assert_eq!(output.text, "\u{1100}\u{1161} A");
        assert_eq!(output.metadata.direction, Direction::Decompose);
    }

    #[test]
    fn test_compat_rendering() {
        let converter = HangulConverter::builder()
            .compat_letters(true)
            .build()
            .unwrap();
        let output = converter.convert_text("\u{11A8} \u{1100}\u{1161}").unwrap();
        assert_eq!(output.text, "ㄱ 가");
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = HangulConverter::builder().chunk_size(0).build();
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_presets_keep_direction() {
        let converter = HangulConverter::builder()
            .direction(Direction::Decompose)
            .sequential()
            .build()
            .unwrap();
        assert_eq!(converter.config().direction, Direction::Decompose);
        assert_eq!(converter.config().execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_metadata_reports_executor_mode() {
        let converter = HangulConverter::builder()
            .execution_mode(ExecutionMode::Parallel)
            .build()
            .unwrap();
        let output = converter.convert_text("\u{1100}\u{1161}").unwrap();
        assert_eq!(output.text, "가");
        #[cfg(feature = "parallel")]
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Parallel);
        #[cfg(not(feature = "parallel"))]
        assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_codepoints_to_string_rejects_surrogate() {
        let result = codepoints_to_string(&[0xAC00, 0xD800]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidCodepoint {
                value: 0xD800,
                position: 1
            })
        ));
    }
}
