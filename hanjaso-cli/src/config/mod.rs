//! Configuration module
//!
//! The CLI reads an optional TOML file. Every section and field has a
//! default, so a partial file is valid. Command-line flags take
//! precedence over file values.

use crate::{error::CliError, output::OutputFormat};
use anyhow::{Context, Result};
use clap::ValueEnum;
use hanjaso_engine::{ChunkPolicy, Direction, EngineConfig};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Default direction
    pub direction: Direction,

    /// Show jaso that did not compose as compatibility letters
    pub compat_letters: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Compose,
            compat_letters: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include conversion metadata in JSON output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: true,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Input size in kilo-codepoints above which conversion goes parallel
    pub parallel_threshold_kb: usize,

    /// Chunk size for parallel conversion in kilo-codepoints
    pub chunk_size_kb: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_kb: 256,
            chunk_size_kb: 64,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.output_format()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// The configured default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Engine configuration described by this file
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let perf = &self.performance;
        Ok(EngineConfig {
            direction: self.conversion.direction,
            compat_letters: self.conversion.compat_letters,
            chunk_policy: ChunkPolicy::Auto {
                target_chars: kilo_codepoints(perf.chunk_size_kb, "chunk_size_kb")?,
            },
            threads: (perf.worker_threads > 0).then_some(perf.worker_threads),
            parallel_threshold: kilo_codepoints(
                perf.parallel_threshold_kb,
                "parallel_threshold_kb",
            )?,
            ..EngineConfig::default()
        })
    }
}

/// Scale a size given in kilo-codepoints, rejecting values that overflow
pub fn kilo_codepoints(kb: usize, name: &str) -> Result<usize> {
    kb.checked_mul(1024).ok_or_else(|| {
        CliError::ConfigError(format!("{name} = {kb} is too large")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = CliConfig::parse("[conversion]\ndirection = \"decompose\"\n").unwrap();
        assert_eq!(config.conversion.direction, Direction::Decompose);
        assert!(!config.conversion.compat_letters);
        assert_eq!(config.performance.chunk_size_kb, 64);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = CliConfig::default().to_toml().unwrap();
        assert!(text.contains("[conversion]"));
        assert!(text.contains("[performance]"));

        let parsed = CliConfig::parse(&text).unwrap();
        assert_eq!(parsed.conversion.direction, Direction::Compose);
        assert_eq!(parsed.output.default_format, "text");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = CliConfig::parse("[output]\ndefault_format = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_direction_is_rejected() {
        assert!(CliConfig::parse("[conversion]\ndirection = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_engine_config_mapping() {
        let config = CliConfig::parse(
            "[performance]\nworker_threads = 3\nchunk_size_kb = 2\nparallel_threshold_kb = 1\n",
        )
        .unwrap();
        let engine = config.engine_config().unwrap();
        assert_eq!(engine.threads, Some(3));
        assert_eq!(engine.parallel_threshold, 1024);
        assert_eq!(engine.chunk_policy, ChunkPolicy::Auto { target_chars: 2048 });
        assert!(engine.validate().is_ok());

        assert_eq!(CliConfig::default().engine_config().unwrap().threads, None);
    }

    #[test]
    fn test_oversized_kb_values_are_rejected() {
        let config = CliConfig::parse(&format!(
            "[performance]\nchunk_size_kb = {}\n",
            u64::MAX / 2
        ))
        .unwrap();
        let err = config.engine_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
        assert!(err.to_string().contains("chunk_size_kb"));

        let mut config = CliConfig::default();
        config.performance.parallel_threshold_kb = usize::MAX;
        assert!(config.engine_config().is_err());
        assert_eq!(kilo_codepoints(3, "n").unwrap(), 3072);
    }
}
