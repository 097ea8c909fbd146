//! Convert command implementation

use crate::{
    config::{kilo_codepoints, CliConfig},
    error::CliError,
    input::{resolve_patterns, FileReader, STDIN_MARKER},
    output::{JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::Args;
use hanjaso_engine::{ChunkPolicy, Direction, EngineConfig, ExecutionMode, HangulConverter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decompose syllable blocks into jaso instead of composing
    #[arg(short, long)]
    pub decompose: bool,

    /// Show jaso that did not compose as compatibility letters
    #[arg(long, conflicts_with = "decompose")]
    pub compat: bool,

    /// Force parallel conversion even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Chunk size for parallel conversion, in kilo-codepoints
    #[arg(long, value_name = "N")]
    pub chunk_kb: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let engine_config = self.engine_config(&config)?;
        log::debug!("Engine configuration: {:?}", engine_config);
        log::info!(
            "Direction: {}, threads: {}",
            engine_config.direction.name(),
            engine_config.threads.unwrap_or_else(num_cpus::get)
        );

        let converter = HangulConverter::with_config(engine_config)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = if self.reads_stdin() {
            None
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to convert", files.len());
            Some(files)
        };

        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?,
        };
        let writer = self.open_writer()?;
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .include_metadata(config.output.include_metadata)
                    .pretty(config.output.pretty_json),
            ),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        match files {
            Some(files) => self.convert_files(&converter, &files, formatter.as_mut())?,
            None => {
                let text = FileReader::read_stdin()?;
                let output = converter
                    .convert_text(&text)
                    .map_err(|e| CliError::ConversionError(format!("stdin: {e}")))?;
                formatter.format_document("stdin", &output)?;
            }
        }

        formatter.finish()?;
        log::info!("Conversion complete");
        Ok(())
    }

    fn convert_files(
        &self,
        converter: &HangulConverter,
        files: &[PathBuf],
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in files {
            let name = path.display().to_string();
            let text = FileReader::read_text(path)?;
            let output = converter
                .convert_text(&text)
                .map_err(|e| CliError::ConversionError(format!("{name}: {e}")))?;
            log::debug!(
                "{}: {} -> {} codepoints ({}, {} chunk(s))",
                name,
                output.metadata.input_chars,
                output.metadata.output_chars,
                output.metadata.execution_mode.name(),
                output.metadata.chunks
            );

            formatter.format_document(&name, &output)?;
            progress.file_completed(&name);
        }

        progress.finish();
        Ok(())
    }

    /// Engine configuration from the file, overridden by flags
    pub fn engine_config(&self, config: &CliConfig) -> Result<EngineConfig> {
        let mut engine = config.engine_config()?;

        if self.decompose {
            engine.direction = Direction::Decompose;
            engine.compat_letters = false;
        }
        if self.compat {
            engine.direction = Direction::Compose;
            engine.compat_letters = true;
        }
        if self.parallel {
            engine.execution_mode = ExecutionMode::Parallel;
        }
        if let Some(threads) = self.threads {
            engine.threads = Some(threads);
        }
        if let Some(chunk_kb) = self.chunk_kb {
            engine.chunk_policy = ChunkPolicy::Fixed {
                size: kilo_codepoints(chunk_kb, "--chunk-kb")?,
            };
        }

        Ok(engine)
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == STDIN_MARKER
    }

    fn open_writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logger")?;
        }

        Ok(())
    }
}
