//! Inspect command implementation

use crate::output::{
    JsonFormatter, LetterInfo, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Text to inspect
    #[arg(value_name = "TEXT", required = true)]
    pub text: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        self.write_to(io::stdout().lock())
    }

    /// Write one row per codepoint to `writer`
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.emit(TextFormatter::new(writer)),
            OutputFormat::Json => self.emit(JsonFormatter::new(writer)),
            OutputFormat::Markdown => self.emit(MarkdownFormatter::new(writer)),
        }
    }

    fn emit<F: OutputFormatter>(&self, mut formatter: F) -> Result<()> {
        for ch in self.text.chars() {
            formatter.format_letter(&LetterInfo::of(ch))?;
        }
        formatter.finish()
    }
}
