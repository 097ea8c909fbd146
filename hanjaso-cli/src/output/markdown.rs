//! Markdown output formatter

use super::{LetterInfo, OutputFormatter};
use anyhow::Result;
use hanjaso_engine::Output;
use std::io::Write;

/// Markdown formatter - a section per document, a table of letters
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    letter_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            letter_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```text")?;
        writeln!(self.writer, "{}", output.text.trim_end_matches('\n'))?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_letter(&mut self, letter: &LetterInfo) -> Result<()> {
        if self.letter_count == 0 {
            writeln!(
                self.writer,
                "| Codepoint | Char | Class | Conjoinable | Compat | Jaso |"
            )?;
            writeln!(self.writer, "|---|---|---|---|---|---|")?;
        }
        self.letter_count += 1;

        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            letter.codepoint,
            letter.character,
            letter.class,
            if letter.conjoinable { "yes" } else { "no" },
            letter.compat.map(String::from).unwrap_or_default(),
            letter.jaso.join(" ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.letter_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "---")?;
        if self.letter_count > 0 {
            writeln!(self.writer, "*Total codepoints: {}*", self.letter_count)?;
        } else {
            writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
