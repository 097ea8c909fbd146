//! JSON output formatter

use super::{DocumentData, LetterInfo, OutputFormatter};
use anyhow::Result;
use hanjaso_engine::Output;
use std::io::Write;

/// JSON formatter - collects everything and writes one array at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
    letters: Vec<LetterInfo>,
    include_metadata: bool,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            letters: Vec::new(),
            include_metadata: true,
            pretty: true,
        }
    }

    /// Include conversion metadata per document
    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Pretty print instead of a single line
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            text: output.text.clone(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn format_letter(&mut self, letter: &LetterInfo) -> Result<()> {
        self.letters.push(letter.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.letters.is_empty() {
            let documents = std::mem::take(&mut self.documents);
            self.write_value(&documents)?;
        } else {
            let letters = std::mem::take(&mut self.letters);
            self.write_value(&letters)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
