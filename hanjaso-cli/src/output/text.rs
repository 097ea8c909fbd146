//! Plain text output formatter

use super::{LetterInfo, OutputFormatter};
use anyhow::Result;
use hanjaso_engine::Output;
use std::io::Write;

/// Plain text formatter - writes converted text unchanged, letters one per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        write!(self.writer, "{}", output.text)?;
        Ok(())
    }

    fn format_letter(&mut self, letter: &LetterInfo) -> Result<()> {
        write!(
            self.writer,
            "{}\t{}\t{}",
            letter.codepoint, letter.character, letter.class
        )?;
        if letter.conjoinable {
            write!(self.writer, "\tconjoinable")?;
        }
        if let Some(compat) = letter.compat {
            write!(self.writer, "\tcompat={compat}")?;
        }
        if !letter.jaso.is_empty() {
            write!(self.writer, "\tjaso={}", letter.jaso.join(" "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanjaso_engine::HangulConverter;

    #[test]
    fn test_document_is_written_verbatim() {
        let output = HangulConverter::new()
            .convert_text("\u{1100}\u{1161}\n")
            .unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_document("stdin", &output).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "가\n");
    }

    #[test]
    fn test_letter_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_letter(&LetterInfo::of('\u{1100}')).unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "U+1100\t\u{1100}\tleading\tconjoinable\tcompat=ㄱ\n"
        );
    }
}
