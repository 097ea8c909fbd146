//! Output formatting module

use anyhow::Result;
use hanjaso_core::{
    classify, decompose, is_leading_conjoinable, is_trailing_conjoinable, is_vowel_conjoinable,
    to_compat_letter, Codepoint, LetterClass,
};
use hanjaso_engine::{Metadata, Output};
use serde::Serialize;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Converted text as is
    Text,
    /// JSON documents with metadata
    Json,
    /// Markdown sections and tables
    Markdown,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Emit one converted document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Emit one inspected codepoint
    fn format_letter(&mut self, letter: &LetterInfo) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

/// Serializable view of one converted document
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Converted text
    pub text: String,
    /// Conversion metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Everything `inspect` reports about a single codepoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterInfo {
    /// Codepoint in U+XXXX notation
    pub codepoint: String,
    /// The character itself
    pub character: char,
    /// Class name
    pub class: &'static str,
    /// Accepted by the composition arithmetic
    pub conjoinable: bool,
    /// Compatibility letter for a modern jaso
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compat: Option<char>,
    /// Jaso of a syllable block
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jaso: Vec<String>,
}

impl LetterInfo {
    /// Describe `ch`
    pub fn of(ch: char) -> Self {
        let c = Codepoint::from(ch);
        let class = classify(c);
        let conjoinable = match class {
            LetterClass::Leading => is_leading_conjoinable(c),
            LetterClass::Vowel => is_vowel_conjoinable(c),
            LetterClass::Trailing => is_trailing_conjoinable(c),
            _ => false,
        };
        let compat = Some(to_compat_letter(c))
            .filter(|&mapped| mapped != c)
            .and_then(char::from_u32);
        let jaso = decompose(c)
            .map(|jaso| jaso.iter().map(codepoint_label).collect())
            .unwrap_or_default();

        Self {
            codepoint: codepoint_label(c),
            character: ch,
            class: class.name(),
            conjoinable,
            compat,
            jaso,
        }
    }
}

/// U+XXXX notation
pub fn codepoint_label(c: Codepoint) -> String {
    format!("U+{c:04X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_info_of_syllable() {
        let info = LetterInfo::of('한');
        assert_eq!(info.codepoint, "U+D55C");
        assert_eq!(info.class, "syllable");
        assert!(!info.conjoinable);
        assert_eq!(info.compat, None);
        assert_eq!(info.jaso, vec!["U+1112", "U+1161", "U+11AB"]);
    }

    #[test]
    fn test_letter_info_of_jaso() {
        let info = LetterInfo::of('\u{11A8}');
        assert_eq!(info.class, "trailing");
        assert!(info.conjoinable);
        assert_eq!(info.compat, Some('ㄱ'));
        assert!(info.jaso.is_empty());

        let archaic = LetterInfo::of('\u{1113}');
        assert_eq!(archaic.class, "leading");
        assert!(!archaic.conjoinable);
        assert_eq!(archaic.compat, None);
    }

    #[test]
    fn test_letter_info_of_other() {
        let info = LetterInfo::of('a');
        assert_eq!(info.codepoint, "U+0061");
        assert_eq!(info.class, "other");
    }
}
