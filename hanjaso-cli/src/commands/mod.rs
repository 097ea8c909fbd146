//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use hanjaso_core::LetterClass;

pub mod convert;
pub mod generate_config;
pub mod inspect;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text between jaso sequences and syllable blocks
    Convert(convert::ConvertArgs),

    /// Show the class and mappings of every codepoint in a text
    Inspect(inspect::InspectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List codepoint classes and their ranges
    Classes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for the subcommand
    pub fn render(&self) -> String {
        match self {
            ListCommands::Formats => [
                "text      converted text as is; one codepoint per line for inspect",
                "json      JSON array with metadata",
                "markdown  markdown sections and tables",
            ]
            .iter()
            .map(|line| format!("{line}\n"))
            .collect(),
            ListCommands::Classes => LetterClass::ALL
                .iter()
                .map(|class| match class.range() {
                    Some((first, last)) => {
                        format!("{:<14}U+{first:04X}..=U+{last:04X}\n", class.name())
                    }
                    None => format!("{:<14}everything else\n", class.name()),
                })
                .collect(),
        }
    }
}
