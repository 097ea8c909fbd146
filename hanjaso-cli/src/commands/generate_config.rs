//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   hanjaso validate -c {}", self.output.display());
        println!("3. Use it for conversion:");
        println!("   hanjaso convert -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Default configuration with a short header
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# hanjaso configuration\n\
             #\n\
             # conversion.direction: \"compose\" or \"decompose\"\n\
             # output.default_format: \"text\", \"json\" or \"markdown\"\n\
             # performance sizes are in kilo-codepoints; worker_threads = 0 means auto\n\
             \n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# hanjaso configuration"));
        assert!(template.contains("[conversion]"));
        assert!(template.contains("[output]"));
        assert!(template.contains("[performance]"));
        assert!(CliConfig::parse(&template).is_ok());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("hanjaso.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        assert!(args.execute().is_ok());

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("direction = \"compose\""));
    }

    #[test]
    fn test_execute_unwritable() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/hanjaso.toml"),
        };
        assert!(args.execute().is_err());
    }
}
