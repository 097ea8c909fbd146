//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|config| {
            config.engine_config()?.validate()?;
            Ok(config)
        });

        match checked {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Direction: {}", config.conversion.direction.name());
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate("[conversion]\ndirection = \"decompose\"\n").is_ok());
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_bad_toml() {
        assert!(validate("[conversion\n").is_err());
    }

    #[test]
    fn test_validate_engine_rules() {
        let result = validate("[conversion]\ndirection = \"decompose\"\ncompat_letters = true\n");
        assert!(result.unwrap_err().to_string().contains("Validation failed"));

        assert!(validate("[performance]\nchunk_size_kb = 0\n").is_err());
        assert!(validate("[performance]\nparallel_threshold_kb = 9223372036854775807\n").is_err());
    }
}
