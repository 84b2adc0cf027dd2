//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.init {
        if path.exists() {
            return Err(CliError::InvalidInput(format!(
                "{} already exists",
                path.display()
            )));
        }

        Config::default().save_to(path)?;
        println!(
            "{}",
            formatter.success(&format!("Wrote default configuration to {}", path.display()))
        );
        return Ok(());
    }

    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        _ => {
            formatter.emit(&formatter.info(&format!("Configuration: {}", path.display())));
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_config(ConfigArgs { init: true }, &Config::default(), &path, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[location]\nname = \"Evanston\"\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = ConfigArgs { init: true };
        let result = execute_config(args, &Config::default(), &path, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
