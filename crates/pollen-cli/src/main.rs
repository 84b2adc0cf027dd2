//! pollen-alert - daily pollen-count email for allergy sufferers.

use clap::Parser;
use pollen_cli::commands;
use pollen_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pollen_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Load config (defaults if the file does not exist)
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    config.validate()?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command.unwrap_or_else(Command::default_run) {
        Command::Run(args) => commands::execute_run(args, &config, &formatter)?,
        Command::Preview(args) => commands::execute_preview(args, &config, &formatter)?,
        Command::Scrape => commands::execute_scrape(&config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}
