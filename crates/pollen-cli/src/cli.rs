//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Daily pollen alert - scrape the ASAP Illinois pollen count and email it.
#[derive(Debug, Parser)]
#[command(name = "pollen-alert")]
#[command(version, about, long_about = None)]
#[command(after_help = "ASAP Illinois publishes counts Mon–Fri, April–October.")]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (worst level only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape, build and send today's alert (default)
    Run(RunArgs),

    /// Build today's alert and save it as HTML instead of sending
    Preview(PreviewArgs),

    /// Scrape and print today's readings
    Scrape,

    /// Show or initialise the configuration file
    Config(ConfigArgs),
}

impl Command {
    /// `run` with credentials taken from the environment.
    pub fn default_run() -> Self {
        Command::Run(RunArgs::parse_from(["run"]))
    }
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Run even outside the season window or on a weekend
    #[arg(long)]
    pub force: bool,

    /// Sender account (also the SMTP login)
    #[arg(long, env = "SMTP_EMAIL")]
    pub smtp_email: Option<String>,

    /// SMTP app password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Alert recipient
    #[arg(long, env = "ALERT_RECIPIENT")]
    pub recipient: Option<String>,
}

/// Arguments for the preview command.
#[derive(Debug, Parser)]
pub struct PreviewArgs {
    /// Where to write the HTML
    #[arg(short, long, default_value = "preview.html")]
    pub output: String,

    /// Run even outside the season window or on a weekend
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Write the default configuration to the config path
    #[arg(long)]
    pub init: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
