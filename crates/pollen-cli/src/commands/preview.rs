//! Preview command implementation.

use super::weather_client;
use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::{build_alert, Alert, Outcome, RunContext};
use chrono::Local;
use pollen_extractor::HttpPageSource;
use std::fs;
use std::path::Path;

/// Execute the preview command.
pub fn execute_preview(args: PreviewArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let ctx = RunContext {
        now: Local::now().naive_local(),
        force: args.force,
    };

    let source = HttpPageSource::new(&config.source)?;
    let weather = weather_client(config);

    if let Outcome::Built(alert) = build_alert(config, source, weather.as_ref(), formatter, ctx)? {
        write_preview(&alert, Path::new(&args.output), formatter)?;
    }

    Ok(())
}

/// Save the HTML body to a file.
pub fn write_preview(alert: &Alert, path: &Path, formatter: &Formatter) -> Result<()> {
    fs::write(path, &alert.email.html)?;
    formatter.emit(&formatter.success(&format!("Preview saved to {}", path.display())));
    formatter.emit(&formatter.info("Open it in a browser to see the email."));
    Ok(())
}
