//! Scrape command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use pollen_extractor::{HttpPageSource, PollenScraper, SOURCE_ATTRIBUTION};

/// Execute the scrape command.
pub fn execute_scrape(config: &Config, formatter: &Formatter) -> Result<()> {
    let source = HttpPageSource::new(&config.source)?;
    let report = PollenScraper::new(source, &config.source).scrape()?;

    println!("{}", formatter.format_report(&report)?);
    formatter.emit(&formatter.info(&format!("Source: {}", SOURCE_ATTRIBUTION)));

    Ok(())
}
