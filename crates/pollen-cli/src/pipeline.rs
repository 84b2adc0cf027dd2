//! The daily alert: gate, scrape, weather, render.
//!
//! Shared by `run` (which then sends) and `preview` (which then writes a
//! file). Sources are generic so the whole flow runs against in-memory
//! pages and mailers in tests.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::schedule::Gate;
use crate::weather::{lookup, WeatherSource};
use chrono::NaiveDateTime;
use pollen_domain::{DailyPollenReport, WeatherSnapshot};
use pollen_extractor::{PageSource, PollenScraper};
use pollen_mailer::EmailMessage;
use tracing::info;

/// A rendered alert and what it was built from.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Scraped report
    pub report: DailyPollenReport,
    /// Conditions at collection time, if available
    pub weather: Option<WeatherSnapshot>,
    /// Rendered email
    pub email: EmailMessage,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Nothing to do today
    Skipped(Gate),
    /// Alert built (and sent or saved by the caller)
    Built(Alert),
}

/// Inputs that vary per invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    /// Local wall-clock time
    pub now: NaiveDateTime,
    /// Ignore the season window
    pub force: bool,
}

/// Check the season window, honouring `--force`.
pub fn check_gate(config: &Config, ctx: RunContext) -> Gate {
    if ctx.force {
        return Gate::Open;
    }
    config.season.check(ctx.now.date())
}

/// Run the gate, scrape the page, look up the weather and render the email.
pub fn build_alert<S, W>(
    config: &Config,
    source: S,
    weather: Option<&W>,
    formatter: &Formatter,
    ctx: RunContext,
) -> Result<Outcome>
where
    S: PageSource,
    W: WeatherSource,
{
    if ctx.force {
        formatter.emit(&formatter.info("Forced run, skipping season and weekday checks"));
    }

    let gate = check_gate(config, ctx);
    if gate != Gate::Open {
        formatter.emit(&formatter.gate(gate, &config.season));
        info!("Skipped: {:?}", gate);
        return Ok(Outcome::Skipped(gate));
    }

    let report = PollenScraper::new(source, &config.source).scrape_at(ctx.now)?;
    formatter.emit(&formatter.success(&format!(
        "Got {} readings for {}",
        report.readings().len(),
        report.date()
    )));
    println!("{}", formatter.format_report(&report)?);

    let weather = lookup(weather);
    if let Some(snapshot) = &weather {
        formatter.emit(&formatter.weather(snapshot));
    }

    let email = EmailMessage::compose(&report, weather.as_ref(), &config.location.name);
    formatter.emit(&formatter.success(&format!("Subject: {}", email.subject)));

    Ok(Outcome::Built(Alert {
        report,
        weather,
        email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_force_opens_gate() {
        let config = Config::default();
        let ctx = RunContext {
            now: at(2026, 1, 10),
            force: true,
        };
        assert_eq!(check_gate(&config, ctx), Gate::Open);
    }

    #[test]
    fn test_gate_uses_season() {
        let config = Config::default();
        let ctx = RunContext {
            now: at(2026, 1, 10),
            force: false,
        };
        assert_eq!(check_gate(&config, ctx), Gate::OffSeason { month: 1 });
    }
}
