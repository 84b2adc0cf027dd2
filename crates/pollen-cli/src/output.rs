//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::schedule::{month_name, Gate, SeasonWindow};
use colored::*;
use pollen_domain::{DailyPollenReport, Severity, WeatherSnapshot};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print a progress line (table format only).
    pub fn emit(&self, line: &str) {
        if self.format == OutputFormat::Table {
            println!("{}", line);
        }
    }

    /// Format a report.
    pub fn format_report(&self, report: &DailyPollenReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.worst_severity().to_string()),
        }
    }

    fn format_report_json(&self, report: &DailyPollenReport) -> Result<String> {
        let readings: Vec<serde_json::Value> = report
            .readings()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "category": r.category().label(),
                    "severity": r.severity().label(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "date": report.date(),
            "collected_at": report.collected_at().format("%Y-%m-%d %H:%M:%S").to_string(),
            "worst": report.worst_severity().label(),
            "readings": readings,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &DailyPollenReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Allergen", "Level"]);

        for reading in report.readings() {
            builder.push_record([
                reading.category().label().to_string(),
                self.severity(reading.severity()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "{}\n{}\nOverall: {}",
            self.colorize(&format!("Pollen count for {}", report.date()), "cyan"),
            table,
            self.severity(report.worst_severity())
        )
    }

    /// Severity label, colored by level.
    pub fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Absent | Severity::Low => "green",
            Severity::Moderate => "yellow",
            Severity::High => "magenta",
            Severity::VeryHigh => "red",
        };
        self.colorize(severity.label(), color)
    }

    /// Explain why a run was skipped.
    pub fn gate(&self, gate: Gate, window: &SeasonWindow) -> String {
        match gate {
            Gate::Open => self.info("In season"),
            Gate::OffSeason { month } => self.warning(&format!(
                "Off-season ({}). Counts are published {} only; use --force to run anyway.",
                month_name(month),
                window
            )),
            Gate::Weekend => self.warning(
                "Weekend. Counts are not updated on weekends; use --force to run anyway.",
            ),
        }
    }

    /// One-line weather summary.
    pub fn weather(&self, weather: &WeatherSnapshot) -> String {
        self.success(&format!(
            "{}°F, {}% humidity, {} mph wind",
            weather.temperature_f, weather.humidity_pct, weather.wind_mph
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pollen_domain::{Category, Reading};

    fn report() -> DailyPollenReport {
        let at = NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        DailyPollenReport::new(
            "06/15/2026",
            vec![
                Reading::new(Category::TreePollen, Severity::High, "06/15/2026"),
                Reading::new(Category::Mold, Severity::Low, "06/15/2026"),
            ],
            at,
        )
        .unwrap()
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Allergen"));
        assert!(output.contains("Tree Pollen"));
        assert!(output.contains("Overall: High"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "06/15/2026");
        assert_eq!(value["worst"], "High");
        assert_eq!(value["readings"][1]["category"], "Mold");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_report(&report()).unwrap(), "High");
    }

    #[test]
    fn test_gate_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let window = SeasonWindow::default();
        let msg = formatter.gate(Gate::OffSeason { month: 2 }, &window);
        assert!(msg.contains("February"));
        assert!(msg.contains("April–October"));
        assert!(formatter.gate(Gate::Weekend, &window).contains("Weekend"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.severity(Severity::VeryHigh), "Very High");
    }
}
