//! Season window - when the source publishes new counts.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Months (inclusive) and weekdays on which counts are published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonWindow {
    /// First month of the season (1-12)
    pub start_month: u32,

    /// Last month of the season (1-12)
    pub end_month: u32,

    /// Skip Saturdays and Sundays
    pub weekdays_only: bool,
}

/// Result of checking a date against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Counts are expected today
    Open,
    /// Outside the collection months
    OffSeason {
        /// Month of the checked date (1-12)
        month: u32,
    },
    /// Saturday or Sunday
    Weekend,
}

impl SeasonWindow {
    /// Check a date against the window.
    pub fn check(&self, date: NaiveDate) -> Gate {
        let month = date.month();
        if month < self.start_month || month > self.end_month {
            return Gate::OffSeason { month };
        }

        if self.weekdays_only && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Gate::Weekend;
        }

        Gate::Open
    }

    /// Validate the window.
    pub fn validate(&self) -> Result<(), String> {
        for (name, month) in [("start_month", self.start_month), ("end_month", self.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(format!("{} must be between 1 and 12, got {}", name, month));
            }
        }
        if self.start_month > self.end_month {
            return Err(format!(
                "start_month ({}) must not be after end_month ({})",
                self.start_month, self.end_month
            ));
        }
        Ok(())
    }
}

impl Default for SeasonWindow {
    fn default() -> Self {
        Self {
            start_month: 4,
            end_month: 10,
            weekdays_only: true,
        }
    }
}

impl fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}–{}",
            month_name(self.start_month),
            month_name(self.end_month)
        )
    }
}

/// English month name, or the number itself when out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_in_season() {
        // Wednesday
        assert_eq!(SeasonWindow::default().check(date(2026, 6, 3)), Gate::Open);
    }

    #[test]
    fn test_season_bounds_are_inclusive() {
        let window = SeasonWindow::default();
        // Wednesday 1 April, Friday 30 October
        assert_eq!(window.check(date(2026, 4, 1)), Gate::Open);
        assert_eq!(window.check(date(2026, 10, 30)), Gate::Open);
    }

    #[test]
    fn test_off_season() {
        let window = SeasonWindow::default();
        assert_eq!(
            window.check(date(2026, 2, 16)),
            Gate::OffSeason { month: 2 }
        );
        assert_eq!(
            window.check(date(2026, 11, 2)),
            Gate::OffSeason { month: 11 }
        );
    }

    #[test]
    fn test_off_season_takes_precedence_over_weekend() {
        // Sunday 1 February
        assert_eq!(
            SeasonWindow::default().check(date(2026, 2, 1)),
            Gate::OffSeason { month: 2 }
        );
    }

    #[test]
    fn test_weekend() {
        let window = SeasonWindow::default();
        assert_eq!(window.check(date(2026, 6, 6)), Gate::Weekend);
        assert_eq!(window.check(date(2026, 6, 7)), Gate::Weekend);

        let every_day = SeasonWindow {
            weekdays_only: false,
            ..SeasonWindow::default()
        };
        assert_eq!(every_day.check(date(2026, 6, 6)), Gate::Open);
    }

    #[test]
    fn test_validate() {
        assert!(SeasonWindow::default().validate().is_ok());

        let inverted = SeasonWindow {
            start_month: 10,
            end_month: 4,
            ..SeasonWindow::default()
        };
        assert!(inverted.validate().is_err());

        let bad_month = SeasonWindow {
            end_month: 13,
            ..SeasonWindow::default()
        };
        assert!(bad_month.validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SeasonWindow::default().to_string(), "April–October");
        assert_eq!(month_name(0), "0");
    }
}
