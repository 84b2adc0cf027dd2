//! Daily report module - all readings for one collection day

use crate::{Category, Reading, Severity};
use chrono::NaiveDateTime;

/// All readings scraped for a single day
///
/// Holds at most one reading per category, in discovery order, and is never
/// empty. A report may cover fewer than five categories when the page omits
/// or mis-renders some of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPollenReport {
    date: String,
    readings: Vec<Reading>,
    collected_at: NaiveDateTime,
}

impl DailyPollenReport {
    /// Build a report from readings in discovery order
    ///
    /// Later readings for an already-present category are discarded.
    /// Returns `None` when no readings are left.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use pollen_domain::{Category, DailyPollenReport, Reading, Severity};
    ///
    /// let at = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
    /// let report = DailyPollenReport::new(
    ///     "02/15/2026",
    ///     vec![Reading::new(Category::Mold, Severity::High, "02/15/2026")],
    ///     at,
    /// )
    /// .unwrap();
    /// assert_eq!(report.worst_severity(), Severity::High);
    ///
    /// assert!(DailyPollenReport::new("02/15/2026", Vec::new(), at).is_none());
    /// ```
    pub fn new(
        date: impl Into<String>,
        readings: Vec<Reading>,
        collected_at: NaiveDateTime,
    ) -> Option<Self> {
        let mut unique: Vec<Reading> = Vec::with_capacity(readings.len());
        for reading in readings {
            if unique.iter().all(|r| r.category() != reading.category()) {
                unique.push(reading);
            }
        }

        if unique.is_empty() {
            return None;
        }

        Some(Self {
            date: date.into(),
            readings: unique,
            collected_at,
        })
    }

    /// Report date, verbatim as published
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Readings in discovery order
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// When the page was scraped
    pub fn collected_at(&self) -> NaiveDateTime {
        self.collected_at
    }

    /// Get the reading for a category
    pub fn get_reading(&self, category: Category) -> Option<&Reading> {
        self.readings.iter().find(|r| r.category() == category)
    }

    /// The reading with the highest severity
    ///
    /// Scans left to right and keeps the first maximum, so ties resolve to
    /// the earliest reading.
    pub fn worst_reading(&self) -> &Reading {
        let mut worst = &self.readings[0];
        for reading in &self.readings[1..] {
            if reading.severity().rank() > worst.severity().rank() {
                worst = reading;
            }
        }
        worst
    }

    /// The highest severity across all readings
    pub fn worst_severity(&self) -> Severity {
        self.worst_reading().severity()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn reading_strategy() -> impl Strategy<Value = Reading> {
        (select(Category::ALL.to_vec()), select(Severity::ALL.to_vec()))
            .prop_map(|(c, s)| Reading::new(c, s, "06/15/2026"))
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    proptest! {
        /// Property: the worst reading is the first reading with the maximum rank
        #[test]
        fn test_worst_is_first_maximum(readings in prop::collection::vec(reading_strategy(), 1..12)) {
            let report = DailyPollenReport::new("06/15/2026", readings, at()).unwrap();
            let max = report.readings().iter().map(|r| r.severity()).max().unwrap();
            let first = report.readings().iter().position(|r| r.severity() == max).unwrap();

            prop_assert_eq!(report.worst_severity(), max);
            prop_assert_eq!(report.worst_reading(), &report.readings()[first]);
        }

        /// Property: at most one reading per category, first occurrence kept
        #[test]
        fn test_one_reading_per_category(readings in prop::collection::vec(reading_strategy(), 1..12)) {
            let report = DailyPollenReport::new("06/15/2026", readings.clone(), at()).unwrap();

            for category in Category::ALL {
                let kept: Vec<_> = report
                    .readings()
                    .iter()
                    .filter(|r| r.category() == category)
                    .collect();
                prop_assert!(kept.len() <= 1);
                if let Some(first) = readings.iter().find(|r| r.category() == category) {
                    prop_assert_eq!(kept[0], first);
                }
            }
        }
    }
}
