//! Subject line

use crate::style::SeverityStyle;
use pollen_domain::DailyPollenReport;

/// Build the subject line, e.g. `🟠 Chicago Allergy Alert (06/15/2026): High`
pub fn build_email_subject(report: &DailyPollenReport, location: &str) -> String {
    let worst = report.worst_severity();
    format!(
        "{} {} Allergy Alert ({}): {}",
        SeverityStyle::of(worst).icon,
        location,
        report.date(),
        worst
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pollen_domain::{Category, Reading, Severity};

    fn report(levels: &[(Category, Severity)]) -> DailyPollenReport {
        let at = NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let readings = levels
            .iter()
            .map(|&(c, s)| Reading::new(c, s, "06/15/2026"))
            .collect();
        DailyPollenReport::new("06/15/2026", readings, at).unwrap()
    }

    #[test]
    fn test_subject_names_date_location_and_worst() {
        let subject = build_email_subject(
            &report(&[
                (Category::TreePollen, Severity::High),
                (Category::GrassPollen, Severity::Low),
            ]),
            "Chicago",
        );
        assert_eq!(subject, "🟠 Chicago Allergy Alert (06/15/2026): High");
    }

    #[test]
    fn test_subject_very_high() {
        let subject = build_email_subject(
            &report(&[(Category::TreePollen, Severity::VeryHigh)]),
            "Evanston",
        );
        assert!(subject.contains("Very High"));
        assert!(subject.contains("Evanston"));
        assert!(subject.starts_with("🔴"));
    }
}
