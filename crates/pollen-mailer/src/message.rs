//! A rendered email, ready for delivery

use crate::html::build_email_html;
use crate::subject::build_email_subject;
use pollen_domain::{DailyPollenReport, WeatherSnapshot};

/// Subject plus HTML and plain-text bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
    /// Fallback for clients that do not render HTML
    pub plain: String,
}

impl EmailMessage {
    /// Render the daily alert for a report
    pub fn compose(
        report: &DailyPollenReport,
        weather: Option<&WeatherSnapshot>,
        location: &str,
    ) -> Self {
        let subject = build_email_subject(report, location);
        let plain = format!(
            "{} Daily Allergy Report\nSubject: {}\n\n\
             View this email in an HTML-capable email client for the full report.",
            location, subject
        );

        Self {
            html: build_email_html(report, weather, location),
            subject,
            plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pollen_domain::{Category, Reading, Severity};

    #[test]
    fn test_compose() {
        let at = NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let report = DailyPollenReport::new(
            "06/15/2026",
            vec![Reading::new(Category::GrassPollen, Severity::Low, "06/15/2026")],
            at,
        )
        .unwrap();

        let email = EmailMessage::compose(&report, None, "Chicago");
        assert_eq!(email.subject, "🟢 Chicago Allergy Alert (06/15/2026): Low");
        assert!(email.plain.starts_with("Chicago Daily Allergy Report"));
        assert!(email.plain.contains(&email.subject));
        assert!(email.html.contains("Grass Pollen"));
    }
}
