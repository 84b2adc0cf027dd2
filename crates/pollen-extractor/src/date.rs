//! Report date extraction

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// Output format of report dates
pub const DATE_FORMAT: &str = "%m/%d/%Y";

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("hard-coded date regex must compile"))
}

/// Find the first `MM/DD/YYYY` substring in the page text
///
/// The match is returned verbatim with no calendar validation, so
/// `13/40/9999` is accepted as-is. Without a match, `now` is formatted the
/// same way.
pub fn extract_date(text: &str, now: NaiveDateTime) -> String {
    match date_pattern().find(text) {
        Some(m) => m.as_str().to_string(),
        None => now.format(DATE_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_extracts_date() {
        assert_eq!(extract_date("Pollen count for 02/15/2026 is", now()), "02/15/2026");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_date("02/13/2026 then 02/15/2026", now()), "02/13/2026");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(extract_date("as of 13/40/9999", now()), "13/40/9999");
    }

    #[test]
    fn test_falls_back_to_now() {
        assert_eq!(extract_date("no date here", now()), "06/03/2026");
        assert_eq!(extract_date("2/15/2026", now()), "06/03/2026");
    }
}
