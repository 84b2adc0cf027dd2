//! Per-severity colours, icons and advice

use pollen_domain::Severity;

/// How a severity is rendered in the email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Background colour of the overall-level banner
    pub background: &'static str,
    /// Foreground colour for the level text
    pub text: &'static str,
    /// Leading emoji
    pub icon: &'static str,
}

impl SeverityStyle {
    /// Style for a severity
    pub const fn of(severity: Severity) -> Self {
        match severity {
            Severity::Absent => Self::new("#e8f5e9", "#388e3c", "✅"),
            Severity::Low => Self::new("#e8f5e9", "#388e3c", "🟢"),
            Severity::Moderate => Self::new("#fff8e1", "#f9a825", "🟡"),
            Severity::High => Self::new("#fff3e0", "#e65100", "🟠"),
            Severity::VeryHigh => Self::new("#ffebee", "#c62828", "🔴"),
        }
    }

    const fn new(background: &'static str, text: &'static str, icon: &'static str) -> Self {
        Self {
            background,
            text,
            icon,
        }
    }
}

/// Advice shown for the day's worst severity
pub fn recommendation(severity: Severity) -> &'static str {
    match severity {
        Severity::Absent => "Air quality is great for allergy sufferers. Enjoy the outdoors!",
        Severity::Low => {
            "Pollen levels are low today. A good day to be outside, but sensitive \
             individuals may want to keep antihistamines handy."
        }
        Severity::Moderate => {
            "Moderate pollen levels \u{2014} consider taking an antihistamine (Claritin, \
             Zyrtec, etc.) if you're sensitive. Keep windows closed."
        }
        Severity::High => {
            "High pollen today! Take your allergy medication before heading out. Avoid \
             prolonged outdoor activity, especially in the morning. Shower after being outside."
        }
        Severity::VeryHigh => {
            "⚠️ Very high pollen! Stay indoors if possible. Take allergy medication. Keep all \
             windows closed. Use air purifiers. Shower and change clothes after any outdoor \
             exposure."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_style_and_advice() {
        for severity in Severity::ALL {
            let style = SeverityStyle::of(severity);
            assert!(style.background.starts_with('#'));
            assert!(style.text.starts_with('#'));
            assert!(!style.icon.is_empty());
            assert!(recommendation(severity).len() > 10);
        }
    }

    #[test]
    fn test_moderate_advice_names_antihistamines() {
        assert_eq!(
            recommendation(Severity::Moderate),
            "Moderate pollen levels \u{2014} consider taking an antihistamine (Claritin, Zyrtec, \
             etc.) if you're sensitive. Keep windows closed."
        );
        assert!(recommendation(Severity::VeryHigh).ends_with("after any outdoor exposure."));
    }

    #[test]
    fn test_very_high_is_red() {
        let style = SeverityStyle::of(Severity::VeryHigh);
        assert_eq!(style.icon, "🔴");
        assert_eq!(style.text, "#c62828");
    }

    #[test]
    fn test_absent_and_low_share_colours() {
        let absent = SeverityStyle::of(Severity::Absent);
        let low = SeverityStyle::of(Severity::Low);
        assert_eq!(absent.background, low.background);
        assert_ne!(absent.icon, low.icon);
    }
}
