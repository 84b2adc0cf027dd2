//! Severity module - ordered qualitative pollen levels

use std::fmt;

/// Severity of a reading
///
/// The derived ordering is the severity order used by the worst-of
/// reduction: `Absent < Low < Moderate < High < VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Nothing counted
    Absent,

    /// Low count
    Low,

    /// Moderate count
    Moderate,

    /// High count
    High,

    /// Very high count
    VeryHigh,
}

impl Severity {
    /// Every severity, lowest first
    pub const ALL: [Severity; 5] = [
        Severity::Absent,
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::VeryHigh,
    ];

    /// Get the label as printed on the source page
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Absent => "Absent",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::VeryHigh => "Very High",
        }
    }

    /// Numeric rank, 0 (Absent) to 4 (Very High)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Absent => 0,
            Severity::Low => 1,
            Severity::Moderate => 2,
            Severity::High => 3,
            Severity::VeryHigh => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
