//! Reading module

use crate::{Category, Severity};

/// A single category reading for one report date
///
/// Readings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    category: Category,
    severity: Severity,
    date: String,
}

impl Reading {
    /// Create a new reading
    pub fn new(category: Category, severity: Severity, date: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            date: date.into(),
        }
    }

    /// The category this reading belongs to
    pub fn category(&self) -> Category {
        self.category
    }

    /// The reported severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Report date, verbatim as published (`MM/DD/YYYY`)
    pub fn date(&self) -> &str {
        &self.date
    }
}
