//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::date::extract_date;
use crate::error::ExtractorError;
use crate::html::HtmlPage;
use crate::matching::match_category;
use crate::resolve::resolve_severity;
use crate::source::PageSource;
use chrono::{Local, NaiveDateTime};
use pollen_domain::traits::{Document, DocumentNode};
use pollen_domain::{Category, DailyPollenReport, Reading};
use tracing::{debug, info, warn};

/// Locates category labels in a page and pairs them with severities
///
/// Extraction is a pure function of the document and the supplied "now".
#[derive(Debug, Clone)]
pub struct StructuralExtractor {
    heading_tag: String,
}

impl StructuralExtractor {
    /// Create a new extractor
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            heading_tag: config.heading_tag.clone(),
        }
    }

    /// Extract readings for `date` in discovery order
    ///
    /// A category claimed by an earlier heading is skipped even when that
    /// heading produced no severity.
    pub fn extract_readings<D: Document>(&self, doc: &D, date: &str) -> Vec<Reading> {
        let mut claimed: Vec<Category> = Vec::new();
        let mut readings = Vec::new();

        for node in doc.nodes_by_tag(&self.heading_tag) {
            let text = node.joined_text("");

            let Some(category) = match_category(&text) else {
                continue;
            };

            if claimed.contains(&category) {
                debug!("Skipping duplicate heading '{}' for {}", text, category);
                continue;
            }
            claimed.push(category);

            match resolve_severity(&node) {
                Some(severity) => {
                    debug!("{} → {}", category, severity);
                    readings.push(Reading::new(category, severity, date));
                }
                None => warn!("No severity found near heading '{}'", text),
            }
        }

        readings
    }

    /// Extract a full report from a parsed document
    pub fn extract<D: Document>(
        &self,
        doc: D,
        now: NaiveDateTime,
    ) -> Result<DailyPollenReport, ExtractorError> {
        let date = extract_date(&doc.full_text(), now);
        let readings = self.extract_readings(&doc, &date);

        info!("Extracted {} readings for {}", readings.len(), date);

        DailyPollenReport::new(date, readings, now).ok_or_else(|| {
            ExtractorError::UnparseableStructure(
                "No pollen readings found on the page. The site structure may have changed."
                    .to_string(),
            )
        })
    }

    /// Parse markup and extract a report
    pub fn extract_html(
        &self,
        markup: &str,
        now: NaiveDateTime,
    ) -> Result<DailyPollenReport, ExtractorError> {
        let page = HtmlPage::parse(markup);
        self.extract(&page, now)
    }
}

impl Default for StructuralExtractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

/// Fetches the page from a source and extracts the day's report
pub struct PollenScraper<S: PageSource> {
    source: S,
    extractor: StructuralExtractor,
}

impl<S: PageSource> PollenScraper<S> {
    /// Create a scraper over a page source
    pub fn new(source: S, config: &ExtractorConfig) -> Self {
        Self {
            source,
            extractor: StructuralExtractor::new(config),
        }
    }

    /// Scrape today's report, stamped with the local wall-clock time
    pub fn scrape(&self) -> Result<DailyPollenReport, ExtractorError> {
        self.scrape_at(Local::now().naive_local())
    }

    /// Scrape with an explicit "now"
    pub fn scrape_at(&self, now: NaiveDateTime) -> Result<DailyPollenReport, ExtractorError> {
        let markup = self.source.fetch_page()?;
        self.extractor.extract_html(&markup, now)
    }
}
