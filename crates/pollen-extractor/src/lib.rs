//! Pollen Extractor
//!
//! Turns the ASAP Illinois pollen-count page into a `DailyPollenReport`.
//!
//! # Overview
//!
//! The page has no stable identifiers. Each category label is an `<h4>`
//! whose severity lives in a sibling block under the same grandparent, and
//! labels show up in both short ("Tree") and long ("Tree Pollen") forms.
//!
//! # Architecture
//!
//! ```text
//! PageSource → markup → HtmlPage → date + category nodes → severities → DailyPollenReport
//! ```
//!
//! # Key Features
//!
//! - **Date extraction**: first `MM/DD/YYYY` on the page, or today's date
//! - **Two-pass label matching**: exact match for every category before any substring match
//! - **Proximity lookup**: severity tokens scanned longest-first in the grandparent's text
//! - **Soft failures**: a category without a value is dropped, not fatal
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use pollen_domain::Severity;
//! use pollen_extractor::{ExtractorConfig, PollenScraper, StaticPage};
//!
//! let page = StaticPage::new(
//!     r#"<div>02/15/2026</div>
//!        <div><div><h4>Mold</h4></div><div><span>High</span></div></div>"#,
//! );
//! let scraper = PollenScraper::new(page, &ExtractorConfig::default());
//! let now = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
//!
//! let report = scraper.scrape_at(now).unwrap();
//! assert_eq!(report.date(), "02/15/2026");
//! assert_eq!(report.worst_severity(), Severity::High);
//! ```

#![warn(missing_docs)]

mod config;
mod date;
mod error;
mod extractor;
mod html;
mod matching;
mod resolve;
mod source;


pub use config::{ExtractorConfig, DEFAULT_URL, DEFAULT_USER_AGENT, SOURCE_ATTRIBUTION};
pub use date::{extract_date, DATE_FORMAT};
pub use error::ExtractorError;
pub use extractor::{PollenScraper, StructuralExtractor};
pub use html::{HtmlNode, HtmlPage};
pub use matching::match_category;
pub use resolve::{resolve_severity, scan_severity, SEVERITY_PRIORITY};
pub use source::{HttpPageSource, PageSource, StaticPage};
