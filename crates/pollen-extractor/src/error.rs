//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while fetching or extracting a report
///
/// Only two kinds exist. A missing date, a missing severity for one category
/// or a duplicated category label are absorbed inside the extractor.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The page could not be retrieved (network error, timeout, non-2xx)
    #[error("Source unreachable: {0}")]
    SourceUnreachable(String),

    /// The page loaded but no category could be resolved
    #[error("Unparseable page structure: {0}")]
    UnparseableStructure(String),
}

impl From<reqwest::Error> for ExtractorError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ExtractorError::SourceUnreachable(format!("request timed out: {}", e))
        } else if let Some(status) = e.status() {
            ExtractorError::SourceUnreachable(format!("HTTP {}: {}", status, e))
        } else {
            ExtractorError::SourceUnreachable(e.to_string())
        }
    }
}
