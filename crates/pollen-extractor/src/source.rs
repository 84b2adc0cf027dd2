//! Page sources - where the raw markup comes from

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use tracing::debug;

/// Something that can hand over the current page markup
pub trait PageSource {
    /// Fetch the page once
    fn fetch_page(&self) -> Result<String, ExtractorError>;
}

/// Fetches the page over HTTP with a single blocking GET
///
/// No retries: a network error, a timeout or a non-2xx status all surface
/// as `ExtractorError::SourceUnreachable`.
pub struct HttpPageSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpPageSource {
    /// Create a source from the extractor configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    /// URL this source fetches
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self) -> Result<String, ExtractorError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| {
                ExtractorError::SourceUnreachable(format!("Failed to reach {}: {}", self.url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractorError::SourceUnreachable(format!(
                "Failed to reach {}: HTTP {}",
                self.url, status
            )));
        }

        let body = response.text()?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}

/// A page held in memory, for previews and tests
#[derive(Debug, Clone)]
pub struct StaticPage {
    markup: String,
}

impl StaticPage {
    /// Wrap already-fetched markup
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl PageSource for StaticPage {
    fn fetch_page(&self) -> Result<String, ExtractorError> {
        Ok(self.markup.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_uses_configured_url() {
        let config = ExtractorConfig {
            url: "http://localhost:9/pollen".to_string(),
            ..ExtractorConfig::default()
        };
        let source = HttpPageSource::new(&config).unwrap();
        assert_eq!(source.url(), "http://localhost:9/pollen");
    }

    #[test]
    fn test_unreachable_host_is_source_error() {
        let config = ExtractorConfig {
            url: "http://127.0.0.1:9/pollen-count/".to_string(),
            timeout_secs: 2,
            ..ExtractorConfig::default()
        };
        let source = HttpPageSource::new(&config).unwrap();
        let result = source.fetch_page();
        assert!(matches!(result, Err(ExtractorError::SourceUnreachable(_))));
    }

    #[test]
    fn test_static_page() {
        let page = StaticPage::new("<h4>Mold</h4>");
        assert_eq!(page.fetch_page().unwrap(), "<h4>Mold</h4>");
    }
}
