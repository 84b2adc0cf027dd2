//! Configuration for the Extractor and its page source

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pollen-count page published by ASAP Illinois
pub const DEFAULT_URL: &str = "https://asapillinois.com/pollen-count/";

/// Client identifier sent with every page request
pub const DEFAULT_USER_AGENT: &str = "AllergyMonitor/1.0 (personal portfolio project; \
     not for commercial use; contact: github.com/daveherzau)";

/// Attribution line for reports built from the default source
pub const SOURCE_ATTRIBUTION: &str = "ASAP Illinois (asapillinois.com/pollen-count/)";

/// Configuration for fetching and extracting the pollen page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Page URL
    pub url: String,

    /// User-Agent header value
    pub user_agent: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Tag used for category labels on the page
    pub heading_tag: String,
}

impl ExtractorConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.heading_tag.trim().is_empty() {
            return Err("heading_tag must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 15,
            heading_tag: "h4".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = ExtractorConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_heading_tag() {
        let mut config = ExtractorConfig::default();
        config.heading_tag = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
