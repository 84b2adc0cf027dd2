//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use crate::schedule::SeasonWindow;
use pollen_extractor::ExtractorConfig;
use pollen_mailer::{SmtpSettings, DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
///
/// Every section is optional in the file; missing values fall back to the
/// Chicago defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pollen page source
    #[serde(default)]
    pub source: ExtractorConfig,

    /// Place named in the email and used for the weather lookup
    #[serde(default)]
    pub location: Location,

    /// When to run
    #[serde(default)]
    pub season: SeasonWindow,

    /// Weather lookup
    #[serde(default)]
    pub weather: WeatherSettings,

    /// SMTP relay (credentials come from the environment)
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// Terminal output
    #[serde(default)]
    pub output: OutputSettings,
}

/// Report location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Display name
    pub name: String,
    /// Latitude, decimal degrees
    pub latitude: f64,
    /// Longitude, decimal degrees
    pub longitude: f64,
    /// IANA timezone for the weather lookup
    pub timezone: String,
}

/// Weather lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSettings {
    /// Include current conditions in the email
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Open-Meteo forecast endpoint
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    /// Request timeout (seconds)
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

/// SMTP relay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// Relay host
    pub server: String,
    /// Relay port
    pub port: u16,
    /// Display name on the `From` header
    pub sender_name: String,
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".pollen-alert").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::path(),
        }
    }

    /// Load configuration from a file, or the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.source
            .validate()
            .and_then(|_| self.season.validate())
            .and_then(|_| self.weather.validate())
            .and_then(|_| self.location.validate())
            .map_err(CliError::Config)
    }

    /// SMTP settings for a delivery, with credentials from the caller.
    pub fn smtp_settings(
        &self,
        sender: Option<String>,
        password: Option<String>,
        recipient: Option<String>,
    ) -> SmtpSettings {
        SmtpSettings {
            server: self.smtp.server.clone(),
            port: self.smtp.port,
            sender: sender.unwrap_or_default(),
            password: password.unwrap_or_default(),
            recipient: recipient.unwrap_or_default(),
            sender_name: self.smtp.sender_name.clone(),
        }
    }
}

impl Location {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("location name must not be empty".to_string());
        }
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude)
        {
            return Err(format!(
                "invalid coordinates ({}, {})",
                self.latitude, self.longitude
            ));
        }
        Ok(())
    }
}

impl WeatherSettings {
    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("weather timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            name: "Chicago".to_string(),
            latitude: 41.88,
            longitude: -87.63,
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_weather_endpoint(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        let defaults = SmtpSettings::default();
        Self {
            server: DEFAULT_SMTP_SERVER.to_string(),
            port: DEFAULT_SMTP_PORT,
            sender_name: defaults.sender_name,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_weather_endpoint() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}
