//! Current conditions from Open-Meteo (free, no API key).
//!
//! The lookup is best-effort: any failure is logged and the alert goes out
//! without a weather block.

use crate::config::{Location, WeatherSettings};
use anyhow::{Context, Result};
use pollen_domain::WeatherSnapshot;
use serde_json::Value;
use tracing::{debug, warn};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation";

/// Anything that can report current conditions.
pub trait WeatherSource {
    /// Fetch current conditions.
    fn current(&self) -> Result<WeatherSnapshot>;
}

/// Blocking Open-Meteo client for one location.
pub struct OpenMeteo {
    endpoint: String,
    location: Location,
    client: reqwest::blocking::Client,
}

impl OpenMeteo {
    /// Create a client, or `None` when the lookup is disabled.
    pub fn from_settings(settings: &WeatherSettings, location: &Location) -> Result<Option<Self>> {
        if !settings.enabled {
            return Ok(None);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout())
            .build()
            .context("Failed to build weather HTTP client")?;

        Ok(Some(Self {
            endpoint: settings.endpoint.clone(),
            location: location.clone(),
            client,
        }))
    }
}

impl WeatherSource for OpenMeteo {
    fn current(&self) -> Result<WeatherSnapshot> {
        debug!("GET {} for {}", self.endpoint, self.location.name);

        let body: Value = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", self.location.latitude.to_string()),
                ("longitude", self.location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("wind_speed_unit", "mph".to_string()),
                ("timezone", self.location.timezone.clone()),
            ])
            .send()
            .context("Weather request failed")?
            .error_for_status()
            .context("Weather service returned an error status")?
            .json()
            .context("Weather response was not JSON")?;

        parse_current(&body)
    }
}

/// Turn an Open-Meteo response into a snapshot.
///
/// A missing `current` object is an error; a missing field inside it reads
/// as zero.
pub fn parse_current(body: &Value) -> Result<WeatherSnapshot> {
    let current = body
        .get("current")
        .and_then(Value::as_object)
        .context("Weather response has no 'current' object")?;

    let field = |name: &str| current.get(name).and_then(Value::as_f64).unwrap_or(0.0);

    Ok(WeatherSnapshot {
        temperature_f: field("temperature_2m").round() as i32,
        humidity_pct: field("relative_humidity_2m").round() as i32,
        wind_mph: field("wind_speed_10m").round() as i32,
        precipitation_mm: (field("precipitation") * 10.0).round() / 10.0,
    })
}

/// Fetch conditions, logging and swallowing any failure.
pub fn lookup<W: WeatherSource>(source: Option<&W>) -> Option<WeatherSnapshot> {
    let source = source?;
    match source.current() {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("Could not fetch weather: {:#}", e);
            None
        }
    }
}
