//! Command implementations.

pub mod config;
pub mod preview;
pub mod run;
pub mod scrape;

pub use self::config::execute_config;
pub use self::preview::execute_preview;
pub use self::run::execute_run;
pub use self::scrape::execute_scrape;

use crate::config::Config;
use crate::weather::OpenMeteo;
use tracing::warn;

/// Weather client for the configured location, if enabled and buildable.
pub(crate) fn weather_client(config: &Config) -> Option<OpenMeteo> {
    OpenMeteo::from_settings(&config.weather, &config.location).unwrap_or_else(|e| {
        warn!("Weather lookup disabled: {:#}", e);
        None
    })
}
