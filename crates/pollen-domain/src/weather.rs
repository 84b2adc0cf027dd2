//! Weather snapshot shown alongside a report

/// Current conditions at the report location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature, whole degrees Fahrenheit
    pub temperature_f: i32,

    /// Relative humidity, whole percent
    pub humidity_pct: i32,

    /// Wind speed, whole miles per hour
    pub wind_mph: i32,

    /// Precipitation in millimetres, one decimal place
    pub precipitation_mm: f64,
}
