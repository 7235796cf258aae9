//! Weather lookup.
//!
//! A single-call wrapper around the OpenWeatherMap current-weather
//! endpoint. Weather is best-effort: every record save triggers one
//! fresh lookup, nothing is cached or retried, and a failed lookup
//! degrades to a sentinel string without blocking the save.

mod client;
mod error;
mod mock;
mod types;

pub use client::{WeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use mock::MockWeatherClient;
pub use types::{MainReadings, WeatherCondition, WeatherReport, WeatherResponse};

/// Sentinel stored in a record when the lookup fails for any reason.
pub const WEATHER_UNAVAILABLE: &str = "Ошибка";

/// Source of current-weather reports.
///
/// This abstraction lets the entry flow run against the live endpoint,
/// canned data, or a failing stub in tests.
pub trait WeatherProvider {
    /// Fetch the current weather at the given coordinates.
    fn current(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> impl Future<Output = Result<WeatherReport, WeatherError>> + Send;
}
