//! OpenWeatherMap HTTP client.

use super::WeatherProvider;
use super::error::WeatherError;
use super::types::{WeatherReport, WeatherResponse};

/// Default base URL for the current-weather API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key sent as the `appid` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production OpenWeatherMap)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Weather API client.
///
/// Issues exactly one request per lookup: no retry, no caching. Two
/// records saved at the same stop in the same minute still cost two
/// calls, which matches how rarely records are actually saved.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new weather client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch the current weather at the given coordinates.
    ///
    /// Coordinates come straight from the stop directory as decimal
    /// strings and are forwarded unparsed. The request always asks for
    /// Russian descriptions and metric units, matching the CSV the
    /// downstream consumers expect.
    pub async fn current(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude),
                ("lon", longitude),
                ("appid", self.api_key.as_str()),
                ("lang", "ru"),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: WeatherResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Json {
                message: e.to_string(),
            })?;

        Ok(WeatherReport::from(parsed))
    }
}

impl WeatherProvider for WeatherClient {
    async fn current(&self, latitude: &str, longitude: &str) -> Result<WeatherReport, WeatherError> {
        WeatherClient::current(self, latitude, longitude).await
    }
}
